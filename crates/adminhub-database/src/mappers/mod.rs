//! Mapper implementations for all AdminHub entities.

pub mod announcement;
pub mod user;

pub use announcement::AnnouncementMapper;
pub use user::PgUserDirectory;
