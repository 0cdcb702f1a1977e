//! # adminhub-service
//!
//! Business logic service layer for AdminHub. The generic [`CrudService`]
//! implements paginated listing, sorted listing, detail retrieval, create,
//! update, bulk delete, and spreadsheet export for any entity with a
//! mapper; domain modules wire it up for their concrete types.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod announcement;
pub mod crud;
pub mod export;

pub use announcement::AnnouncementService;
pub use crud::CrudService;
