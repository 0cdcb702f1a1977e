//! Admin user domain.

pub mod model;

pub use model::AdminUser;
