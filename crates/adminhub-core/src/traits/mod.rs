//! Core traits defined in `adminhub-core` and implemented by other crates.

pub mod directory;
pub mod export;
pub mod mapper;
pub mod query;
pub mod request;
pub mod service;
pub mod view;

pub use directory::UserDirectory;
pub use export::{CellValue, ExportRow};
pub use mapper::EntityMapper;
pub use query::QueryFilter;
pub use request::WriteRequest;
pub use service::Service;
pub use view::{AuditDetailView, AuditView};
