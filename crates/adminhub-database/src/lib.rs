//! # adminhub-database
//!
//! PostgreSQL connection management, the dynamic WHERE/ORDER BY builder,
//! and concrete mapper implementations for all AdminHub entities.

pub mod connection;
pub mod mappers;
pub mod query;

pub use connection::DatabasePool;
