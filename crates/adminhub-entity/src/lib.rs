//! # adminhub-entity
//!
//! Domain entity models for AdminHub. Every entity struct represents a
//! database table row and derives `Debug`, `Clone`, `Serialize`,
//! `Deserialize`, and `sqlx::FromRow`. Each domain module also carries its
//! write request, query object, and read-side view projections.

pub mod announcement;
pub mod user;
