//! Admin user entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An administrator account (`sys_user`).
///
/// Only the fields the audit directory needs are modeled here; account
/// management itself is owned by the identity system, not this workspace.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AdminUser {
    /// Primary key.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Human-readable display name shown in audit columns.
    pub nickname: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl AdminUser {
    /// The name shown for this user in audit columns.
    ///
    /// Falls back to the login name when no nickname is set.
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.username)
    }
}
