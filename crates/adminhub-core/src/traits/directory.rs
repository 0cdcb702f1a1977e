//! User directory trait for audit display-name lookups.

use async_trait::async_trait;

use crate::result::AppResult;

/// Resolves a user id to a human-readable display name.
///
/// Implemented in `adminhub-database` over the `sys_user` table. The CRUD
/// service treats lookup failures as non-fatal: a failed or empty lookup
/// leaves the display-name field unset on the view.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Return the display name for the given user id, if the user exists.
    async fn display_name(&self, user_id: i64) -> AppResult<Option<String>>;
}
