//! User directory implementation over the `sys_user` table.

use async_trait::async_trait;
use sqlx::PgPool;

use adminhub_core::error::{AppError, ErrorKind};
use adminhub_core::result::AppResult;
use adminhub_core::traits::UserDirectory;
use adminhub_entity::user::AdminUser;

/// Resolves audit display names from the `sys_user` table.
#[derive(Debug, Clone)]
pub struct PgUserDirectory {
    pool: PgPool,
}

impl PgUserDirectory {
    /// Create a new user directory.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<AdminUser>> {
        sqlx::query_as::<_, AdminUser>("SELECT * FROM sys_user WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }
}

#[async_trait]
impl UserDirectory for PgUserDirectory {
    async fn display_name(&self, user_id: i64) -> AppResult<Option<String>> {
        Ok(self
            .find_by_id(user_id)
            .await?
            .map(|user| user.display_name().to_string()))
    }
}
