//! Announcement mapper implementation.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use adminhub_core::error::{AppError, ErrorKind};
use adminhub_core::result::AppResult;
use adminhub_core::traits::EntityMapper;
use adminhub_core::types::pagination::{PageRequest, PageResponse};
use adminhub_core::types::sorting::SortField;
use adminhub_entity::announcement::{Announcement, AnnouncementQuery, AnnouncementReq};

use crate::query;

/// Columns of `sys_announcement` that may appear in filters and sorts.
const COLUMNS: &[&str] = &[
    "id",
    "title",
    "content",
    "status",
    "effective_at",
    "expires_at",
    "created_by",
    "created_at",
    "updated_by",
    "updated_at",
];

/// Mapper for announcement CRUD and query operations.
#[derive(Debug, Clone)]
pub struct AnnouncementMapper {
    pool: PgPool,
}

impl AnnouncementMapper {
    /// Create a new announcement mapper.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityMapper for AnnouncementMapper {
    type Entity = Announcement;
    type Filter = AnnouncementQuery;
    type Write = AnnouncementReq;

    async fn select_by_id(&self, id: i64) -> AppResult<Option<Announcement>> {
        sqlx::query_as::<_, Announcement>("SELECT * FROM sys_announcement WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find announcement by id", e)
            })
    }

    async fn select_list(
        &self,
        filter: &AnnouncementQuery,
        sort: &[SortField],
    ) -> AppResult<Vec<Announcement>> {
        let mut qb: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT * FROM sys_announcement");
        query::push_where(&mut qb, filter, COLUMNS)?;
        query::push_order_by(&mut qb, sort, COLUMNS)?;

        qb.build_query_as::<Announcement>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list announcements", e)
            })
    }

    async fn select_page(
        &self,
        filter: &AnnouncementQuery,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Announcement>> {
        let mut count_qb: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM sys_announcement");
        query::push_where(&mut count_qb, filter, COLUMNS)?;
        let total: i64 = count_qb
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count announcements", e)
            })?;

        let mut qb: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT * FROM sys_announcement");
        query::push_where(&mut qb, filter, COLUMNS)?;
        if page.sort.is_empty() {
            qb.push(" ORDER BY id DESC");
        } else {
            query::push_order_by(&mut qb, &page.sort, COLUMNS)?;
        }
        qb.push(" LIMIT ");
        qb.push_bind(page.limit() as i64);
        qb.push(" OFFSET ");
        qb.push_bind(page.offset() as i64);

        let rows = qb
            .build_query_as::<Announcement>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to page announcements", e)
            })?;

        Ok(PageResponse::new(
            rows,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    async fn insert(&self, request: &AnnouncementReq) -> AppResult<i64> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO sys_announcement (title, content, status, effective_at, expires_at) \
             VALUES ($1, $2, COALESCE($3, 'draft'), $4, $5) \
             RETURNING id",
        )
        .bind(&request.title)
        .bind(&request.content)
        .bind(request.status)
        .bind(request.effective_at)
        .bind(request.expires_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to insert announcement", e)
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit insert", e)
        })?;
        Ok(id)
    }

    async fn update_by_id(&self, id: i64, request: &AnnouncementReq) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query(
            "UPDATE sys_announcement \
             SET title = $2, \
                 content = $3, \
                 status = COALESCE($4, status), \
                 effective_at = COALESCE($5, effective_at), \
                 expires_at = COALESCE($6, expires_at), \
                 updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&request.title)
        .bind(&request.content)
        .bind(request.status)
        .bind(request.effective_at)
        .bind(request.expires_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update announcement", e)
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit update", e)
        })?;
        Ok(())
    }

    async fn delete_by_ids(&self, ids: &[i64]) -> AppResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let result = sqlx::query("DELETE FROM sys_announcement WHERE id = ANY($1)")
            .bind(ids)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete announcements", e)
            })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit delete", e)
        })?;
        Ok(result.rows_affected())
    }
}
