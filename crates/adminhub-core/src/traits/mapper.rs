//! Generic entity mapper trait for database access.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::pagination::{PageRequest, PageResponse};
use crate::types::sorting::SortField;

use super::query::QueryFilter;
use super::request::WriteRequest;

/// Persistence mapper for a single entity table.
///
/// This trait is defined with associated types so that each entity gets a
/// strongly typed mapper: the entity row, the query filter translated into
/// predicates, and the write payload applied on insert/update. Concrete
/// mappers live in `adminhub-database`; the generic CRUD service in
/// `adminhub-service` is written purely against this trait.
///
/// Every write method runs inside its own transaction. An error return
/// means nothing was committed.
#[async_trait]
pub trait EntityMapper: Send + Sync + 'static {
    /// The persisted entity row.
    type Entity: Send + Sync + 'static;
    /// The query filter type for list/page predicates.
    type Filter: QueryFilter + Send + Sync;
    /// The write payload for insert/update.
    type Write: WriteRequest;

    /// Select a single entity by primary key.
    async fn select_by_id(&self, id: i64) -> AppResult<Option<Self::Entity>>;

    /// Select all entities matching the filter, in the given sort order.
    ///
    /// Returns an empty `Vec` when nothing matches.
    async fn select_list(
        &self,
        filter: &Self::Filter,
        sort: &[SortField],
    ) -> AppResult<Vec<Self::Entity>>;

    /// Select one page of entities matching the filter.
    async fn select_page(
        &self,
        filter: &Self::Filter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Self::Entity>>;

    /// Insert a new entity and return the generated primary key.
    async fn insert(&self, request: &Self::Write) -> AppResult<i64>;

    /// Update the entity identified by `id` from the write payload.
    ///
    /// Optional payload fields left unset retain their stored values.
    async fn update_by_id(&self, id: i64, request: &Self::Write) -> AppResult<()>;

    /// Delete all entities whose primary key appears in `ids`.
    ///
    /// Missing ids are skipped silently; returns the number of rows
    /// actually removed.
    async fn delete_by_ids(&self, ids: &[i64]) -> AppResult<u64>;
}
