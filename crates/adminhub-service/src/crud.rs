//! Generic CRUD service over an entity mapper.
//!
//! One `CrudService` instantiation covers the whole admin read/write
//! surface of an entity: paginated listing, sorted listing, detail
//! retrieval, create, update, bulk delete, and XLSX export. The entity,
//! filter, and write types come from the mapper's associated types; the
//! list and detail views are explicit type parameters mapped from the
//! entity via `From`.

use std::fmt;
use std::io::Write;
use std::marker::PhantomData;
use std::sync::Arc;

use tracing::debug;

use adminhub_core::config::export::ExportConfig;
use adminhub_core::error::AppError;
use adminhub_core::result::AppResult;
use adminhub_core::traits::export::ExportRow;
use adminhub_core::traits::request::WriteRequest;
use adminhub_core::traits::view::{AuditDetailView, AuditView};
use adminhub_core::traits::{EntityMapper, Service, UserDirectory};
use adminhub_core::types::pagination::{PageRequest, PageResponse};
use adminhub_core::types::sorting::SortQuery;

use crate::export;

/// Generic CRUD service parameterized over a mapper and two view types.
///
/// `L` is the list projection, `D` the detail projection. Both carry
/// audit display-name slots that are resolved through the injected
/// [`UserDirectory`] after each read.
pub struct CrudService<M, L, D>
where
    M: EntityMapper,
{
    mapper: Arc<M>,
    directory: Arc<dyn UserDirectory>,
    entity_name: &'static str,
    export: ExportConfig,
    _views: PhantomData<fn() -> (L, D)>,
}

impl<M, L, D> CrudService<M, L, D>
where
    M: EntityMapper,
    L: AuditView + From<M::Entity> + Send + Sync + 'static,
    D: AuditDetailView + From<M::Entity> + Send + Sync + 'static,
{
    /// Create a new CRUD service.
    ///
    /// `entity_name` is used in error messages ("Announcement 7 not
    /// found") and as the export sheet fallback.
    pub fn new(
        mapper: Arc<M>,
        directory: Arc<dyn UserDirectory>,
        entity_name: &'static str,
        export: ExportConfig,
    ) -> Self {
        Self {
            mapper,
            directory,
            entity_name,
            export,
            _views: PhantomData,
        }
    }

    /// Fetch one page of list views matching the filter.
    pub async fn page(
        &self,
        filter: &M::Filter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<L>> {
        let entities = self.mapper.select_page(filter, page).await?;
        let mut result = entities.map(L::from);
        for view in &mut result.items {
            self.fill(view).await;
        }
        Ok(result)
    }

    /// Fetch all list views matching the filter, in the given sort order.
    pub async fn list(&self, filter: &M::Filter, sort: &SortQuery) -> AppResult<Vec<L>> {
        let entities = self.mapper.select_list(filter, &sort.sort).await?;
        let mut views: Vec<L> = entities.into_iter().map(L::from).collect();
        for view in &mut views {
            self.fill(view).await;
        }
        Ok(views)
    }

    /// Fetch the detail view for a single record.
    pub async fn get(&self, id: i64) -> AppResult<D> {
        let entity = self.mapper.select_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(format!("{} {id} not found", self.entity_name))
        })?;
        let mut view = D::from(entity);
        self.fill_detail(&mut view).await;
        Ok(view)
    }

    /// Create a new record and return its generated id.
    ///
    /// An absent request is not an error; it returns 0 without touching
    /// the store.
    pub async fn create(&self, request: Option<M::Write>) -> AppResult<i64> {
        let Some(request) = request else {
            return Ok(0);
        };
        self.mapper.insert(&request).await
    }

    /// Update the record identified by the request's own id.
    ///
    /// Optional request fields left unset keep their stored values.
    pub async fn update(&self, request: M::Write) -> AppResult<()> {
        let id = request.id().ok_or_else(|| {
            AppError::validation(format!("{} update requires an id", self.entity_name))
        })?;
        self.mapper.update_by_id(id, &request).await
    }

    /// Delete the records with the given ids.
    ///
    /// Ids with no matching record are skipped without error; returns the
    /// number of rows removed.
    pub async fn delete(&self, ids: &[i64]) -> AppResult<u64> {
        self.mapper.delete_by_ids(ids).await
    }

    /// Export all detail views matching the filter as an XLSX workbook
    /// written to `sink`.
    pub async fn export(
        &self,
        filter: &M::Filter,
        sort: &SortQuery,
        sink: &mut dyn Write,
    ) -> AppResult<()>
    where
        D: ExportRow,
    {
        let entities = self.mapper.select_list(filter, &sort.sort).await?;
        if entities.len() as u64 > self.export.max_rows {
            return Err(AppError::validation(format!(
                "Export of {} rows exceeds the limit of {}",
                entities.len(),
                self.export.max_rows
            )));
        }
        let mut views: Vec<D> = entities.into_iter().map(D::from).collect();
        for view in &mut views {
            self.fill_detail(view).await;
        }
        export::write_xlsx(&views, &self.export.sheet_name, sink)
    }

    /// Resolve the creating user's display name on a list view.
    ///
    /// Lookup failures are swallowed; the field stays unset.
    async fn fill(&self, view: &mut impl AuditView) {
        if view.created_by_name().is_some() {
            return;
        }
        let Some(user_id) = view.created_by() else {
            return;
        };
        match self.directory.display_name(user_id).await {
            Ok(Some(name)) => view.set_created_by_name(name),
            Ok(None) => {}
            Err(e) => debug!(user_id, error = %e, "Audit display-name lookup failed"),
        }
    }

    /// Resolve both audit display names on a detail view.
    async fn fill_detail(&self, view: &mut impl AuditDetailView) {
        self.fill(view).await;
        if view.updated_by_name().is_some() {
            return;
        }
        let Some(user_id) = view.updated_by() else {
            return;
        };
        match self.directory.display_name(user_id).await {
            Ok(Some(name)) => view.set_updated_by_name(name),
            Ok(None) => {}
            Err(e) => debug!(user_id, error = %e, "Audit display-name lookup failed"),
        }
    }
}

impl<M, L, D> Clone for CrudService<M, L, D>
where
    M: EntityMapper,
{
    fn clone(&self) -> Self {
        Self {
            mapper: Arc::clone(&self.mapper),
            directory: Arc::clone(&self.directory),
            entity_name: self.entity_name,
            export: self.export.clone(),
            _views: PhantomData,
        }
    }
}

impl<M, L, D> fmt::Debug for CrudService<M, L, D>
where
    M: EntityMapper,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrudService")
            .field("entity_name", &self.entity_name)
            .finish_non_exhaustive()
    }
}

impl<M, L, D> Service for CrudService<M, L, D>
where
    M: EntityMapper,
    L: Send + Sync + 'static,
    D: Send + Sync + 'static,
{
}
