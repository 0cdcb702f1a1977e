//! Announcement service wiring.

use std::sync::Arc;

use adminhub_core::config::export::ExportConfig;
use adminhub_database::DatabasePool;
use adminhub_database::mappers::{AnnouncementMapper, PgUserDirectory};
use adminhub_entity::announcement::{AnnouncementDetailResp, AnnouncementResp};

use crate::crud::CrudService;

/// CRUD service for system announcements.
pub type AnnouncementService =
    CrudService<AnnouncementMapper, AnnouncementResp, AnnouncementDetailResp>;

/// Build the announcement service over the shared connection pool.
pub fn announcement_service(db: &DatabasePool, export: ExportConfig) -> AnnouncementService {
    let pool = db.pool().clone();
    CrudService::new(
        Arc::new(AnnouncementMapper::new(pool.clone())),
        Arc::new(PgUserDirectory::new(pool)),
        "Announcement",
        export,
    )
}
