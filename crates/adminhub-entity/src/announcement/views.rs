//! Read-side view projections for announcements.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use adminhub_core::traits::export::{CellValue, ExportRow};
use adminhub_core::traits::view::{AuditDetailView, AuditView};

use super::model::Announcement;
use super::status::AnnouncementStatus;

/// List view of an announcement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnouncementResp {
    /// Primary key.
    pub id: i64,
    /// Announcement title.
    pub title: String,
    /// Publication status.
    pub status: AnnouncementStatus,
    /// Visibility start.
    pub effective_at: Option<DateTime<Utc>>,
    /// Visibility end.
    pub expires_at: Option<DateTime<Utc>>,
    /// The user who created this record.
    pub created_by: Option<i64>,
    /// Display name of the creating user, resolved after the query.
    pub created_by_name: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl From<Announcement> for AnnouncementResp {
    fn from(entity: Announcement) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            status: entity.status,
            effective_at: entity.effective_at,
            expires_at: entity.expires_at,
            created_by: entity.created_by,
            created_by_name: None,
            created_at: entity.created_at,
        }
    }
}

impl AuditView for AnnouncementResp {
    fn created_by(&self) -> Option<i64> {
        self.created_by
    }

    fn created_by_name(&self) -> Option<&str> {
        self.created_by_name.as_deref()
    }

    fn set_created_by_name(&mut self, name: String) {
        self.created_by_name = Some(name);
    }
}

/// Detail view of an announcement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnouncementDetailResp {
    /// Primary key.
    pub id: i64,
    /// Announcement title.
    pub title: String,
    /// Announcement body.
    pub content: String,
    /// Publication status.
    pub status: AnnouncementStatus,
    /// Visibility start.
    pub effective_at: Option<DateTime<Utc>>,
    /// Visibility end.
    pub expires_at: Option<DateTime<Utc>>,
    /// The user who created this record.
    pub created_by: Option<i64>,
    /// Display name of the creating user, resolved after the query.
    pub created_by_name: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// The user who last updated this record.
    pub updated_by: Option<i64>,
    /// Display name of the updating user, resolved after the query.
    pub updated_by_name: Option<String>,
    /// When the record was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Announcement> for AnnouncementDetailResp {
    fn from(entity: Announcement) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            content: entity.content,
            status: entity.status,
            effective_at: entity.effective_at,
            expires_at: entity.expires_at,
            created_by: entity.created_by,
            created_by_name: None,
            created_at: entity.created_at,
            updated_by: entity.updated_by,
            updated_by_name: None,
            updated_at: entity.updated_at,
        }
    }
}

impl AuditView for AnnouncementDetailResp {
    fn created_by(&self) -> Option<i64> {
        self.created_by
    }

    fn created_by_name(&self) -> Option<&str> {
        self.created_by_name.as_deref()
    }

    fn set_created_by_name(&mut self, name: String) {
        self.created_by_name = Some(name);
    }
}

impl AuditDetailView for AnnouncementDetailResp {
    fn updated_by(&self) -> Option<i64> {
        self.updated_by
    }

    fn updated_by_name(&self) -> Option<&str> {
        self.updated_by_name.as_deref()
    }

    fn set_updated_by_name(&mut self, name: String) {
        self.updated_by_name = Some(name);
    }
}

impl ExportRow for AnnouncementDetailResp {
    fn columns() -> &'static [&'static str] {
        &[
            "ID",
            "Title",
            "Content",
            "Status",
            "Effective At",
            "Expires At",
            "Created By",
            "Created At",
            "Updated By",
            "Updated At",
        ]
    }

    fn cells(&self) -> Vec<CellValue> {
        vec![
            CellValue::Integer(self.id),
            CellValue::Text(self.title.clone()),
            CellValue::Text(self.content.clone()),
            CellValue::Text(self.status.to_string()),
            CellValue::opt_timestamp(self.effective_at),
            CellValue::opt_timestamp(self.expires_at),
            CellValue::opt_text(self.created_by_name.clone()),
            CellValue::Timestamp(self.created_at),
            CellValue::opt_text(self.updated_by_name.clone()),
            CellValue::opt_timestamp(self.updated_at),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Announcement {
        Announcement {
            id: 7,
            title: "Scheduled maintenance".to_string(),
            content: "Down for an hour".to_string(),
            status: AnnouncementStatus::Published,
            effective_at: None,
            expires_at: None,
            created_by: Some(1),
            created_at: Utc::now(),
            updated_by: Some(2),
            updated_at: Some(Utc::now()),
        }
    }

    #[test]
    fn test_list_view_projection() {
        let view = AnnouncementResp::from(sample());
        assert_eq!(view.id, 7);
        assert_eq!(view.title, "Scheduled maintenance");
        assert_eq!(view.created_by, Some(1));
        assert!(view.created_by_name.is_none());
    }

    #[test]
    fn test_detail_view_projection() {
        let view = AnnouncementDetailResp::from(sample());
        assert_eq!(view.content, "Down for an hour");
        assert_eq!(view.updated_by, Some(2));
        assert!(view.updated_by_name.is_none());
    }

    #[test]
    fn test_export_cells_match_columns() {
        let view = AnnouncementDetailResp::from(sample());
        assert_eq!(
            view.cells().len(),
            AnnouncementDetailResp::columns().len()
        );
    }
}
