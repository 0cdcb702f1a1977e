//! Announcement entity model, write request, and query object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use adminhub_core::traits::{QueryFilter, WriteRequest};
use adminhub_core::types::filter::FilterField;

use super::status::AnnouncementStatus;

/// A system announcement shown in the admin panel (`sys_announcement`).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Announcement {
    /// Primary key.
    pub id: i64,
    /// Announcement title.
    pub title: String,
    /// Announcement body (rich text).
    pub content: String,
    /// Publication status.
    pub status: AnnouncementStatus,
    /// When the announcement becomes visible.
    pub effective_at: Option<DateTime<Utc>>,
    /// When the announcement stops being visible.
    pub expires_at: Option<DateTime<Utc>>,
    /// The user who created this record.
    pub created_by: Option<i64>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// The user who last updated this record.
    pub updated_by: Option<i64>,
    /// When the record was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Write payload for creating or updating an announcement.
///
/// On update, `id` identifies the target row and the optional fields left
/// unset keep their stored values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnouncementReq {
    /// Target row id; required for update, ignored on create.
    pub id: Option<i64>,
    /// Announcement title.
    pub title: String,
    /// Announcement body.
    pub content: String,
    /// Publication status; update keeps the stored value when unset.
    pub status: Option<AnnouncementStatus>,
    /// Visibility start; update keeps the stored value when unset.
    pub effective_at: Option<DateTime<Utc>>,
    /// Visibility end; update keeps the stored value when unset.
    pub expires_at: Option<DateTime<Utc>>,
}

impl WriteRequest for AnnouncementReq {
    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// Filter criteria for announcement list and page queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnnouncementQuery {
    /// Case-insensitive substring match on the title.
    pub title: Option<String>,
    /// Exact status match.
    pub status: Option<AnnouncementStatus>,
}

impl QueryFilter for AnnouncementQuery {
    fn conditions(&self) -> Vec<FilterField> {
        let mut conditions = Vec::new();
        if let Some(title) = &self.title {
            conditions.push(FilterField::contains("title", title));
        }
        if let Some(status) = self.status {
            conditions.push(FilterField::eq("status", status.as_str()));
        }
        conditions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adminhub_core::types::filter::{FilterOp, FilterValue};

    #[test]
    fn test_empty_query_has_no_conditions() {
        assert!(AnnouncementQuery::default().conditions().is_empty());
    }

    #[test]
    fn test_query_conditions() {
        let query = AnnouncementQuery {
            title: Some("outage".to_string()),
            status: Some(AnnouncementStatus::Published),
        };
        let conditions = query.conditions();
        assert_eq!(conditions.len(), 2);
        assert_eq!(conditions[0].field, "title");
        assert_eq!(conditions[0].op, FilterOp::ILike);
        assert_eq!(
            conditions[1].value,
            FilterValue::String("published".to_string())
        );
    }
}
