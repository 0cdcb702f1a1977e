//! Announcement status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Publication status of an announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementStatus {
    /// Not yet visible to users.
    Draft,
    /// Currently visible to users.
    Published,
    /// Past its expiry time.
    Expired,
}

impl AnnouncementStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for AnnouncementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AnnouncementStatus {
    type Err = adminhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "expired" => Ok(Self::Expired),
            _ => Err(adminhub_core::AppError::validation(format!(
                "Invalid announcement status: '{s}'. Expected one of: draft, published, expired"
            ))),
        }
    }
}
