//! System announcement domain: entity, status, requests, and views.

pub mod model;
pub mod status;
pub mod views;

pub use model::{Announcement, AnnouncementQuery, AnnouncementReq};
pub use status::AnnouncementStatus;
pub use views::{AnnouncementDetailResp, AnnouncementResp};
