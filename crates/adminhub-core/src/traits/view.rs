//! Audit view traits for read-side projections.
//!
//! List and detail views expose their audit user ids and display-name
//! slots through these traits so the CRUD service can resolve display
//! names generically.

/// A read-side view carrying creation audit fields.
pub trait AuditView {
    /// The id of the user who created the record, if recorded.
    fn created_by(&self) -> Option<i64>;

    /// The resolved display name of the creating user, if already set.
    fn created_by_name(&self) -> Option<&str>;

    /// Set the resolved display name of the creating user.
    fn set_created_by_name(&mut self, name: String);
}

/// A detail view additionally carrying last-update audit fields.
pub trait AuditDetailView: AuditView {
    /// The id of the user who last updated the record, if recorded.
    fn updated_by(&self) -> Option<i64>;

    /// The resolved display name of the updating user, if already set.
    fn updated_by_name(&self) -> Option<&str>;

    /// Set the resolved display name of the updating user.
    fn set_updated_by_name(&mut self, name: String);
}
