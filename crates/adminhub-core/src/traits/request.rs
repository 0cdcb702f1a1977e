//! Write request trait for create/update payloads.

/// A write-side payload for create and update operations.
///
/// Update targets the row identified by [`WriteRequest::id`]; create
/// ignores it and lets the store generate the key.
pub trait WriteRequest: Send + Sync {
    /// The target row id carried by this request, if any.
    fn id(&self) -> Option<i64>;
}
