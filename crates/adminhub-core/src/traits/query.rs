//! Query filter trait for dynamic predicate building.

use crate::types::filter::FilterField;

/// Translates a query object into filter predicates.
///
/// Each query type lists its conditions explicitly, so the mapping from
/// query field to column predicate is checked at compile time. Unset
/// optional fields simply contribute no condition.
pub trait QueryFilter {
    /// Return the predicate list for this query.
    ///
    /// An empty list selects every row.
    fn conditions(&self) -> Vec<FilterField>;
}

/// The filter that matches everything.
impl QueryFilter for () {
    fn conditions(&self) -> Vec<FilterField> {
        Vec::new()
    }
}
