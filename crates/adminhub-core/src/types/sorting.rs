//! Sorting types for list endpoints.
//!
//! Callers supply sort fields in the camelCase naming used by the JSON
//! surface; [`SortField::column_name`] converts them to the snake_case
//! column naming used by the store.

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Return the SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// A sort specification consisting of a field name and direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortField {
    /// Field name to sort by, in the caller's camelCase naming.
    pub field: String,
    /// Sort direction.
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortField {
    /// Create a new sort field.
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Create an ascending sort on the given field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    /// Create a descending sort on the given field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// Return the snake_case column name for this sort field.
    pub fn column_name(&self) -> String {
        to_snake_case(&self.field)
    }
}

/// Sort criteria for unpaginated list queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SortQuery {
    /// Sort fields in priority order.
    #[serde(default)]
    pub sort: Vec<SortField>,
}

impl SortQuery {
    /// Create a sort query from a list of fields.
    pub fn new(sort: Vec<SortField>) -> Self {
        Self { sort }
    }

    /// Whether no sort order was requested.
    pub fn is_empty(&self) -> bool {
        self.sort.is_empty()
    }
}

/// Convert a camelCase field name to its snake_case column name.
pub fn to_snake_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 4);
    for (i, c) in field.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("createTime"), "create_time");
        assert_eq!(to_snake_case("createdByName"), "created_by_name");
        assert_eq!(to_snake_case("title"), "title");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_column_name() {
        assert_eq!(SortField::desc("createdAt").column_name(), "created_at");
        assert_eq!(SortField::asc("id").column_name(), "id");
    }

    #[test]
    fn test_direction_sql() {
        assert_eq!(SortDirection::Asc.as_sql(), "ASC");
        assert_eq!(SortDirection::Desc.as_sql(), "DESC");
    }
}
