//! Filter types for dynamic query building.

use serde::{Deserialize, Serialize};

/// Filter comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOp {
    /// Exact equality.
    Eq,
    /// Not equal.
    Ne,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,
    /// SQL `LIKE` pattern match.
    Like,
    /// SQL `ILIKE` case-insensitive pattern match.
    ILike,
    /// SQL `IN` list membership.
    In,
    /// SQL `IS NULL` check.
    IsNull,
    /// SQL `IS NOT NULL` check.
    IsNotNull,
}

/// A dynamic filter value that can represent various SQL types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// A string value.
    String(String),
    /// An integer value.
    Integer(i64),
    /// A floating-point value.
    Float(f64),
    /// A boolean value.
    Boolean(bool),
    /// A list of string values (for `IN` operator).
    StringList(Vec<String>),
    /// A list of integer values (for `IN` operator).
    IntegerList(Vec<i64>),
    /// Null / no value (for `IS NULL`, `IS NOT NULL`).
    Null,
}

/// A single filter condition on a named field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterField {
    /// The column or field name to filter on.
    pub field: String,
    /// The comparison operator.
    pub op: FilterOp,
    /// The value to compare against.
    pub value: FilterValue,
}

impl FilterField {
    /// Create a new filter field.
    pub fn new(field: impl Into<String>, op: FilterOp, value: FilterValue) -> Self {
        Self {
            field: field.into(),
            op,
            value,
        }
    }

    /// Shorthand for a string equality filter.
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, FilterOp::Eq, FilterValue::String(value.into()))
    }

    /// Shorthand for an integer equality filter.
    pub fn eq_int(field: impl Into<String>, value: i64) -> Self {
        Self::new(field, FilterOp::Eq, FilterValue::Integer(value))
    }

    /// Shorthand for a case-insensitive contains filter.
    ///
    /// Wraps the value in `%` wildcards for an `ILIKE` match.
    pub fn contains(field: impl Into<String>, value: impl AsRef<str>) -> Self {
        Self::new(
            field,
            FilterOp::ILike,
            FilterValue::String(format!("%{}%", value.as_ref())),
        )
    }

    /// Shorthand for an integer list membership filter.
    pub fn in_ints(field: impl Into<String>, values: Vec<i64>) -> Self {
        Self::new(field, FilterOp::In, FilterValue::IntegerList(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_wraps_pattern() {
        let f = FilterField::contains("title", "maintenance");
        assert_eq!(f.op, FilterOp::ILike);
        assert_eq!(f.value, FilterValue::String("%maintenance%".to_string()));
    }

    #[test]
    fn test_eq_shorthands() {
        let f = FilterField::eq("status", "published");
        assert_eq!(f.field, "status");
        assert_eq!(f.value, FilterValue::String("published".to_string()));

        let f = FilterField::eq_int("created_by", 42);
        assert_eq!(f.value, FilterValue::Integer(42));
    }
}
