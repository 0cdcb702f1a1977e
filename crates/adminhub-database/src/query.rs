//! Dynamic WHERE / ORDER BY building over [`sqlx::QueryBuilder`].
//!
//! Mappers hand their column whitelist to these helpers; any filter or
//! sort field that does not resolve to a whitelisted column is rejected
//! as a validation error. Column names are pushed as SQL text only after
//! that check, and every value is bound, never inlined.

use sqlx::{Postgres, QueryBuilder};

use adminhub_core::error::AppError;
use adminhub_core::result::AppResult;
use adminhub_core::traits::QueryFilter;
use adminhub_core::types::filter::{FilterField, FilterOp, FilterValue};
use adminhub_core::types::sorting::{SortField, to_snake_case};

/// Append a WHERE clause built from the filter's conditions.
///
/// Appends nothing when the filter has no conditions.
pub fn push_where(
    qb: &mut QueryBuilder<'_, Postgres>,
    filter: &impl QueryFilter,
    columns: &[&str],
) -> AppResult<()> {
    let conditions = filter.conditions();
    if conditions.is_empty() {
        return Ok(());
    }
    qb.push(" WHERE ");
    for (i, condition) in conditions.iter().enumerate() {
        if i > 0 {
            qb.push(" AND ");
        }
        push_condition(qb, condition, columns)?;
    }
    Ok(())
}

/// Append an ORDER BY clause built from the sort fields.
///
/// Sort field names arrive in the caller's camelCase naming and are
/// converted to snake_case columns before the whitelist check. Appends
/// nothing when no sort fields are given.
pub fn push_order_by(
    qb: &mut QueryBuilder<'_, Postgres>,
    sort: &[SortField],
    columns: &[&str],
) -> AppResult<()> {
    if sort.is_empty() {
        return Ok(());
    }
    qb.push(" ORDER BY ");
    for (i, field) in sort.iter().enumerate() {
        if i > 0 {
            qb.push(", ");
        }
        let column = checked_column(&field.field, columns)?;
        qb.push(column);
        qb.push(" ");
        qb.push(field.direction.as_sql());
    }
    Ok(())
}

fn push_condition(
    qb: &mut QueryBuilder<'_, Postgres>,
    condition: &FilterField,
    columns: &[&str],
) -> AppResult<()> {
    let column = checked_column(&condition.field, columns)?;
    qb.push(column);

    match condition.op {
        FilterOp::IsNull => {
            qb.push(" IS NULL");
            return Ok(());
        }
        FilterOp::IsNotNull => {
            qb.push(" IS NOT NULL");
            return Ok(());
        }
        FilterOp::In => {
            qb.push(" = ANY(");
            match &condition.value {
                FilterValue::StringList(values) => qb.push_bind(values.clone()),
                FilterValue::IntegerList(values) => qb.push_bind(values.clone()),
                other => {
                    return Err(AppError::validation(format!(
                        "IN filter on '{}' requires a list value, got {other:?}",
                        condition.field
                    )));
                }
            };
            qb.push(")");
            return Ok(());
        }
        _ => {}
    }

    qb.push(comparison_sql(condition.op));
    match &condition.value {
        FilterValue::String(v) => qb.push_bind(v.clone()),
        FilterValue::Integer(v) => qb.push_bind(*v),
        FilterValue::Float(v) => qb.push_bind(*v),
        FilterValue::Boolean(v) => qb.push_bind(*v),
        FilterValue::StringList(_) | FilterValue::IntegerList(_) | FilterValue::Null => {
            return Err(AppError::validation(format!(
                "Filter on '{}' requires a scalar value",
                condition.field
            )));
        }
    };
    Ok(())
}

fn comparison_sql(op: FilterOp) -> &'static str {
    match op {
        FilterOp::Eq => " = ",
        FilterOp::Ne => " <> ",
        FilterOp::Gt => " > ",
        FilterOp::Gte => " >= ",
        FilterOp::Lt => " < ",
        FilterOp::Lte => " <= ",
        FilterOp::Like => " LIKE ",
        FilterOp::ILike => " ILIKE ",
        // Handled before reaching here.
        FilterOp::In | FilterOp::IsNull | FilterOp::IsNotNull => unreachable!(),
    }
}

/// Resolve a field name to a whitelisted snake_case column.
fn checked_column(field: &str, columns: &[&str]) -> AppResult<String> {
    let column = to_snake_case(field);
    if columns.contains(&column.as_str()) {
        Ok(column)
    } else {
        Err(AppError::validation(format!(
            "Unknown query column: '{field}'"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adminhub_core::error::ErrorKind;

    const COLUMNS: &[&str] = &["id", "title", "status", "created_at"];

    struct TestFilter(Vec<FilterField>);

    impl QueryFilter for TestFilter {
        fn conditions(&self) -> Vec<FilterField> {
            self.0.clone()
        }
    }

    #[test]
    fn test_empty_filter_appends_nothing() {
        let mut qb = QueryBuilder::new("SELECT * FROM t");
        push_where(&mut qb, &TestFilter(Vec::new()), COLUMNS).unwrap();
        assert_eq!(qb.sql(), "SELECT * FROM t");
    }

    #[test]
    fn test_where_clause_binds_values() {
        let mut qb = QueryBuilder::new("SELECT * FROM t");
        let filter = TestFilter(vec![
            FilterField::contains("title", "outage"),
            FilterField::eq("status", "published"),
        ]);
        push_where(&mut qb, &filter, COLUMNS).unwrap();
        assert_eq!(
            qb.sql(),
            "SELECT * FROM t WHERE title ILIKE $1 AND status = $2"
        );
    }

    #[test]
    fn test_in_filter_uses_any() {
        let mut qb = QueryBuilder::new("SELECT * FROM t");
        let filter = TestFilter(vec![FilterField::in_ints("id", vec![1, 2, 3])]);
        push_where(&mut qb, &filter, COLUMNS).unwrap();
        assert_eq!(qb.sql(), "SELECT * FROM t WHERE id = ANY($1)");
    }

    #[test]
    fn test_null_checks_bind_nothing() {
        let mut qb = QueryBuilder::new("SELECT * FROM t");
        let filter = TestFilter(vec![FilterField::new(
            "status",
            FilterOp::IsNull,
            FilterValue::Null,
        )]);
        push_where(&mut qb, &filter, COLUMNS).unwrap();
        assert_eq!(qb.sql(), "SELECT * FROM t WHERE status IS NULL");
    }

    #[test]
    fn test_unknown_column_rejected() {
        let mut qb = QueryBuilder::new("SELECT * FROM t");
        let filter = TestFilter(vec![FilterField::eq("title; DROP TABLE t", "x")]);
        let err = push_where(&mut qb, &filter, COLUMNS).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_order_by_converts_naming() {
        let mut qb = QueryBuilder::new("SELECT * FROM t");
        let sort = vec![SortField::desc("createdAt"), SortField::asc("id")];
        push_order_by(&mut qb, &sort, COLUMNS).unwrap();
        assert_eq!(qb.sql(), "SELECT * FROM t ORDER BY created_at DESC, id ASC");
    }

    #[test]
    fn test_order_by_unknown_column_rejected() {
        let mut qb = QueryBuilder::new("SELECT * FROM t");
        let sort = vec![SortField::asc("passwordHash")];
        assert!(push_order_by(&mut qb, &sort, COLUMNS).is_err());
    }
}
