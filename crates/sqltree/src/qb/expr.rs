//! Expression constructors for WHERE/HAVING/ON/SET operands.
//!
//! These functions never fail and never validate their input: an empty column
//! name is reported by the translator, not here.
//!
//! [`all`] and [`any`] fold a sequence of optional expressions into a single
//! left-associative AND/OR chain, which is how builders accumulate repeated
//! `and_where`/`having` calls.

use crate::ast::{BinaryOp, Column, Expr, Literal, SchemaTable, UnaryOp};

// ==================== Literals ====================

/// String literal, emitted verbatim.
pub fn str(v: impl Into<String>) -> Expr {
    Expr::Literal(Literal::Str(v.into()))
}

/// Numeric literal.
pub fn num(v: impl Into<f64>) -> Expr {
    Expr::Literal(Literal::Num(v.into()))
}

/// Boolean literal: `TRUE` / `FALSE`.
pub fn boolean(v: bool) -> Expr {
    Expr::Literal(Literal::Boolean(v))
}

/// The `NULL` literal.
pub fn null() -> Expr {
    Expr::Literal(Literal::Null)
}

// ==================== Columns & tables ====================

/// Column reference with only the column set.
pub fn col(column: impl Into<String>) -> Expr {
    Expr::Column(Column {
        schema: None,
        table: None,
        column: column.into(),
    })
}

/// Column reference qualified by table.
pub fn table_col(table: impl Into<String>, column: impl Into<String>) -> Expr {
    Expr::Column(Column {
        schema: None,
        table: Some(table.into()),
        column: column.into(),
    })
}

/// Column reference qualified by schema and table.
pub fn schema_table_col(
    schema: impl Into<String>,
    table: impl Into<String>,
    column: impl Into<String>,
) -> Expr {
    Expr::Column(Column {
        schema: Some(schema.into()),
        table: Some(table.into()),
        column: column.into(),
    })
}

/// Unqualified table for INSERT/UPDATE/DELETE.
pub fn table(table: impl Into<String>) -> SchemaTable {
    SchemaTable {
        schema: None,
        table: table.into(),
    }
}

/// Schema-qualified table.
///
/// The schema is emitted directly before the table name, so callers include
/// their own separator (e.g. `"public."`).
pub fn schema_table(schema: impl Into<String>, table: impl Into<String>) -> SchemaTable {
    SchemaTable {
        schema: Some(schema.into()),
        table: table.into(),
    }
}

// ==================== Operators ====================

/// `NOT expr`
pub fn not(expr: Expr) -> Expr {
    Expr::unary(UnaryOp::Not, expr)
}

/// `+expr`
pub fn pos(expr: Expr) -> Expr {
    Expr::unary(UnaryOp::Pos, expr)
}

/// `-expr`
pub fn neg(expr: Expr) -> Expr {
    Expr::unary(UnaryOp::Neg, expr)
}

/// `left = right`
pub fn eq(left: Expr, right: Expr) -> Expr {
    Expr::binary(BinaryOp::Eq, left, right)
}

/// `left != right`
pub fn neq(left: Expr, right: Expr) -> Expr {
    Expr::binary(BinaryOp::Ne, left, right)
}

/// `left > right`
pub fn gt(left: Expr, right: Expr) -> Expr {
    Expr::binary(BinaryOp::Gt, left, right)
}

/// `left >= right`
pub fn gte(left: Expr, right: Expr) -> Expr {
    Expr::binary(BinaryOp::Gte, left, right)
}

/// `left < right`
pub fn lt(left: Expr, right: Expr) -> Expr {
    Expr::binary(BinaryOp::Lt, left, right)
}

/// `left <= right`
pub fn lte(left: Expr, right: Expr) -> Expr {
    Expr::binary(BinaryOp::Lte, left, right)
}

/// `left AND right`
pub fn and(left: Expr, right: Expr) -> Expr {
    Expr::binary(BinaryOp::And, left, right)
}

/// `left OR right`
pub fn or(left: Expr, right: Expr) -> Expr {
    Expr::binary(BinaryOp::Or, left, right)
}

/// `left IS right`
pub fn is(left: Expr, right: Expr) -> Expr {
    Expr::binary(BinaryOp::Is, left, right)
}

/// `left IS NOT right`
pub fn is_not(left: Expr, right: Expr) -> Expr {
    Expr::binary(BinaryOp::IsNot, left, right)
}

// ==================== Folds ====================

fn fold<I>(exprs: I, combine: fn(Expr, Expr) -> Expr) -> Option<Expr>
where
    I: IntoIterator,
    I::Item: Into<Option<Expr>>,
{
    exprs
        .into_iter()
        .filter_map(Into::<Option<Expr>>::into)
        .reduce(combine)
}

/// Fold expressions with AND, left to right, skipping `None` entries.
///
/// Returns `None` when no expression is present and the lone expression
/// unchanged when only one is.
///
/// # Example
/// ```
/// use sqltree::qb::{all, col, num, gt, lt};
///
/// let cond = all([Some(gt(col("a"), num(1))), None, Some(lt(col("b"), num(2)))]);
/// assert!(cond.is_some());
/// ```
pub fn all<I>(exprs: I) -> Option<Expr>
where
    I: IntoIterator,
    I::Item: Into<Option<Expr>>,
{
    fold(exprs, and)
}

/// Fold expressions with OR, left to right, skipping `None` entries.
pub fn any<I>(exprs: I) -> Option<Expr>
where
    I: IntoIterator,
    I::Item: Into<Option<Expr>>,
{
    fold(exprs, or)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::BinaryExpr;

    #[test]
    fn test_col_variants() {
        assert_eq!(
            schema_table_col("s", "t", "c"),
            Expr::Column(Column {
                schema: Some("s".into()),
                table: Some("t".into()),
                column: "c".into(),
            })
        );
        let Expr::Column(c) = table_col("t", "c") else {
            panic!("expected column");
        };
        assert_eq!(c.schema, None);
        assert_eq!(c.table.as_deref(), Some("t"));
    }

    #[test]
    fn test_empty_column_is_accepted() {
        // Validation happens at translation time.
        let Expr::Column(c) = col("") else {
            panic!("expected column");
        };
        assert!(c.column.is_empty());
    }

    #[test]
    fn test_all_empty() {
        assert_eq!(all(Vec::<Expr>::new()), None);
        assert_eq!(all([None, None]), None);
    }

    #[test]
    fn test_all_single_is_root() {
        let e = eq(col("a"), num(1));
        assert_eq!(all([None, Some(e.clone()), None]), Some(e));
    }

    #[test]
    fn test_all_left_associative() {
        let (a, b, c) = (col("a"), col("b"), col("c"));
        let folded = all([a.clone(), b.clone(), c.clone()]).unwrap();
        assert_eq!(folded, and(and(a, b), c));
    }

    #[test]
    fn test_any_uses_or() {
        let folded = any([Some(col("a")), None, Some(col("b"))]).unwrap();
        let Expr::Binary(BinaryExpr { op, .. }) = folded else {
            panic!("expected binary");
        };
        assert_eq!(op, BinaryOp::Or);
    }

    #[test]
    fn test_num_from_integers() {
        assert_eq!(num(3), Expr::Literal(Literal::Num(3.0)));
        assert_eq!(num(0.5), Expr::Literal(Literal::Num(0.5)));
    }
}
