//! SELECT statement builder.

use crate::ast::{Direction, Expr, Join, JoinType, OrderingTerm, Select, Statement};
use crate::error::BuildError;
use crate::qb::expr::{all, eq};
use crate::qb::traits::StatementBuilder;

/// SELECT builder with a deferred first-error slot.
///
/// Once an error is recorded every further mutation is a no-op.
#[derive(Clone, Debug)]
pub struct SelectQb {
    select: Select,
    error: Option<BuildError>,
}

impl SelectQb {
    /// Create a new SELECT builder for `from` with the given result columns.
    pub fn new<I, S>(from: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            select: Select::new(from.into(), columns.into_iter().map(Into::into).collect()),
            error: None,
        }
    }

    // ==================== WHERE ====================

    /// AND `expr` onto the existing WHERE condition.
    pub fn and_where(mut self, expr: Expr) -> Self {
        if self.error.is_some() {
            return self;
        }
        self.select.where_ = all([self.select.where_.take(), Some(expr)]);
        self
    }

    // ==================== JOIN ====================

    /// Add a prepared join clause.
    pub fn join_with(mut self, join: Join) -> Self {
        if self.error.is_some() {
            return self;
        }
        self.select.joins.push(join);
        self
    }

    /// Add `JOIN table ON expr`.
    pub fn join(self, table: impl Into<String>, on: Expr) -> Self {
        self.join_with(Join::new(table, on))
    }

    /// Add `JOIN table ON left = right`.
    pub fn join_eq(self, table: impl Into<String>, left: Expr, right: Expr) -> Self {
        self.join(table, eq(left, right))
    }

    /// Add `LEFT JOIN table ON expr`.
    pub fn left_join(self, table: impl Into<String>, on: Expr) -> Self {
        self.join_with(Join::new(table, on).join_type(JoinType::Left))
    }

    /// Add `RIGHT JOIN table ON expr`.
    pub fn right_join(self, table: impl Into<String>, on: Expr) -> Self {
        self.join_with(Join::new(table, on).join_type(JoinType::Right))
    }

    /// Add `CROSS JOIN table ON expr`.
    pub fn cross_join(self, table: impl Into<String>, on: Expr) -> Self {
        self.join_with(Join::new(table, on).join_type(JoinType::Cross))
    }

    // ==================== Ordering & Grouping ====================

    /// Add an ORDER BY term.
    pub fn order_by(mut self, by: Expr, direction: Direction) -> Self {
        if self.error.is_some() {
            return self;
        }
        self.select.order_by.push(OrderingTerm { by, direction });
        self
    }

    /// Add ORDER BY expr ASC.
    pub fn order_by_asc(self, by: Expr) -> Self {
        self.order_by(by, Direction::Asc)
    }

    /// Add ORDER BY expr DESC.
    pub fn order_by_desc(self, by: Expr) -> Self {
        self.order_by(by, Direction::Desc)
    }

    /// Append GROUP BY expressions.
    pub fn group_by(mut self, exprs: impl IntoIterator<Item = Expr>) -> Self {
        if self.error.is_some() {
            return self;
        }
        self.select.group_by.extend(exprs);
        self
    }

    /// AND `expr` onto the HAVING condition.
    ///
    /// Fails the builder if no GROUP BY has been added yet.
    pub fn having(mut self, expr: Expr) -> Self {
        if self.error.is_some() {
            return self;
        }
        if self.select.group_by.is_empty() {
            self.error = Some(BuildError::HavingWithoutGroupBy);
            return self;
        }
        self.select.having = all([self.select.having.take(), Some(expr)]);
        self
    }

    // ==================== Pagination ====================

    /// Set LIMIT (0 clears it).
    pub fn limit(mut self, n: u64) -> Self {
        if self.error.is_some() {
            return self;
        }
        self.select.limit = n;
        self
    }

    /// Set OFFSET (0 clears it).
    pub fn offset(mut self, n: u64) -> Self {
        if self.error.is_some() {
            return self;
        }
        self.select.offset = n;
        self
    }

    // ==================== Build ====================

    /// Finish the builder, returning the SELECT or the first recorded error.
    pub fn build(self) -> Result<Select, BuildError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.select),
        }
    }
}

impl StatementBuilder for SelectQb {
    fn statement(&self) -> Result<Statement, BuildError> {
        self.clone().build().map(Statement::Select)
    }

    fn build_error(&self) -> Option<&BuildError> {
        self.error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qb::expr::{col, gt, lt, num, table_col};

    fn sql(qb: &SelectQb) -> String {
        qb.to_sql().unwrap()
    }

    #[test]
    fn test_simple_select() {
        let qb = SelectQb::new("users", ["*"]);
        assert_eq!(sql(&qb), "SELECT * FROM users");
    }

    #[test]
    fn test_select_with_columns() {
        let qb = SelectQb::new("users", ["id", "name", "email"]);
        assert_eq!(sql(&qb), "SELECT id, name, email FROM users");
    }

    #[test]
    fn test_select_with_where() {
        let qb = SelectQb::new("t", ["a"]).and_where(gt(col("x"), num(3)));
        assert_eq!(sql(&qb), "SELECT a FROM t WHERE x > 3");
    }

    #[test]
    fn test_where_is_and_folded() {
        let qb = SelectQb::new("t", ["a"])
            .and_where(gt(col("x"), num(3)))
            .and_where(lt(col("y"), num(4)));
        assert_eq!(sql(&qb), "SELECT a FROM t WHERE x > 3 AND y < 4");
    }

    #[test]
    fn test_select_with_join() {
        let qb =
            SelectQb::new("t1", ["x"]).join_eq("t2", table_col("t1", "y"), table_col("t2", "z"));
        assert_eq!(sql(&qb), "SELECT x FROM t1 JOIN t2 ON t1.y = t2.z");
    }

    #[test]
    fn test_left_join() {
        let qb = SelectQb::new("u", ["*"])
            .left_join("o", eq(table_col("u", "id"), table_col("o", "uid")));
        assert_eq!(sql(&qb), "SELECT * FROM u LEFT JOIN o ON u.id = o.uid");
    }

    #[test]
    fn test_having_requires_group_by() {
        let qb = SelectQb::new("t", ["x"])
            .having(lt(col("c"), num(0)))
            .group_by([col("a")]);
        assert_eq!(qb.build_error(), Some(&BuildError::HavingWithoutGroupBy));
        assert_eq!(qb.statement(), Err(BuildError::HavingWithoutGroupBy));
    }

    #[test]
    fn test_poisoned_builder_ignores_mutations() {
        let qb = SelectQb::new("t", ["x"])
            .having(lt(col("c"), num(0)))
            .limit(5)
            .and_where(gt(col("x"), num(1)));
        assert_eq!(qb.select.limit, 0);
        assert!(qb.select.where_.is_none());
    }

    #[test]
    fn test_join_eq_on_poisoned_builder() {
        let qb = SelectQb::new("t1", ["x"])
            .having(lt(col("c"), num(0)))
            .join_eq("t2", table_col("t1", "y"), table_col("t2", "z"));
        assert!(qb.select.joins.is_empty());
        assert_eq!(qb.build_error(), Some(&BuildError::HavingWithoutGroupBy));
    }

    #[test]
    fn test_group_by_having() {
        let qb = SelectQb::new("t", ["x"])
            .group_by([col("a")])
            .having(lt(col("c"), num(0)));
        assert_eq!(sql(&qb), "SELECT x FROM t GROUP BY a HAVING c < 0");
    }

    #[test]
    fn test_limit_last_call_wins() {
        let qb = SelectQb::new("t", ["*"]).limit(10).offset(20).limit(5);
        assert_eq!(sql(&qb), "SELECT * FROM t LIMIT 5 OFFSET 20");
    }

    #[test]
    fn test_order_by() {
        let qb = SelectQb::new("person", ["full_name"]).order_by_desc(col("birth"));
        assert_eq!(sql(&qb), "SELECT full_name FROM person ORDER BY birth DESC");
    }
}
