//! INSERT / REPLACE statement builder.

use crate::ast::{Expr, Insert, InsertKind, InsertSource, SchemaTable, Statement};
use crate::error::BuildError;
use crate::qb::expr::str;
use crate::qb::select::SelectQb;
use crate::qb::traits::StatementBuilder;

/// INSERT builder: target table and columns up front, rows from VALUES or a SELECT.
#[derive(Clone, Debug)]
pub struct InsertQb {
    insert: Insert,
    error: Option<BuildError>,
}

impl InsertQb {
    /// Create a new INSERT builder.
    pub fn new<I, S>(into: SchemaTable, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            insert: Insert {
                kind: InsertKind::Insert,
                into,
                columns: columns.into_iter().map(Into::into).collect(),
                source: None,
            },
            error: None,
        }
    }

    /// Create a REPLACE builder (`REPLACE INTO ...`).
    pub fn replace<I, S>(into: SchemaTable, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut qb = Self::new(into, columns);
        qb.insert.kind = InsertKind::Replace;
        qb
    }

    /// Set VALUES rows from literal strings, emitted verbatim.
    ///
    /// Replaces any previously set source. Row lengths are not checked.
    pub fn values<R, V, S>(self, rows: R) -> Self
    where
        R: IntoIterator<Item = V>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.error.is_some() {
            return self;
        }
        self.values_exprs(rows.into_iter().map(|row| row.into_iter().map(str)))
    }

    /// Set VALUES rows from arbitrary expressions.
    pub fn values_exprs<R, V>(mut self, rows: R) -> Self
    where
        R: IntoIterator<Item = V>,
        V: IntoIterator<Item = Expr>,
    {
        if self.error.is_some() {
            return self;
        }
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect();
        self.insert.source = Some(InsertSource::Values(rows));
        self
    }

    /// Use a SELECT as the row source (`INSERT ... SELECT`).
    ///
    /// An error recorded by `select` poisons this builder too.
    pub fn from_select(mut self, select: SelectQb) -> Self {
        if self.error.is_some() {
            return self;
        }
        match select.build() {
            Ok(sel) => self.insert.source = Some(InsertSource::Select(Box::new(sel))),
            Err(err) => self.error = Some(err),
        }
        self
    }

    /// Finish the builder.
    pub fn build(self) -> Result<Insert, BuildError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.insert),
        }
    }
}

impl StatementBuilder for InsertQb {
    fn statement(&self) -> Result<Statement, BuildError> {
        self.clone().build().map(Statement::Insert)
    }

    fn build_error(&self) -> Option<&BuildError> {
        self.error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Literal;
    use crate::qb::expr::{col, lt, null, num, schema_table, table};

    #[test]
    fn test_insert_values() {
        let qb = InsertQb::new(table("t"), ["a", "b"]).values([["1", "2"], ["3", "4"]]);
        assert_eq!(qb.to_sql().unwrap(), "INSERT INTO t (a, b) VALUES (1, 2), (3, 4)");
    }

    #[test]
    fn test_values_become_string_literals() {
        let ins = InsertQb::new(table("t"), ["a"]).values([["'x'"]]).build().unwrap();
        let Some(InsertSource::Values(rows)) = ins.source else {
            panic!("expected values");
        };
        assert_eq!(rows[0][0], Expr::Literal(Literal::Str("'x'".into())));
    }

    #[test]
    fn test_values_last_call_wins() {
        let qb = InsertQb::new(table("t"), ["a"]).values([["1"]]).values([["2"]]);
        assert_eq!(qb.to_sql().unwrap(), "INSERT INTO t (a) VALUES (2)");
    }

    #[test]
    fn test_values_exprs() {
        let qb = InsertQb::new(table("t"), ["a", "b"]).values_exprs([[num(1.5), null()]]);
        assert_eq!(qb.to_sql().unwrap(), "INSERT INTO t (a, b) VALUES (1.5, NULL)");
    }

    #[test]
    fn test_insert_select() {
        let sel = SelectQb::new("src", ["a", "b"]).and_where(lt(col("a"), num(10)));
        let qb = InsertQb::new(schema_table("archive.", "dst"), ["a", "b"]).from_select(sel);
        assert_eq!(
            qb.to_sql().unwrap(),
            "INSERT INTO archive.dst (a, b) SELECT a, b FROM src WHERE a < 10"
        );
    }

    #[test]
    fn test_insert_select_propagates_error() {
        let sel = SelectQb::new("src", ["a"]).having(lt(col("a"), num(10)));
        let qb = InsertQb::new(table("dst"), ["a"]).from_select(sel).values([["1"]]);
        assert_eq!(qb.build_error(), Some(&BuildError::HavingWithoutGroupBy));
        assert!(qb.insert.source.is_none());
    }

    #[test]
    fn test_replace() {
        let qb = InsertQb::replace(table("t"), ["a"]).values([["1"]]);
        assert_eq!(qb.to_sql().unwrap(), "REPLACE INTO t (a) VALUES (1)");
    }
}
