//! UPDATE statement builder.

use crate::ast::{Assignment, Expr, SchemaTable, Statement, Update};
use crate::error::BuildError;
use crate::qb::expr::all;
use crate::qb::traits::StatementBuilder;

/// UPDATE builder with AND-folded WHERE.
#[derive(Clone, Debug)]
pub struct UpdateQb {
    update: Update,
    error: Option<BuildError>,
}

impl UpdateQb {
    /// Create a new UPDATE builder.
    pub fn new(table: SchemaTable) -> Self {
        Self {
            update: Update {
                table,
                assignments: Vec::new(),
                where_: None,
            },
            error: None,
        }
    }

    /// Append `column = to`.
    ///
    /// Setting the same column twice emits both assignments.
    pub fn set(mut self, column: impl Into<String>, to: Expr) -> Self {
        if self.error.is_some() {
            return self;
        }
        self.update.assignments.push(Assignment {
            column: column.into(),
            to,
        });
        self
    }

    /// AND `expr` onto the existing WHERE condition.
    pub fn and_where(mut self, expr: Expr) -> Self {
        if self.error.is_some() {
            return self;
        }
        self.update.where_ = all([self.update.where_.take(), Some(expr)]);
        self
    }

    /// Finish the builder.
    pub fn build(self) -> Result<Update, BuildError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.update),
        }
    }
}

impl StatementBuilder for UpdateQb {
    fn statement(&self) -> Result<Statement, BuildError> {
        self.clone().build().map(Statement::Update)
    }

    fn build_error(&self) -> Option<&BuildError> {
        self.error.as_ref()
    }
}
