//! DELETE statement builder.

use crate::ast::{Delete, Expr, SchemaTable, Statement};
use crate::error::BuildError;
use crate::qb::expr::all;
use crate::qb::traits::StatementBuilder;

/// DELETE builder.
///
/// Without any `and_where` call the statement deletes every row.
#[derive(Clone, Debug)]
pub struct DeleteQb {
    delete: Delete,
    error: Option<BuildError>,
}

impl DeleteQb {
    /// Create a new DELETE builder.
    pub fn new(from: SchemaTable) -> Self {
        Self {
            delete: Delete { from, where_: None },
            error: None,
        }
    }

    /// AND `expr` onto the existing WHERE condition.
    pub fn and_where(mut self, expr: Expr) -> Self {
        if self.error.is_some() {
            return self;
        }
        self.delete.where_ = all([self.delete.where_.take(), Some(expr)]);
        self
    }

    /// Finish the builder.
    pub fn build(self) -> Result<Delete, BuildError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.delete),
        }
    }
}

impl StatementBuilder for DeleteQb {
    fn statement(&self) -> Result<Statement, BuildError> {
        self.clone().build().map(Statement::Delete)
    }

    fn build_error(&self) -> Option<&BuildError> {
        self.error.as_ref()
    }
}
