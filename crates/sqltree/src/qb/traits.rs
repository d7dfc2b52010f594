//! Trait definitions for statement builders.

use crate::ast::Statement;
use crate::error::{BuildError, TreeResult};
use crate::translate::translate_statement;

/// Capability shared by every statement builder.
///
/// Code that only needs "something that yields a [`Statement`]" can accept
/// any of the four builders through this trait.
pub trait StatementBuilder {
    /// Return the built statement, or the first error the builder recorded.
    fn statement(&self) -> Result<Statement, BuildError>;

    /// Get the deferred build error, if any.
    fn build_error(&self) -> Option<&BuildError>;

    /// Build and translate in one step.
    fn to_sql(&self) -> TreeResult<String> {
        let statement = self.statement()?;
        Ok(translate_statement(&statement)?)
    }
}
