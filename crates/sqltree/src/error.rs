//! Error types for sqltree

use crate::ast::Statement;
use thiserror::Error;

/// Result type alias for sqltree operations
pub type TreeResult<T> = Result<T, TreeError>;

/// Error recorded by a statement builder.
///
/// The first error poisons the builder; it is reported when the statement is
/// finally requested.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("HAVING without GROUP BY is invalid; you must add the GROUP BY first")]
    HavingWithoutGroupBy,
}

/// Failure while rendering a statement tree to SQL.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TranslateError {
    /// A column reference has an empty column name.
    #[error("column is required in column reference (schema: {schema:?}, table: {table:?})")]
    EmptyColumn {
        schema: Option<String>,
        table: Option<String>,
    },

    #[error("SELECT requires at least one result column")]
    EmptyResultColumns,

    #[error("UPDATE requires at least one SET assignment")]
    EmptyAssignments,

    #[error("INSERT has neither VALUES nor a SELECT source")]
    MissingInsertSource,

    /// VALUES with no rows, or a row with no expressions.
    #[error("INSERT VALUES requires at least one row and no empty rows")]
    EmptyValues,

    #[error("numeric literal is not finite: {0}")]
    NonFiniteNumber(f64),
}

/// A translation error with the offending top-level statement attached.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("error translating statement {statement:?}: {source}")]
pub struct InvalidStatementError {
    pub statement: Box<Statement>,
    #[source]
    pub source: TranslateError,
}

impl InvalidStatementError {
    pub(crate) fn new(statement: &Statement, source: TranslateError) -> Self {
        Self {
            statement: Box::new(statement.clone()),
            source,
        }
    }
}

/// Error types for building, translating and transporting statements
#[derive(Debug, Error)]
pub enum TreeError {
    /// Builder validation error
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Translation error
    #[error("Translate error: {0}")]
    Translate(#[from] InvalidStatementError),

    /// Wire encoding/decoding error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl TreeError {
    /// Check if this is a builder validation error
    pub fn is_build(&self) -> bool {
        matches!(self, Self::Build(_))
    }

    /// Check if this is a translation error
    pub fn is_translate(&self) -> bool {
        matches!(self, Self::Translate(_))
    }
}
