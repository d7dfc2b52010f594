//! Fluent statement builders.
//!
//! Each builder is consumed and returned by every call, so statements are
//! assembled as a single chain. The first validation failure is remembered,
//! later calls become no-ops, and the error surfaces from `build()` or
//! [`StatementBuilder::statement`].
//!
//! # Usage
//!
//! ```
//! use sqltree::qb::{self, StatementBuilder, col, gte, num, table, table_col};
//!
//! // SELECT
//! let stmt = qb::select("t1", ["x"])
//!     .join_eq("t2", table_col("t1", "y"), table_col("t2", "z"))
//!     .statement()?;
//!
//! // INSERT
//! let stmt = qb::insert(table("t"), ["a", "b"])
//!     .values([["1", "2"], ["3", "4"]])
//!     .statement()?;
//!
//! // UPDATE
//! let stmt = qb::update(table("t"))
//!     .set("a", num(0))
//!     .and_where(gte(col("d"), num(3)))
//!     .statement()?;
//!
//! // DELETE
//! let stmt = qb::delete(table("t"))
//!     .and_where(gte(col("d"), num(3)))
//!     .statement()?;
//! # let _ = stmt;
//! # Ok::<(), sqltree::BuildError>(())
//! ```

mod delete;
mod expr;
mod insert;
mod select;
mod traits;
mod update;

pub use delete::DeleteQb;
pub use expr::{
    all, and, any, boolean, col, eq, gt, gte, is, is_not, lt, lte, neg, neq, not, null, num, or,
    pos, schema_table, schema_table_col, str, table, table_col,
};
pub use insert::InsertQb;
pub use select::SelectQb;
pub use traits::StatementBuilder;
pub use update::UpdateQb;

use crate::ast::SchemaTable;

/// Create a SELECT builder over `from` with the given result columns.
///
/// # Example
/// ```
/// let qb = sqltree::qb::select("users", ["id", "name"]);
/// ```
pub fn select<I, S>(from: impl Into<String>, columns: I) -> SelectQb
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    SelectQb::new(from, columns)
}

/// Create an INSERT builder.
pub fn insert<I, S>(into: SchemaTable, columns: I) -> InsertQb
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    InsertQb::new(into, columns)
}

/// Create a REPLACE builder.
pub fn replace<I, S>(into: SchemaTable, columns: I) -> InsertQb
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    InsertQb::replace(into, columns)
}

/// Create an UPDATE builder.
pub fn update(table: SchemaTable) -> UpdateQb {
    UpdateQb::new(table)
}

/// Create a DELETE builder.
///
/// A DELETE without `and_where` removes every row; nothing guards against that here.
pub fn delete(from: SchemaTable) -> DeleteQb {
    DeleteQb::new(from)
}
