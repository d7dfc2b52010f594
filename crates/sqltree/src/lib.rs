//! # sqltree
//!
//! Build SQL statements as typed trees, ship them anywhere, render them to SQL
//! text on the other side.
//!
//! ## Features
//!
//! - **Typed trees**: SELECT / INSERT / REPLACE / UPDATE / DELETE as plain serde-friendly data
//! - **Fluent builders**: consuming builders that remember the first error instead of panicking
//! - **Deterministic output**: the same tree always renders to the same text
//! - **No hidden rewriting**: expressions render exactly as built, literals verbatim
//!
//! ## Query Builder (qb)
//!
//! ```
//! use sqltree::qb::{self, StatementBuilder, col, lt, num};
//!
//! let sql = qb::select("t", ["x"])
//!     .group_by([col("a")])
//!     .having(lt(col("c"), num(0)))
//!     .to_sql()?;
//! assert_eq!(sql, "SELECT x FROM t GROUP BY a HAVING c < 0");
//! # Ok::<(), sqltree::TreeError>(())
//! ```
//!
//! ## Transport
//!
//! A [`Statement`] encodes to JSON with [`Statement::to_json`]; the receiving
//! side decodes it with [`Statement::from_json`] and calls [`translate_statement`].
//!
//! Enable the `tracing` feature to log every translated statement on the
//! `sqltree.translate` target.

pub mod ast;
pub mod error;
pub mod qb;
pub mod translate;

pub use ast::{
    Assignment, BinaryExpr, BinaryOp, Column, Delete, Direction, Expr, Insert, InsertKind,
    InsertSource, Join, JoinType, Literal, OrderingTerm, SchemaTable, Select, Statement,
    UnaryExpr, UnaryOp, Update,
};
pub use error::{BuildError, InvalidStatementError, TranslateError, TreeError, TreeResult};
pub use translate::translate_statement;

// Re-export builder entry points for easy access
pub use qb::{
    delete, insert, replace, select, update, DeleteQb, InsertQb, SelectQb, StatementBuilder,
    UpdateQb,
};
