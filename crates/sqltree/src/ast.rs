//! Statement and expression trees.
//!
//! Every type here is plain data: builders in [`crate::qb`] assemble them and
//! [`crate::translate`] renders them. All types serialize with serde so a
//! statement can be shipped to a remote translator as JSON.

use crate::error::{TreeError, TreeResult};
use serde::{Deserialize, Serialize};

/// Literal value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
    /// Emitted verbatim; callers own quoting.
    Str(String),
    Num(f64),
    Boolean(bool),
    Null,
}

/// Column reference: `[schema.][table.]column`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    pub column: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnaryOp {
    Not,
    Pos,
    Neg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    And,
    Or,
    Is,
    IsNot,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub operand: Box<Expr>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// Expression node.
///
/// Expressions form a tree: each node owns its children, nothing is shared.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    Literal(Literal),
    Column(Column),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
}

impl Expr {
    pub(crate) fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary(UnaryExpr {
            op,
            operand: Box::new(operand),
        })
    }

    pub(crate) fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}

/// A relation, optionally schema-qualified.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    pub table: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinType {
    #[default]
    Inner,
    Left,
    LeftOuter,
    Right,
    RightOuter,
    Cross,
}

/// JOIN clause.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Join {
    pub table: String,
    pub on: Expr,
    #[serde(default)]
    pub join_type: JoinType,
    #[serde(default)]
    pub natural: bool,
}

impl Join {
    /// Create an INNER JOIN on `table`.
    pub fn new(table: impl Into<String>, on: Expr) -> Self {
        Self {
            table: table.into(),
            on,
            join_type: JoinType::Inner,
            natural: false,
        }
    }

    /// Set the join type.
    pub fn join_type(mut self, join_type: JoinType) -> Self {
        self.join_type = join_type;
        self
    }

    /// Mark the join as NATURAL.
    pub fn natural(mut self) -> Self {
        self.natural = true;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderingTerm {
    pub by: Expr,
    #[serde(default)]
    pub direction: Direction,
}

/// SELECT statement.
///
/// `limit` and `offset` use 0 for "unset".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Select {
    pub result_columns: Vec<String>,
    pub from: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub joins: Vec<Join>,
    #[serde(rename = "where", default, skip_serializing_if = "Option::is_none")]
    pub where_: Option<Expr>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_by: Vec<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub having: Option<Expr>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order_by: Vec<OrderingTerm>,
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}

impl Select {
    pub(crate) fn new(from: String, result_columns: Vec<String>) -> Self {
        Self {
            result_columns,
            from,
            joins: Vec::new(),
            where_: None,
            group_by: Vec::new(),
            having: None,
            order_by: Vec::new(),
            limit: 0,
            offset: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertKind {
    #[default]
    Insert,
    Replace,
}

/// Rows for INSERT: literal VALUES or a sub-select.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertSource {
    /// Rows are not required to have equal length.
    Values(Vec<Vec<Expr>>),
    Select(Box<Select>),
}

/// INSERT (or REPLACE) statement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Insert {
    #[serde(default)]
    pub kind: InsertKind,
    pub into: SchemaTable,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<InsertSource>,
}

/// `column = to` in an UPDATE SET list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub column: String,
    pub to: Expr,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub table: SchemaTable,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
    #[serde(rename = "where", default, skip_serializing_if = "Option::is_none")]
    pub where_: Option<Expr>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Delete {
    pub from: SchemaTable,
    #[serde(rename = "where", default, skip_serializing_if = "Option::is_none")]
    pub where_: Option<Expr>,
}

/// One SQL statement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statement {
    Select(Select),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
}

impl Statement {
    /// Short name of the statement kind, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::Select(_) => "select",
            Statement::Insert(ins) => match ins.kind {
                InsertKind::Insert => "insert",
                InsertKind::Replace => "replace",
            },
            Statement::Update(_) => "update",
            Statement::Delete(_) => "delete",
        }
    }

    /// Encode as JSON for transport.
    pub fn to_json(&self) -> TreeResult<String> {
        serde_json::to_string(self).map_err(|e| TreeError::Serialization(e.to_string()))
    }

    /// Decode a statement received as JSON.
    pub fn from_json(json: &str) -> TreeResult<Self> {
        serde_json::from_str(json).map_err(|e| TreeError::Serialization(e.to_string()))
    }
}

impl From<Select> for Statement {
    fn from(sel: Select) -> Self {
        Statement::Select(sel)
    }
}

impl From<Insert> for Statement {
    fn from(ins: Insert) -> Self {
        Statement::Insert(ins)
    }
}

impl From<Update> for Statement {
    fn from(upd: Update) -> Self {
        Statement::Update(upd)
    }
}

impl From<Delete> for Statement {
    fn from(del: Delete) -> Self {
        Statement::Delete(del)
    }
}
