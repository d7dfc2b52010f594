//! Statement tree → SQL text.
//!
//! Rendering is a single recursive-descent pass that appends to one `String`.
//! Clause order is fixed and no parentheses are ever inserted around nested
//! expressions, so `a OR b AND c` is emitted exactly as built.
//!
//! The first error aborts the pass; the partially written buffer is dropped and
//! only the error (with the offending statement attached) is returned.

use crate::ast::{
    BinaryExpr, BinaryOp, Column, Delete, Direction, Expr, Insert, InsertKind, InsertSource, Join,
    JoinType, Literal, OrderingTerm, SchemaTable, Select, Statement, UnaryExpr, UnaryOp, Update,
};
use crate::error::{InvalidStatementError, TranslateError};

type Render = Result<(), TranslateError>;

/// Render a statement as SQL.
///
/// # Example
/// ```
/// use sqltree::qb::{self, StatementBuilder};
/// use sqltree::translate_statement;
///
/// let stmt = qb::select("t", ["*"]).statement()?;
/// assert_eq!(translate_statement(&stmt)?, "SELECT * FROM t");
/// # Ok::<(), sqltree::TreeError>(())
/// ```
pub fn translate_statement(statement: &Statement) -> Result<String, InvalidStatementError> {
    let mut sql = String::new();
    let rendered = match statement {
        Statement::Select(sel) => translate_select(&mut sql, sel),
        Statement::Insert(ins) => translate_insert(&mut sql, ins),
        Statement::Update(upd) => translate_update(&mut sql, upd),
        Statement::Delete(del) => translate_delete(&mut sql, del),
    };

    match rendered {
        Ok(()) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "sqltree.translate",
                kind = statement.kind(),
                sql = %sql,
                "translated statement"
            );
            Ok(sql)
        }
        Err(source) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                target: "sqltree.translate",
                kind = statement.kind(),
                error = %source,
                "statement translation failed"
            );
            Err(InvalidStatementError::new(statement, source))
        }
    }
}

// ==================== Statements ====================

fn translate_select(sql: &mut String, sel: &Select) -> Render {
    if sel.result_columns.is_empty() {
        return Err(TranslateError::EmptyResultColumns);
    }

    sql.push_str("SELECT ");
    sql.push_str(&sel.result_columns.join(", "));
    sql.push_str(" FROM ");
    sql.push_str(&sel.from);

    for join in &sel.joins {
        sql.push(' ');
        translate_join(sql, join)?;
    }

    if let Some(where_) = &sel.where_ {
        sql.push_str(" WHERE ");
        translate_expr(sql, where_)?;
    }

    // Each term carries its own ORDER BY keyword and precedes GROUP BY.
    for term in &sel.order_by {
        translate_ordering_term(sql, term)?;
    }

    if !sel.group_by.is_empty() {
        sql.push_str(" GROUP BY ");
        translate_expr_list(sql, &sel.group_by)?;
    }

    if let Some(having) = &sel.having {
        sql.push_str(" HAVING ");
        translate_expr(sql, having)?;
    }

    if sel.limit != 0 {
        sql.push_str(" LIMIT ");
        sql.push_str(&sel.limit.to_string());
    }

    if sel.offset != 0 {
        sql.push_str(" OFFSET ");
        sql.push_str(&sel.offset.to_string());
    }

    Ok(())
}

fn translate_insert(sql: &mut String, ins: &Insert) -> Render {
    let Some(source) = &ins.source else {
        return Err(TranslateError::MissingInsertSource);
    };

    sql.push_str(match ins.kind {
        InsertKind::Insert => "INSERT INTO ",
        InsertKind::Replace => "REPLACE INTO ",
    });
    translate_schema_table(sql, &ins.into);
    sql.push_str(" (");
    sql.push_str(&ins.columns.join(", "));
    sql.push_str(") ");

    match source {
        InsertSource::Values(rows) => translate_values(sql, rows),
        InsertSource::Select(sel) => translate_select(sql, sel),
    }
}

fn translate_values(sql: &mut String, rows: &[Vec<Expr>]) -> Render {
    if rows.is_empty() || rows.iter().any(Vec::is_empty) {
        return Err(TranslateError::EmptyValues);
    }

    sql.push_str("VALUES ");
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            sql.push_str(", ");
        }
        sql.push('(');
        translate_expr_list(sql, row)?;
        sql.push(')');
    }
    Ok(())
}

fn translate_update(sql: &mut String, upd: &Update) -> Render {
    if upd.assignments.is_empty() {
        return Err(TranslateError::EmptyAssignments);
    }

    sql.push_str("UPDATE ");
    translate_schema_table(sql, &upd.table);
    sql.push_str(" SET ");
    for (i, set) in upd.assignments.iter().enumerate() {
        if i > 0 {
            sql.push_str(", ");
        }
        sql.push_str(&set.column);
        sql.push_str(" = ");
        translate_expr(sql, &set.to)?;
    }

    if let Some(where_) = &upd.where_ {
        sql.push_str(" WHERE ");
        translate_expr(sql, where_)?;
    }
    Ok(())
}

fn translate_delete(sql: &mut String, del: &Delete) -> Render {
    sql.push_str("DELETE FROM ");
    translate_schema_table(sql, &del.from);

    if let Some(where_) = &del.where_ {
        sql.push_str(" WHERE ");
        translate_expr(sql, where_)?;
    }
    Ok(())
}

// ==================== Clauses ====================

/// Schema is emitted directly before the table, with no separator added.
fn translate_schema_table(sql: &mut String, table: &SchemaTable) {
    if let Some(schema) = &table.schema {
        sql.push_str(schema);
    }
    sql.push_str(&table.table);
}

fn translate_join(sql: &mut String, join: &Join) -> Render {
    if join.natural {
        sql.push_str("NATURAL ");
    }
    sql.push_str(match join.join_type {
        JoinType::Inner => "",
        JoinType::Left => "LEFT ",
        JoinType::LeftOuter => "LEFT OUTER ",
        JoinType::Right => "RIGHT ",
        JoinType::RightOuter => "RIGHT OUTER ",
        JoinType::Cross => "CROSS ",
    });
    sql.push_str("JOIN ");
    sql.push_str(&join.table);
    sql.push_str(" ON ");
    translate_expr(sql, &join.on)
}

fn translate_ordering_term(sql: &mut String, term: &OrderingTerm) -> Render {
    sql.push_str(" ORDER BY ");
    translate_expr(sql, &term.by)?;
    sql.push_str(match term.direction {
        Direction::Asc => " ASC",
        Direction::Desc => " DESC",
    });
    Ok(())
}

fn translate_expr_list(sql: &mut String, exprs: &[Expr]) -> Render {
    for (i, expr) in exprs.iter().enumerate() {
        if i > 0 {
            sql.push_str(", ");
        }
        translate_expr(sql, expr)?;
    }
    Ok(())
}

// ==================== Expressions ====================

fn translate_expr(sql: &mut String, expr: &Expr) -> Render {
    match expr {
        Expr::Literal(lit) => translate_literal(sql, lit),
        Expr::Column(col) => translate_column(sql, col),
        Expr::Unary(unary) => translate_unary(sql, unary),
        Expr::Binary(binary) => translate_binary(sql, binary),
    }
}

fn translate_literal(sql: &mut String, lit: &Literal) -> Render {
    match lit {
        Literal::Str(s) => sql.push_str(s),
        Literal::Num(n) => {
            if !n.is_finite() {
                return Err(TranslateError::NonFiniteNumber(*n));
            }
            // f64's Display is the shortest round-trip form and never uses an exponent.
            sql.push_str(&n.to_string());
        }
        Literal::Boolean(true) => sql.push_str("TRUE"),
        Literal::Boolean(false) => sql.push_str("FALSE"),
        Literal::Null => sql.push_str("NULL"),
    }
    Ok(())
}

fn translate_column(sql: &mut String, col: &Column) -> Render {
    if col.column.is_empty() {
        return Err(TranslateError::EmptyColumn {
            schema: col.schema.clone(),
            table: col.table.clone(),
        });
    }
    if let Some(schema) = col.schema.as_deref().filter(|s| !s.is_empty()) {
        sql.push_str(schema);
        sql.push('.');
    }
    if let Some(table) = col.table.as_deref().filter(|t| !t.is_empty()) {
        sql.push_str(table);
        sql.push('.');
    }
    sql.push_str(&col.column);
    Ok(())
}

fn translate_unary(sql: &mut String, unary: &UnaryExpr) -> Render {
    sql.push_str(match unary.op {
        UnaryOp::Not => "NOT ",
        UnaryOp::Pos => "+",
        UnaryOp::Neg => "-",
    });
    translate_expr(sql, &unary.operand)
}

fn translate_binary(sql: &mut String, binary: &BinaryExpr) -> Render {
    translate_expr(sql, &binary.left)?;
    sql.push_str(binary_op_token(binary.op));
    translate_expr(sql, &binary.right)
}

fn binary_op_token(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Eq => " = ",
        BinaryOp::Ne => " != ",
        BinaryOp::Gt => " > ",
        BinaryOp::Gte => " >= ",
        BinaryOp::Lt => " < ",
        BinaryOp::Lte => " <= ",
        BinaryOp::And => " AND ",
        BinaryOp::Or => " OR ",
        BinaryOp::Is => " IS ",
        BinaryOp::IsNot => " IS NOT ",
    }
}
