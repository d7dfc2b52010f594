//! Build one statement of each kind, print its SQL and the JSON it travels as.
//!
//! Run with: `cargo run -p sqltree --example builder`

use sqltree::qb::{
    self, StatementBuilder, all, col, eq, gte, is_not, lt, null, num, str, table, table_col,
};
use sqltree::{Statement, TreeResult};

fn main() -> TreeResult<()> {
    let min_age = Some(18.0);
    let status: Option<&str> = None;

    let filter = all([
        min_age.map(|v| gte(col("age"), num(v))),
        status.map(|s| eq(col("status"), str(format!("'{s}'")))),
        Some(is_not(table_col("users", "deleted_at"), null())),
    ]);

    let mut select = qb::select("users", ["users.id", "users.name", "COUNT(orders.id)"])
        .left_join("orders", eq(table_col("orders", "user_id"), table_col("users", "id")))
        .group_by([table_col("users", "id"), table_col("users", "name")])
        .order_by_desc(col("users.id"))
        .limit(20);
    if let Some(filter) = filter {
        select = select.and_where(filter);
    }

    let builders: Vec<Box<dyn StatementBuilder>> = vec![
        Box::new(select),
        Box::new(
            qb::insert(table("users"), ["name", "age"])
                .values([["'alice'", "30"], ["'bob'", "25"]]),
        ),
        Box::new(
            qb::update(table("users"))
                .set("active", qb::boolean(false))
                .and_where(lt(col("last_login"), str("'2020-01-01'"))),
        ),
        Box::new(qb::delete(table("sessions")).and_where(lt(col("expires_at"), str("now()")))),
    ];

    for builder in &builders {
        let stmt: Statement = builder.statement()?;
        println!("-- {}", stmt.kind());
        println!("{}", builder.to_sql()?);
        println!("{}\n", stmt.to_json()?);
    }

    Ok(())
}
