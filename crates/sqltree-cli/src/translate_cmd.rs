use crate::cli::TranslateArgs;
use crate::config::ProjectConfig;
use crate::input::read_statements;
use sqltree::{Statement, translate_statement};

pub fn run(args: TranslateArgs) -> anyhow::Result<()> {
    let cfg = ProjectConfig::resolve(&args.config)?;
    let terminator =
        !args.no_terminator && cfg.as_ref().is_none_or(|c| c.file.translate.terminator);

    let statements = read_statements(&args.inputs)?;
    for sql in render_all(&statements, terminator)? {
        println!("{sql}");
    }
    Ok(())
}

/// Translate every statement, stopping at the first failure.
pub fn render_all(statements: &[Statement], terminator: bool) -> anyhow::Result<Vec<String>> {
    statements
        .iter()
        .enumerate()
        .map(|(i, stmt)| {
            let mut sql = translate_statement(stmt)
                .map_err(|e| anyhow::anyhow!("statement #{}: {e}", i + 1))?;
            if terminator {
                sql.push(';');
            }
            Ok(sql)
        })
        .collect()
}
