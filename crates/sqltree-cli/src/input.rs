use crate::cli::Input;
use anyhow::Context;
use sqltree::Statement;
use std::io::Read;

/// Read every statement from `inputs`, in order.
pub fn read_statements(inputs: &[Input]) -> anyhow::Result<Vec<Statement>> {
    let mut statements = Vec::new();
    for input in inputs {
        let (raw, source) = match input {
            Input::Stdin => {
                let mut raw = String::new();
                std::io::stdin()
                    .read_to_string(&mut raw)
                    .context("failed to read stdin")?;
                (raw, "<stdin>".to_string())
            }
            Input::File(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                (raw, path.display().to_string())
            }
        };
        let parsed = parse_statements(&raw, &source)?;
        for stmt in &parsed {
            tracing::debug!(
                target: "sqltree.input",
                source = %source,
                kind = stmt.kind(),
                "received statement"
            );
        }
        statements.extend(parsed);
    }
    Ok(statements)
}

/// A document is either one statement object or an array of them.
pub fn parse_statements(raw: &str, source: &str) -> anyhow::Result<Vec<Statement>> {
    let trimmed = raw.trim_start();
    if trimmed.is_empty() {
        anyhow::bail!("{source}: no statements");
    }

    if trimmed.starts_with('[') {
        serde_json::from_str::<Vec<Statement>>(trimmed)
            .with_context(|| format!("{source}: invalid statement array"))
    } else {
        let stmt = Statement::from_json(trimmed)
            .with_context(|| format!("{source}: invalid statement"))?;
        Ok(vec![stmt])
    }
}
