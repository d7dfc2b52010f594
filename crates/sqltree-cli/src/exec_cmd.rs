use crate::cli::ExecArgs;
use crate::config::ProjectConfig;
use crate::input::read_statements;
use crate::translate_cmd::render_all;
use anyhow::Context;
use std::path::Path;

pub async fn run(args: ExecArgs) -> anyhow::Result<()> {
    let cfg = ProjectConfig::resolve(&args.config)?;
    let database_url = resolve_database(&args.config, cfg.as_ref(), args.database)?;

    let statements = read_statements(&args.inputs)?;
    // Nothing runs unless every statement translates.
    let sqls = render_all(&statements, false)?;

    let client = connect(&database_url).await?;

    for (stmt, sql) in statements.iter().zip(&sqls) {
        let rows = client
            .execute(sql.as_str(), &[])
            .await
            .with_context(|| format!("failed to execute: {sql}"))?;

        tracing::info!(
            target: "sqltree.exec",
            kind = stmt.kind(),
            rows,
            sql = %sql,
            "executed statement"
        );
        println!("{}: {rows} row(s)", stmt.kind());
    }
    Ok(())
}

fn resolve_database(
    config_path: &Path,
    config: Option<&ProjectConfig>,
    database: Option<String>,
) -> anyhow::Result<String> {
    if let Some(v) = database {
        return Ok(v);
    }
    if let Some(db) = config.and_then(|c| c.file.database.as_ref()) {
        return Ok(db.url.clone());
    }
    match config {
        Some(cfg) => anyhow::bail!(
            "database URL is required: pass --database or set [database] url in {}",
            cfg.config_path.display()
        ),
        None => anyhow::bail!(
            "database URL is required: pass --database or provide {}",
            config_path.display()
        ),
    }
}

async fn connect(database_url: &str) -> anyhow::Result<tokio_postgres::Client> {
    let (client, connection) = tokio_postgres::connect(database_url, tokio_postgres::NoTls)
        .await
        .with_context(|| format!("failed to connect to database: {database_url}"))?;

    tokio::spawn(async move {
        if let Err(err) = connection.await {
            eprintln!("connection error: {err}");
        }
    });

    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigFile, DatabaseConfig, TranslateConfig};
    use std::path::PathBuf;

    fn project(url: Option<&str>) -> ProjectConfig {
        ProjectConfig {
            config_path: PathBuf::from("conf/sqltree.toml"),
            file: ConfigFile {
                version: "1".to_string(),
                database: url.map(|u| DatabaseConfig { url: u.to_string() }),
                translate: TranslateConfig::default(),
            },
        }
    }

    #[test]
    fn flag_overrides_config() {
        let cfg = project(Some("postgres://cfg/db"));
        let url = resolve_database(
            Path::new("sqltree.toml"),
            Some(&cfg),
            Some("postgres://flag/db".to_string()),
        )
        .unwrap();
        assert_eq!(url, "postgres://flag/db");
    }

    #[test]
    fn falls_back_to_config() {
        let cfg = project(Some("postgres://cfg/db"));
        let url = resolve_database(Path::new("sqltree.toml"), Some(&cfg), None).unwrap();
        assert_eq!(url, "postgres://cfg/db");
    }

    #[test]
    fn missing_url_is_an_error() {
        let err = resolve_database(Path::new("sqltree.toml"), None, None).unwrap_err();
        assert!(err.to_string().contains("provide sqltree.toml"));

        let cfg = project(None);
        let err = resolve_database(Path::new("sqltree.toml"), Some(&cfg), None).unwrap_err();
        assert!(err.to_string().contains("conf/sqltree.toml"));
    }
}
