use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub config_path: PathBuf,
    pub file: ConfigFile,
}

impl ProjectConfig {
    pub fn load(config_path: PathBuf) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(&config_path).map_err(|e| {
            anyhow::anyhow!(
                "failed to read config file {}: {e}",
                config_path.display()
            )
        })?;

        let file = ConfigFile::parse(&raw).map_err(|e| {
            anyhow::anyhow!(
                "invalid config file {}: {e:#}",
                config_path.display()
            )
        })?;

        Ok(Self { config_path, file })
    }

    /// Load `config` if it exists; a missing file is not an error.
    pub fn resolve(config: &Path) -> anyhow::Result<Option<Self>> {
        if config.exists() {
            Ok(Some(Self::load(config.to_path_buf())?))
        } else {
            Ok(None)
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,

    pub database: Option<DatabaseConfig>,

    #[serde(default)]
    pub translate: TranslateConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslateConfig {
    /// Append `;` to each printed statement.
    #[serde(default = "default_true")]
    pub terminator: bool,
}

fn default_true() -> bool {
    true
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self { terminator: true }
    }
}

impl ConfigFile {
    fn parse(raw: &str) -> anyhow::Result<Self> {
        let mut file: ConfigFile =
            toml::from_str(raw).map_err(|e| anyhow::anyhow!("failed to parse: {e}"))?;
        file.expand_env()?;
        file.validate()?;
        Ok(file)
    }

    fn expand_env(&mut self) -> anyhow::Result<()> {
        if let Some(db) = self.database.as_mut() {
            db.url = expand_env_vars(&db.url)?;
        }
        Ok(())
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.version.trim() != "1" {
            anyhow::bail!("unsupported config version: {}", self.version);
        }
        if let Some(db) = &self.database {
            if db.url.trim().is_empty() {
                anyhow::bail!("database.url must not be empty");
            }
        }
        Ok(())
    }
}

fn expand_env_vars(input: &str) -> anyhow::Result<String> {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '$' && chars.peek() == Some(&'{') {
            chars.next(); // consume '{'

            let mut key = String::new();
            let mut closed = false;
            for ch in chars.by_ref() {
                if ch == '}' {
                    closed = true;
                    break;
                }
                key.push(ch);
            }

            if !closed {
                anyhow::bail!("unterminated env var reference: ${{{key}");
            }
            if key.is_empty() {
                anyhow::bail!("invalid env var reference: ${{}}");
            }

            let v = std::env::var(&key)
                .map_err(|_| anyhow::anyhow!("missing env var for config expansion: {key}"))?;
            out.push_str(&v);
            continue;
        }

        out.push(c);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let file = ConfigFile::parse(
            r#"
version = "1"

[database]
url = "postgres://localhost/app"

[translate]
terminator = false
"#,
        )
        .unwrap();

        assert_eq!(
            file.database.map(|db| db.url).as_deref(),
            Some("postgres://localhost/app")
        );
        assert!(!file.translate.terminator);
    }

    #[test]
    fn parse_minimal_config_uses_defaults() {
        let file = ConfigFile::parse("version = \"1\"\n").unwrap();
        assert!(file.database.is_none());
        assert!(file.translate.terminator);
    }

    #[test]
    fn rejects_unknown_version() {
        let err = ConfigFile::parse("version = \"2\"\n").unwrap_err();
        assert!(err.to_string().contains("unsupported config version"));
    }

    #[test]
    fn rejects_empty_database_url() {
        let err = ConfigFile::parse("version = \"1\"\n[database]\nurl = \"  \"\n").unwrap_err();
        assert!(err.to_string().contains("database.url"));
    }

    #[test]
    fn expands_env_vars() {
        // cargo sets CARGO_PKG_NAME for test binaries
        let name = std::env::var("CARGO_PKG_NAME").unwrap();
        assert_eq!(
            expand_env_vars("pkg=${CARGO_PKG_NAME}!").unwrap(),
            format!("pkg={name}!")
        );
        assert_eq!(expand_env_vars("no vars $HOME").unwrap(), "no vars $HOME");
    }

    #[test]
    fn expand_env_vars_errors() {
        assert!(expand_env_vars("${SQLTREE_SURELY_UNSET_VAR_42}").is_err());
        assert!(expand_env_vars("${}").is_err());
        assert!(expand_env_vars("${OPEN").is_err());
    }

    #[test]
    fn resolve_missing_file_is_none() {
        let cfg = ProjectConfig::resolve(Path::new("definitely/not/here/sqltree.toml")).unwrap();
        assert!(cfg.is_none());
    }
}
