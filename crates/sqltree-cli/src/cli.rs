use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTopic {
    Root,
    Translate,
    Exec,
}

#[derive(Debug, Clone)]
pub enum Command {
    Help(HelpTopic),
    Translate(TranslateArgs),
    Exec(ExecArgs),
}

#[derive(Debug, Clone)]
pub struct TranslateArgs {
    pub config: PathBuf,
    pub no_terminator: bool,
    pub inputs: Vec<Input>,
}

#[derive(Debug, Clone)]
pub struct ExecArgs {
    pub config: PathBuf,
    pub database: Option<String>,
    pub inputs: Vec<Input>,
}

/// Where statements are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

pub const DEFAULT_CONFIG: &str = "sqltree.toml";

pub fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    let mut it = args.iter().skip(1);
    let Some(first) = it.next() else {
        return Ok(Command::Help(HelpTopic::Root));
    };

    match first.as_str() {
        "-h" | "--help" => Ok(Command::Help(HelpTopic::Root)),
        "translate" => parse_translate(it.map(|s| s.as_str())),
        "exec" => parse_exec(it.map(|s| s.as_str())),
        _ => anyhow::bail!("unknown command: {first}"),
    }
}

fn parse_translate<'a>(mut it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    let mut config = PathBuf::from(DEFAULT_CONFIG);
    let mut no_terminator = false;
    let mut inputs: Vec<Input> = Vec::new();

    while let Some(token) = it.next() {
        match token {
            "-h" | "--help" => return Ok(Command::Help(HelpTopic::Translate)),
            "--config" => {
                let Some(v) = it.next() else {
                    anyhow::bail!("--config requires a value");
                };
                config = PathBuf::from(v);
            }
            _ if token.starts_with("--config=") => {
                config = PathBuf::from(token.trim_start_matches("--config="));
            }
            "--no-terminator" => no_terminator = true,
            "-" => inputs.push(Input::Stdin),
            other if other.starts_with('-') => anyhow::bail!("unknown argument: {other}"),
            other => inputs.push(Input::File(PathBuf::from(other))),
        }
    }

    if inputs.is_empty() {
        inputs.push(Input::Stdin);
    }

    Ok(Command::Translate(TranslateArgs {
        config,
        no_terminator,
        inputs,
    }))
}

fn parse_exec<'a>(mut it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    let mut config = PathBuf::from(DEFAULT_CONFIG);
    let mut database: Option<String> = None;
    let mut inputs: Vec<Input> = Vec::new();

    while let Some(token) = it.next() {
        match token {
            "-h" | "--help" => return Ok(Command::Help(HelpTopic::Exec)),
            "--config" => {
                let Some(v) = it.next() else {
                    anyhow::bail!("--config requires a value");
                };
                config = PathBuf::from(v);
            }
            _ if token.starts_with("--config=") => {
                config = PathBuf::from(token.trim_start_matches("--config="));
            }
            "--database" => {
                let Some(v) = it.next() else {
                    anyhow::bail!("--database requires a value");
                };
                database = Some(v.to_string());
            }
            _ if token.starts_with("--database=") => {
                database = Some(token.trim_start_matches("--database=").to_string());
            }
            "-" => inputs.push(Input::Stdin),
            other if other.starts_with('-') => anyhow::bail!("unknown argument: {other}"),
            other => inputs.push(Input::File(PathBuf::from(other))),
        }
    }

    if inputs.is_empty() {
        inputs.push(Input::Stdin);
    }

    Ok(Command::Exec(ExecArgs {
        config,
        database,
        inputs,
    }))
}

pub fn print_help(topic: HelpTopic) {
    match topic {
        HelpTopic::Root => {
            println!(
                "\
sqltree - translate JSON-encoded statement trees to SQL

USAGE:
  sqltree <COMMAND> [OPTIONS] [FILES...]

COMMANDS:
  translate     Print the SQL for each statement
  exec          Translate and execute statements against the database

Statements are JSON, one object per file or an array of objects.
With no FILES (or `-`), statements are read from stdin.

Run `sqltree <command> --help` for more."
            );
        }
        HelpTopic::Translate => {
            println!(
                "\
USAGE:
  sqltree translate [OPTIONS] [FILES...]

OPTIONS:
  --config <FILE>       Config file path (default: sqltree.toml, optional)
  --no-terminator       Do not append ';' to each statement
  -h, --help            Print help"
            );
        }
        HelpTopic::Exec => {
            println!(
                "\
USAGE:
  sqltree exec [OPTIONS] [FILES...]

OPTIONS:
  --config <FILE>       Config file path (default: sqltree.toml)
  --database <URL>      Database URL (overrides config)
  -h, --help            Print help

Every statement is translated before the first one is executed."
            );
        }
    }
}
