mod cli;
mod config;
mod exec_cmd;
mod input;
mod logging;
mod translate_cmd;

use anyhow::Context;

pub async fn run(args: Vec<String>) -> anyhow::Result<()> {
    // Before logging init, so RUST_LOG may come from .env.
    load_dotenv(dotenvy::dotenv())?;
    logging::init();

    let cmd = cli::parse_args(&args)?;
    match cmd {
        cli::Command::Help(topic) => {
            cli::print_help(topic);
            Ok(())
        }
        cli::Command::Translate(args) => translate_cmd::run(args),
        cli::Command::Exec(args) => exec_cmd::run(args).await,
    }
}

/// A missing .env is fine; one that exists but cannot be read or parsed is not.
fn load_dotenv<T>(result: dotenvy::Result<T>) -> anyhow::Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e).context("failed to load .env"),
    }
}
