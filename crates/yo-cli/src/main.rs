use clap::Parser;
use tracing::Level;
use yo_sdk::RepoConfig;

mod cli;
mod commands;

use commands::Outcome;

fn main() -> anyhow::Result<()> {
    let outcome = match cli::Cli::try_parse() {
        Ok(cli) => {
            let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .init();

            match std::env::current_dir() {
                Ok(root) => commands::run_command(cli, RepoConfig::new(root)),
                Err(e) => Outcome::Failed(format!("Error resolving current directory: {e}")),
            }
        }
        Err(e) => Outcome::from(e),
    };
    commands::render(&outcome)
}
