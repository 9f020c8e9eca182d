use std::io::{self, Write};

use anyhow::Context;
use clap::error::ErrorKind;
use colored::Colorize;
use yo_sdk::{RepoConfig, Repository, SdkError};

use crate::cli::*;

/// What a command produced, ready to be shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A one-line success confirmation.
    Done(String),
    /// Raw text printed as-is (the history log).
    Text(String),
    /// Help or usage text from argument parsing.
    Usage(String),
    /// A one-line error report.
    Failed(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Self::Done(s) | Self::Text(s) | Self::Usage(s) | Self::Failed(s) => s,
        }
    }
}

impl From<clap::Error> for Outcome {
    fn from(err: clap::Error) -> Self {
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Self::Text(err.to_string()),
            _ => Self::Usage(err.to_string()),
        }
    }
}

pub fn run_command(cli: Cli, config: RepoConfig) -> Outcome {
    match cli.command {
        Command::Init => cmd_init(config),
        Command::Add(args) => cmd_add(args, config),
        Command::Commit(args) => cmd_commit(args, config),
        Command::Log => cmd_log(config),
    }
}

fn cmd_init(config: RepoConfig) -> Outcome {
    match Repository::init(config) {
        Ok(_) => Outcome::Done("Initialized empty Yo repository successfully!".into()),
        Err(e) => failed("Error initializing repository", e),
    }
}

fn cmd_add(args: AddArgs, config: RepoConfig) -> Outcome {
    match Repository::open(config).stage(&args.file) {
        Ok(_) => Outcome::Done(format!("Added {} to staging area.", args.file.display())),
        Err(e) => failed("Error adding file", e),
    }
}

fn cmd_commit(args: CommitArgs, config: RepoConfig) -> Outcome {
    match Repository::open(config).commit(&args.message()) {
        Ok(result) => Outcome::Done(format!(
            "Changes committed successfully ({}).",
            result.digest.short_hex()
        )),
        Err(e) => failed("Error committing changes", e),
    }
}

fn cmd_log(config: RepoConfig) -> Outcome {
    match Repository::open(config).history() {
        Ok(text) => Outcome::Text(text),
        Err(e) => failed("Error displaying log", e),
    }
}

fn failed(context: &str, err: SdkError) -> Outcome {
    Outcome::Failed(format!("{context}: {err}"))
}

/// Print an outcome. Errors and usage go to stderr; the exit status is
/// the same either way.
pub fn render(outcome: &Outcome) -> anyhow::Result<()> {
    let text = outcome.message();
    match outcome {
        Outcome::Done(_) => writeln!(io::stdout(), "{} {text}", "✓".green().bold()),
        Outcome::Text(_) => write!(io::stdout(), "{text}"),
        Outcome::Usage(_) => write!(io::stderr(), "{text}"),
        Outcome::Failed(_) => writeln!(io::stderr(), "{} {text}", "✗".red().bold()),
    }
    .context("writing output")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    use clap::Parser;

    fn dispatch(workdir: &Path, args: &[&str]) -> Outcome {
        match Cli::try_parse_from(std::iter::once("yo").chain(args.iter().copied())) {
            Ok(cli) => run_command(cli, RepoConfig::new(workdir)),
            Err(e) => Outcome::from(e),
        }
    }

    #[test]
    fn init_then_init_again() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            dispatch(dir.path(), &["init"]),
            Outcome::Done("Initialized empty Yo repository successfully!".into())
        );

        match dispatch(dir.path(), &["init"]) {
            Outcome::Failed(msg) => {
                assert!(msg.starts_with("Error initializing repository: "));
                assert!(msg.contains("already initialized"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn add_commit_log_flow() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), b"hello").unwrap();

        dispatch(dir.path(), &["init"]);
        assert_eq!(
            dispatch(dir.path(), &["add", "a.txt"]),
            Outcome::Done("Added a.txt to staging area.".into())
        );

        let committed = dispatch(dir.path(), &["commit", "first", "commit"]);
        assert!(committed
            .message()
            .starts_with("Changes committed successfully ("));

        match dispatch(dir.path(), &["log"]) {
            Outcome::Text(log) => {
                assert!(log.starts_with("Commit: "));
                assert!(log.contains("\nMessage: first commit\nTime: "));
                assert!(log.ends_with(" GMT\n\n"));
            }
            other => panic!("expected log text, got {other:?}"),
        }
    }

    #[test]
    fn add_missing_file_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        dispatch(dir.path(), &["init"]);
        match dispatch(dir.path(), &["add", "ghost.txt"]) {
            Outcome::Failed(msg) => assert!(msg.starts_with("Error adding file: cannot read")),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn commit_with_nothing_staged() {
        let dir = tempfile::tempdir().unwrap();
        dispatch(dir.path(), &["init"]);
        assert_eq!(
            dispatch(dir.path(), &["commit", "empty"]),
            Outcome::Failed("Error committing changes: no changes staged for commit".into())
        );
    }

    #[test]
    fn log_before_any_commit() {
        let dir = tempfile::tempdir().unwrap();
        dispatch(dir.path(), &["init"]);
        assert_eq!(
            dispatch(dir.path(), &["log"]),
            Outcome::Failed("Error displaying log: no commits yet".into())
        );
    }

    #[test]
    fn unknown_command_is_usage() {
        let dir = tempfile::tempdir().unwrap();
        match dispatch(dir.path(), &["push"]) {
            Outcome::Usage(text) => assert!(text.contains("push")),
            other => panic!("expected usage, got {other:?}"),
        }
    }

    #[test]
    fn missing_command_is_usage() {
        let dir = tempfile::tempdir().unwrap();
        match dispatch(dir.path(), &[]) {
            Outcome::Usage(text) => assert!(text.contains("Usage:")),
            other => panic!("expected usage, got {other:?}"),
        }
    }

    #[test]
    fn help_is_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(dispatch(dir.path(), &["--help"]), Outcome::Text(_)));
    }
}
