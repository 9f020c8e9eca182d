use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "yo",
    about = "Yo: a minimal local version control tool",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log repository operations to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an empty repository in the current directory
    Init,
    /// Stage a file for the next commit
    Add(AddArgs),
    /// Record the staged files
    Commit(CommitArgs),
    /// Show the commit history
    Log,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// File to stage, relative to the current directory
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct CommitArgs {
    /// Commit message; separate words are joined with single spaces
    #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub message: Vec<String>,
}

impl CommitArgs {
    pub fn message(&self) -> String {
        self.message.join(" ")
    }
}
