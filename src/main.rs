#![allow(dead_code)]

use crate::areas::repository::Repository;
use crate::errors::Abort;
use anyhow::Result;
use clap::{Parser, Subcommand};

mod areas;
mod artifacts;
mod commands;
mod errors;

#[derive(Parser)]
#[command(
    name = "gitlet",
    version = "0.1.0",
    about = "A miniature content-addressed version-control system",
    long_about = "Gitlet is a miniature version-control system with staging, \
    branches, history, checkout, reset, and three-way merge, operating on a \
    flat working directory.",
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Create a new Gitlet repository in the current directory")]
    Init,
    #[command(about = "Stage a file for addition")]
    Add {
        #[arg(index = 1, help = "The file to stage")]
        file: String,
    },
    #[command(about = "Unstage a file, or stage a tracked file for removal")]
    Rm {
        #[arg(index = 1, help = "The file to remove")]
        file: String,
    },
    #[command(about = "Record the staged snapshot as a new commit")]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: String,
    },
    #[command(about = "Show the history of the current branch")]
    Log,
    #[command(about = "Show every commit ever made")]
    GlobalLog,
    #[command(about = "Print the ids of all commits with the given message")]
    Find {
        #[arg(index = 1, help = "The commit message to search for")]
        message: String,
    },
    #[command(about = "Show branches, staged changes, and the working tree state")]
    Status,
    #[command(about = "Create a new branch pointing at the current commit")]
    Branch {
        #[arg(index = 1, help = "The branch name")]
        name: String,
    },
    #[command(about = "Delete a branch pointer")]
    RmBranch {
        #[arg(index = 1, help = "The branch name")]
        name: String,
    },
    #[command(about = "Checkout a branch, or restore files from a commit")]
    Checkout {
        #[arg(index = 1, help = "A branch name, or a commit id when restoring a file")]
        target: Option<String>,
        #[arg(index = 2, last = true, num_args = 1.., help = "The file to restore, after `--`")]
        files: Vec<String>,
    },
    #[command(about = "Move the current branch to a commit and check it out")]
    Reset {
        #[arg(index = 1, help = "The target commit id (short ids allowed)")]
        commit_id: String,
    },
    #[command(about = "Merge another branch into the current branch")]
    Merge {
        #[arg(index = 1, help = "The branch to merge from")]
        branch: String,
    },
}

fn main() {
    if let Err(error) = run() {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::try_parse().map_err(map_parse_error)?;

    let pwd = std::env::current_dir()?;
    let mut repository = Repository::new(pwd, Box::new(std::io::stdout()))?;

    if !matches!(cli.command, Commands::Init) {
        repository.ensure_initialized()?;
    }

    match &cli.command {
        Commands::Init => repository.init(),
        Commands::Add { file } => repository.add(file),
        Commands::Rm { file } => repository.rm(file),
        Commands::Commit { message } => repository.commit(message),
        Commands::Log => repository.log(),
        Commands::GlobalLog => repository.global_log(),
        Commands::Find { message } => repository.find(message),
        Commands::Status => repository.status(),
        Commands::Branch { name } => repository.branch(name),
        Commands::RmBranch { name } => repository.rm_branch(name),
        Commands::Checkout { target, files } => repository.checkout(target.as_deref(), files),
        Commands::Reset { commit_id } => repository.reset(commit_id),
        Commands::Merge { branch } => repository.merge(branch),
    }
}

/// Map clap parse failures onto the fixed error catalogue
///
/// The CLI surface promises exact strings: a missing command, an unknown
/// command, and every operand-count mistake each have one message.
fn map_parse_error(error: clap::Error) -> anyhow::Error {
    use clap::error::ErrorKind;

    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = error.print();
            std::process::exit(0);
        }
        ErrorKind::InvalidSubcommand => Abort::UnknownCommand.into(),
        ErrorKind::MissingSubcommand | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            Abort::MissingCommand.into()
        }
        _ => Abort::IncorrectOperands.into(),
    }
}
