//! User-visible error catalogue
//!
//! Every command failure the user can trigger maps onto one of these
//! variants. The message text is part of the external interface and must
//! not change. `main` prints the message and exits with code 1.
//!
//! I/O failures and dangling references are not part of this catalogue;
//! they bubble up as plain `anyhow` errors and are equally fatal.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Abort {
    #[error("Please enter a command.")]
    MissingCommand,

    #[error("No command with that name exists.")]
    UnknownCommand,

    #[error("Incorrect operands.")]
    IncorrectOperands,

    #[error("Not in an initialized Gitlet directory.")]
    NotInitialized,

    #[error("A Gitlet version-control system already exists in the current directory.")]
    AlreadyInitialized,

    #[error("File does not exist.")]
    MissingWorkingFile,

    #[error("Please enter a file name.")]
    BlankFileName,

    #[error("No reason to remove the file.")]
    NothingToRemove,

    #[error("Please enter a commit message.")]
    BlankCommitMessage,

    #[error("No changes added to the commit.")]
    NothingToCommit,

    #[error("A branch with that name already exists.")]
    BranchAlreadyExists,

    #[error("A branch with that name does not exist.")]
    MissingBranch,

    #[error("Cannot remove the current branch.")]
    RemoveCurrentBranch,

    #[error("No such branch exists.")]
    NoSuchBranch,

    #[error("No need to checkout the current branch.")]
    CheckoutCurrentBranch,

    #[error("No commit with that id exists.")]
    MissingCommit,

    #[error("File does not exist in that commit.")]
    MissingFileInCommit,

    #[error("There is an untracked file in the way; delete it, or add and commit it first.")]
    UntrackedFileInTheWay,

    #[error("You have uncommitted changes.")]
    UncommittedChanges,

    #[error("Cannot merge a branch with itself.")]
    MergeWithSelf,
}
