use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;

use common::command::{committed_repository_dir, run_gitlet_command};

#[rstest]
fn branch_points_at_the_current_head_without_switching(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir;
    let head = common::read_branch(&dir, "master");

    run_gitlet_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();

    assert_eq!(common::read_branch(&dir, "feature"), head);
    assert_eq!(common::read_head(&dir), "master");
}

#[rstest]
fn branch_with_an_existing_name_fails(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir;

    run_gitlet_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();

    run_gitlet_command(dir.path(), &["branch", "feature"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "A branch with that name already exists.",
        ));
}

#[rstest]
fn rm_branch_deletes_only_the_pointer(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir;
    let commits_before = common::list_store(&dir, "commits");

    run_gitlet_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["rm-branch", "feature"])
        .assert()
        .success();

    // the branch list is restored exactly, and no commit went away
    let branches = common::list_store(&dir, "branches");
    assert_eq!(branches, vec!["master".to_string()]);
    assert_eq!(common::list_store(&dir, "commits"), commits_before);
}

#[rstest]
fn rm_branch_of_the_current_branch_fails(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir;

    run_gitlet_command(dir.path(), &["rm-branch", "master"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot remove the current branch."));
}

#[rstest]
fn rm_branch_of_a_missing_branch_fails(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir;

    run_gitlet_command(dir.path(), &["rm-branch", "ghost"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "A branch with that name does not exist.",
        ));
}
