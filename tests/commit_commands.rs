use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;

use common::command::{committed_repository_dir, repository_dir, run_gitlet_command};
use common::file::{write_file, write_generated_files, FileSpec};

#[rstest]
fn commit_advances_the_current_branch_and_clears_staging(repository_dir: TempDir) {
    let dir = repository_dir;
    run_gitlet_command(dir.path(), &["init"]).assert().success();
    let initial = common::read_branch(&dir, "master");

    write_file(FileSpec::new(dir.path().join("a.txt"), "hi\n".to_string()));
    run_gitlet_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["commit", "m1"])
        .assert()
        .success();

    let head = common::read_branch(&dir, "master");
    assert_ne!(head, initial);
    assert!(common::staging_is_empty(&dir));

    // the new commit is stored under the fingerprint the branch points to
    let commits = common::list_store(&dir, "commits");
    assert!(commits.contains(&head));
    assert_eq!(commits.len(), 2);
}

#[rstest]
fn commit_with_a_blank_message_fails(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir;

    write_file(FileSpec::new(dir.path().join("b.txt"), "b\n".to_string()));
    run_gitlet_command(dir.path(), &["add", "b.txt"])
        .assert()
        .success();

    for message in ["", "   "] {
        run_gitlet_command(dir.path(), &["commit", message])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Please enter a commit message."));
    }

    // the failed commits mutated nothing
    assert!(!common::staging_is_empty(&dir));
}

#[rstest]
fn commit_with_nothing_staged_fails(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir;
    let head = common::read_branch(&dir, "master");

    run_gitlet_command(dir.path(), &["commit", "m2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No changes added to the commit."));

    assert_eq!(common::read_branch(&dir, "master"), head);
}

#[rstest]
fn committing_a_staged_removal_drops_the_file_from_the_tree(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir;

    run_gitlet_command(dir.path(), &["rm", "a.txt"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["commit", "remove a"])
        .assert()
        .success();

    assert!(common::staging_is_empty(&dir));

    // the new head no longer tracks the file
    run_gitlet_command(dir.path(), &["checkout", "--", "a.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("File does not exist in that commit."));
}

#[rstest]
fn commit_snapshots_every_staged_file(repository_dir: TempDir) {
    let dir = repository_dir;
    run_gitlet_command(dir.path(), &["init"]).assert().success();

    let files = write_generated_files(dir.path(), 4);
    for file in &files {
        let file_name = file.path.file_name().unwrap().to_string_lossy();
        run_gitlet_command(dir.path(), &["add", &file_name])
            .assert()
            .success();
    }
    run_gitlet_command(dir.path(), &["commit", "snapshot"])
        .assert()
        .success();

    // every staged file made it into the head commit
    for file in &files {
        let file_name = file.path.file_name().unwrap().to_string_lossy().to_string();
        std::fs::remove_file(&file.path).unwrap();
        run_gitlet_command(dir.path(), &["checkout", "--", &file_name])
            .assert()
            .success();
        assert_eq!(common::read_working_file(&dir, &file_name), file.content);
    }
}

#[rstest]
fn objects_are_immutable_across_repeated_stores(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir;
    let blobs_before = common::list_store(&dir, "blobs");

    // commit the identical contents again under a new name
    write_file(FileSpec::new(dir.path().join("copy.txt"), "hi\n".to_string()));
    run_gitlet_command(dir.path(), &["add", "copy.txt"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["commit", "copy of a"])
        .assert()
        .success();

    // same contents, same blob: the store did not grow
    assert_eq!(common::list_store(&dir, "blobs"), blobs_before);
}
