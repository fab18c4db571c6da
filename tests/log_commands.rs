use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;

use common::command::{committed_repository_dir, run_gitlet_command};
use common::file::{write_file, FileSpec};

#[rstest]
fn log_walks_first_parents_newest_first(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir;
    let head = common::read_branch(&dir, "master");

    let expected = format!(
        "\\A===\ncommit {}\nDate: [A-Z][a-z]{{2}} [A-Z][a-z]{{2}} \\d{{1,2}} \
         \\d{{2}}:\\d{{2}}:\\d{{2}} \\d{{4}} \\+0000\nm1\n\n\
         ===\ncommit [0-9a-f]{{40}}\nDate: Thu Jan 1 00:00:00 1970 \\+0000\ninitial commit\n\n\\z",
        head
    );

    run_gitlet_command(dir.path(), &["log"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(expected).unwrap());
}

#[rstest]
fn global_log_lists_every_commit_in_store_order(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir;

    // a second branch commit that log (first-parent walk) would not show
    run_gitlet_command(dir.path(), &["branch", "side"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["checkout", "side"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.path().join("s.txt"), "side\n".to_string()));
    run_gitlet_command(dir.path(), &["add", "s.txt"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["commit", "on side"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["checkout", "master"])
        .assert()
        .success();

    let output = run_gitlet_command(dir.path(), &["global-log"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output).unwrap();

    assert_eq!(output.matches("===\n").count(), 3);
    assert!(output.contains("initial commit"));
    assert!(output.contains("m1"));
    assert!(output.contains("on side"));

    // store enumeration order: commit ids appear sorted
    let printed_ids = output
        .lines()
        .filter_map(|line| line.strip_prefix("commit "))
        .collect::<Vec<_>>();
    let mut sorted_ids = printed_ids.clone();
    sorted_ids.sort();
    assert_eq!(printed_ids, sorted_ids);
}

#[rstest]
fn find_prints_matching_commit_ids(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir;
    let head = common::read_branch(&dir, "master");

    run_gitlet_command(dir.path(), &["find", "m1"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{}\n", head)));

    run_gitlet_command(dir.path(), &["find", "initial commit"])
        .assert()
        .success()
        .stdout(predicate::str::is_match("\\A[0-9a-f]{40}\n\\z").unwrap());
}

#[rstest]
fn find_requires_exact_message_equality(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir;

    run_gitlet_command(dir.path(), &["find", "m"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Found no commit with that message.\n"));
}

#[rstest]
fn find_with_a_blank_message_fails(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir;

    run_gitlet_command(dir.path(), &["find", ""])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please enter a commit message."));
}
