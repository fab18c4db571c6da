#![allow(dead_code)]

pub mod command;
pub mod file;

use assert_fs::TempDir;
use std::path::Path;

/// Read the commit fingerprint a branch points to
pub fn read_branch(dir: &TempDir, branch_name: &str) -> String {
    let branch_path = dir.path().join(".gitlet").join("branches").join(branch_name);
    std::fs::read_to_string(&branch_path)
        .unwrap_or_else(|e| panic!("Failed to read branch file {:?}: {}", branch_path, e))
        .trim()
        .to_string()
}

/// Read the name of the current branch from HEAD
pub fn read_head(dir: &TempDir) -> String {
    let head_path = dir.path().join(".gitlet").join("HEAD");
    std::fs::read_to_string(&head_path)
        .unwrap_or_else(|e| panic!("Failed to read HEAD file {:?}: {}", head_path, e))
        .trim()
        .to_string()
}

/// Read the persisted staging area files as raw text
pub fn read_staging_area(dir: &TempDir) -> (String, String) {
    let staging_path = dir.path().join(".gitlet").join("stagingArea");
    let addition = std::fs::read_to_string(staging_path.join("ADDITION"))
        .expect("Failed to read the ADDITION file");
    let removal = std::fs::read_to_string(staging_path.join("REMOVAL"))
        .expect("Failed to read the REMOVAL file");
    (addition, removal)
}

/// Whether the staging area is completely empty
pub fn staging_is_empty(dir: &TempDir) -> bool {
    let (addition, removal) = read_staging_area(dir);
    addition.is_empty() && removal.is_empty()
}

pub fn file_exists(dir: &TempDir, file_name: &str) -> bool {
    dir.path().join(file_name).is_file()
}

pub fn read_working_file(dir: &TempDir, file_name: &str) -> String {
    let file_path = dir.path().join(file_name);
    std::fs::read_to_string(&file_path)
        .unwrap_or_else(|e| panic!("Failed to read working file {:?}: {}", file_path, e))
}

/// List the blob fingerprints currently in the store
pub fn list_store(dir: &TempDir, store: &str) -> Vec<String> {
    let store_path: &Path = &dir.path().join(".gitlet").join(store);
    let mut names = std::fs::read_dir(store_path)
        .unwrap_or_else(|e| panic!("Failed to read store {:?}: {}", store_path, e))
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect::<Vec<_>>();
    names.sort();
    names
}
