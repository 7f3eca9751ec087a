//! # dirtree CLI List Integration Tests
//!
//! File: cli/tests/list.rs
//!
//! Runs `dirtree list` against temporary directory fixtures and checks the
//! exact tree text on stdout.
//!
mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_list_reference_tree() {
    let temp = tempdir().expect("Failed to create temp dir");
    write_reference_tree(temp.path());

    dirtree_cmd()
        .current_dir(temp.path())
        .args(["list", "myDirectory"])
        .assert()
        .success()
        .stdout(REFERENCE_OUTPUT);
}

#[test]
fn test_ls_alias_with_root_flag() {
    let temp = tempdir().expect("Failed to create temp dir");
    write_reference_tree(temp.path());
    let elsewhere = tempdir().expect("Failed to create temp dir");

    dirtree_cmd()
        .current_dir(elsewhere.path())
        .args(["ls", "myDirectory", "--root"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(REFERENCE_OUTPUT);
}

#[test]
fn test_list_missing_path_prints_message() {
    let temp = tempdir().expect("Failed to create temp dir");

    dirtree_cmd()
        .current_dir(temp.path())
        .args(["list", "no/such/dir"])
        .assert()
        .success()
        .stdout("File not found: no/such/dir\n");
}

#[test]
fn test_list_file_prints_directory_not_found() {
    let temp = tempdir().expect("Failed to create temp dir");
    fs::write(temp.path().join("notes.txt"), "hi").unwrap();

    dirtree_cmd()
        .current_dir(temp.path())
        .args(["list", "notes.txt"])
        .assert()
        .success()
        .stdout("Directory not found: notes.txt\n");
}

#[test]
fn test_list_skips_metadata_ignored_binary_and_generated() {
    let temp = tempdir().expect("Failed to create temp dir");
    let project = temp.path().join("project");
    fs::create_dir_all(project.join(".git/refs")).unwrap();
    fs::write(project.join(".git/HEAD"), "ref").unwrap();
    fs::create_dir_all(project.join("dist/assets")).unwrap();
    fs::write(project.join("dist/assets/app.js"), "x").unwrap();
    fs::create_dir_all(project.join("src")).unwrap();
    fs::write(project.join("src/main.rs"), "fn main() {}").unwrap();
    fs::write(project.join("src/icon.dat"), [0u8, 1, 2, 3]).unwrap();
    fs::write(project.join("src/0b7c9e4a-5d3f-4e21-9a8b-1c2d3e4f5a6b.json"), "{}").unwrap();
    fs::write(project.join(".gitignore"), "dist/\n").unwrap();

    // src files sorted: 0b7c...json (skipped), icon.dat (skipped), main.rs.
    dirtree_cmd()
        .current_dir(temp.path())
        .args(["list", "project"])
        .assert()
        .success()
        .stdout(
            "project/\n  └── .gitignore\n  ├── .git/\n  ├── dist/\n  └── src/\n    └── main.rs\n",
        );
}

#[test]
fn test_list_no_gitignore_flag() {
    let temp = tempdir().expect("Failed to create temp dir");
    fs::create_dir_all(temp.path().join("p/dist")).unwrap();
    fs::write(temp.path().join("p/dist/out.txt"), "x").unwrap();
    fs::write(temp.path().join("p/.gitignore"), "dist/\n").unwrap();

    dirtree_cmd()
        .current_dir(temp.path())
        .args(["list", "p", "--no-gitignore"])
        .assert()
        .success()
        .stdout(predicate::str::contains("    └── out.txt"));
}

#[test]
fn test_list_max_depth() {
    let temp = tempdir().expect("Failed to create temp dir");
    write_reference_tree(temp.path());

    dirtree_cmd()
        .current_dir(temp.path())
        .args(["list", "myDirectory", "--max-depth", "1"])
        .assert()
        .success()
        .stdout("myDirectory/\n  ├── file1.txt\n  └── file2.txt\n  └── subDirectory/\n");
}

#[test]
fn test_list_uses_config_file() {
    let temp = tempdir().expect("Failed to create temp dir");
    fs::create_dir_all(temp.path().join("repo/.hg")).unwrap();
    fs::write(temp.path().join("repo/.hg/store"), "x").unwrap();
    let config_file = temp.path().join("dirtree.toml");
    fs::write(&config_file, "[tree]\nmetadata_dir = \".hg\"\n").unwrap();

    dirtree_cmd()
        .current_dir(temp.path())
        .args(["list", "repo", "--config"])
        .arg(&config_file)
        .assert()
        .success()
        .stdout("repo/\n  └── .hg/\n");
}

#[test]
fn test_list_project_config_file_is_picked_up() {
    let temp = tempdir().expect("Failed to create temp dir");
    write_reference_tree(temp.path());
    fs::write(temp.path().join(".dirtree.toml"), "[tree]\nmax_depth = 1\n").unwrap();

    dirtree_cmd()
        .current_dir(temp.path())
        .args(["list", "myDirectory"])
        .assert()
        .success()
        .stdout(predicate::str::contains("file3.txt").not());
}

#[test]
fn test_invalid_config_fails() {
    let temp = tempdir().expect("Failed to create temp dir");
    let config_file = temp.path().join("bad.toml");
    fs::write(&config_file, "[tree]\nmetadata_dir = \"\"\n").unwrap();

    dirtree_cmd()
        .current_dir(temp.path())
        .args(["list", "."])
        .env("DIRTREE_CONFIG", &config_file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("metadata_dir must not be empty"));
}
