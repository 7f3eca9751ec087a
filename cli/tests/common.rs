//! # dirtree CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files. Each `.rs` file in
//! `cli/tests/` is compiled as its own test crate and runs the compiled
//! `dirtree` binary.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;

/// Creates an `assert_cmd::Command` for the compiled `dirtree` binary, with
/// any inherited `DIRTREE_CONFIG` removed so tests see only their own settings.
pub fn dirtree_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dirtree").expect("Failed to find dirtree binary for testing");
    cmd.env_remove("DIRTREE_CONFIG");
    cmd
}

/// Writes `myDirectory/{file1.txt,file2.txt,subDirectory/file3.txt}` under `root`.
pub fn write_reference_tree(root: &Path) {
    let my_dir = root.join("myDirectory");
    fs::create_dir_all(my_dir.join("subDirectory")).expect("create fixture dirs");
    fs::write(my_dir.join("file1.txt"), "one").expect("write file1");
    fs::write(my_dir.join("file2.txt"), "two").expect("write file2");
    fs::write(my_dir.join("subDirectory/file3.txt"), "three").expect("write file3");
}

/// Expected listing of `write_reference_tree`.
pub const REFERENCE_OUTPUT: &str =
    "myDirectory/\n  ├── file1.txt\n  └── file2.txt\n  └── subDirectory/\n    └── file3.txt\n";
