//! # dirtree Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Aggregates the top-level commands of the dirtree CLI. Each command defines
//! its own Clap arguments struct and an async handler that `main.rs` routes to.
//!
//! - `list`: render a directory listing
//! - `config`: print the effective configuration
//!

/// `dirtree config`: prints the merged configuration as TOML.
pub mod config;
/// `dirtree list <PATH>`: prints the tree listing of a directory.
pub mod list;
