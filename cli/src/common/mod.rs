//! # dirtree Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared host-side utilities, kept apart from the command handlers
//! (`commands::`), the core infrastructure (`core::`) and the host-independent
//! renderer (`tree::`).
//!
//! - **`fs`**: the local file-system host (binary sniffing, gitignore status,
//!   `FsProject`).
//!
/// Local file-system implementations of the tree capabilities.
pub mod fs;
