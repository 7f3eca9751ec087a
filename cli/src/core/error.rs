//! # dirtree Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout dirtree. It follows the
//! usual split between specific, matchable errors and flexible propagation:
//!
//! - `DirtreeError`: a `thiserror` enum for the domain errors.
//! - `Result<T>`: an alias for `anyhow::Result<T>` so call sites can attach
//!   context with `.context(...)` / `.with_context(...)`.
//!
//! The two lookup failures (`PathNotFound`, `DirectoryNotFound`) are special:
//! their `Display` text *is* the user-facing result of a listing. `execute`
//! turns them into the returned string rather than propagating them, so the
//! messages below are part of the observable output and must not change.
//!
//! ## Examples
//!
//! ```rust,ignore
//! let err = DirtreeError::PathNotFound { path: "src/missing".into() };
//! assert_eq!(err.to_string(), "File not found: src/missing");
//! ```
//!
use thiserror::Error;

/// Custom error type for the dirtree application.
#[derive(Error, Debug)]
pub enum DirtreeError {
    /// Nothing exists at the requested path.
    #[error("File not found: {path}")]
    PathNotFound { path: String },

    /// Something exists at the requested path, but it is not a directory.
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    /// The background render worker did not produce a result (it panicked or
    /// was aborted by the runtime).
    #[error("Render worker failed: {0}")]
    Worker(String),
}

impl DirtreeError {
    /// Returns `true` for the two lookup failures that are reported to callers
    /// as the listing's text rather than as an error.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            DirtreeError::PathNotFound { .. } | DirtreeError::DirectoryNotFound { .. }
        )
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
