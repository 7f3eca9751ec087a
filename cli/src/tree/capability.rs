//! # Host Capabilities
//!
//! File: cli/src/tree/capability.rs
//!
//! ## Overview
//!
//! The renderer does not talk to a file system, a VCS, or a content-type
//! database directly. Everything it needs from its host is expressed as one
//! of the traits below:
//!
//! - `StatusLookup`: is this directory path marked as ignored?
//! - `BinaryCheck`: is this file's content binary?
//! - `ProjectContext`: resolves a path string to a `DirectoryNode` snapshot
//!   (enumerating directories on the way), owns the two capabilities above
//!   and the renderer settings, and provides a scoped read view that keeps
//!   the snapshot consistent.
//!
//! `StatusLookup` and `BinaryCheck` are implemented for plain closures, which
//! keeps tests short:
//!
//! ```rust,ignore
//! let nothing_ignored = |_: &Path| false;
//! let render = renderer.render(&root, &nothing_ignored, &ReportedBinary);
//! ```
//!
use crate::tree::model::{DirectoryNode, FileEntry};
use crate::tree::renderer::TreeRenderer;
use std::path::Path;

/// Answers whether a directory is ignored by the host's status tracking
/// (for example, matched by a `.gitignore` rule).
pub trait StatusLookup {
    fn is_ignored(&self, path: &Path) -> bool;
}

impl<F> StatusLookup for F
where
    F: Fn(&Path) -> bool,
{
    fn is_ignored(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Classifies a file's content as binary or not.
pub trait BinaryCheck {
    fn is_binary(&self, file: &FileEntry) -> bool;
}

impl<F> BinaryCheck for F
where
    F: Fn(&FileEntry) -> bool,
{
    fn is_binary(&self, file: &FileEntry) -> bool {
        self(file)
    }
}

/// Trusts the classification recorded on the entry when the snapshot was
/// built.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportedBinary;

impl BinaryCheck for ReportedBinary {
    fn is_binary(&self, file: &FileEntry) -> bool {
        file.is_binary
    }
}

/// Outcome of resolving a path string inside a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing exists at the path.
    Missing,
    /// Something exists at the path, but it cannot be traversed as a directory.
    NotADirectory,
    /// The path is a directory; the snapshot is ready for rendering.
    Directory(DirectoryNode),
}

/// The host a listing runs against.
///
/// Implementations must be shareable with the background worker that
/// `execute` spawns, hence `Send + Sync`.
pub trait ProjectContext: Send + Sync {
    /// Resolves a project-relative or absolute path and snapshots the
    /// directory found there.
    fn resolve(&self, path: &str) -> Resolution;

    /// Ignore-status capability used for directory exclusion.
    fn status(&self) -> &dyn StatusLookup;

    /// Binary classification capability used for file skipping.
    fn binary(&self) -> &dyn BinaryCheck;

    /// Renderer configured with the same exclusion settings the snapshots
    /// were built with.
    fn renderer(&self) -> &TreeRenderer;

    /// Runs `f` while holding a consistent read view of the project. The view
    /// is released when `f` returns, whatever it returns.
    fn with_read_view<R>(&self, f: impl FnOnce() -> R) -> R;
}
