//! # Directory Snapshot Model
//!
//! File: cli/src/tree/model.rs
//!
//! Read-only snapshot types handed to the renderer. A snapshot is built once
//! per listing by a `ProjectContext` and dropped when the listing returns.
//! Entry order is whatever the enumerating context reported; the renderer
//! never re-sorts.
//!
use std::path::PathBuf;

/// A single file inside a `DirectoryNode`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Display name (last path component).
    pub name: String,
    /// Whether the enumerating context classified the content as binary.
    pub is_binary: bool,
    /// Opaque identifier of the file within its host (for the file-system
    /// host: the full path as a string).
    pub virtual_path: String,
}

impl FileEntry {
    pub fn new(name: impl Into<String>, virtual_path: impl Into<String>, is_binary: bool) -> Self {
        Self {
            name: name.into(),
            is_binary,
            virtual_path: virtual_path.into(),
        }
    }
}

/// A directory and its immediate contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryNode {
    /// Display name (last path component).
    pub name: String,
    /// File-system path, used for ignore-status lookups.
    pub path: PathBuf,
    pub files: Vec<FileEntry>,
    pub subdirectories: Vec<DirectoryNode>,
}

impl DirectoryNode {
    /// Creates an empty directory node.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            files: Vec::new(),
            subdirectories: Vec::new(),
        }
    }
}

/// Snapshot construction helpers for tests.
#[cfg(test)]
impl DirectoryNode {
    /// Builder-style helper: appends a text (non-binary) file whose virtual
    /// path is derived from this node's path.
    pub fn with_file(mut self, name: &str) -> Self {
        let virtual_path = self.path.join(name).to_string_lossy().to_string();
        self.files.push(FileEntry::new(name, virtual_path, false));
        self
    }

    /// Builder-style helper: appends a file flagged as binary.
    pub fn with_binary_file(mut self, name: &str) -> Self {
        let virtual_path = self.path.join(name).to_string_lossy().to_string();
        self.files.push(FileEntry::new(name, virtual_path, true));
        self
    }

    /// Builder-style helper: appends a subdirectory.
    pub fn with_subdirectory(mut self, child: DirectoryNode) -> Self {
        self.subdirectories.push(child);
        self
    }

    /// Creates a child node whose path is nested under this node's path.
    pub fn child(&self, name: &str) -> DirectoryNode {
        DirectoryNode::new(name, self.path.join(name))
    }

    /// Total number of files and directories below this node (the node itself
    /// is not counted).
    pub fn entry_count(&self) -> usize {
        self.files.len()
            + self
                .subdirectories
                .iter()
                .map(|sub| 1 + sub.entry_count())
                .sum::<usize>()
    }
}
