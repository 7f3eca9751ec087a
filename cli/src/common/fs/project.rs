//! # File-System Project Context
//!
//! File: cli/src/common/fs/project.rs
//!
//! ## Overview
//!
//! `FsProject` is the `ProjectContext` for a directory on the local disk. It
//! resolves listing paths against a base directory, enumerates directories
//! into `DirectoryNode` snapshots, and wires in the gitignore status lookup
//! and the content sniffer.
//!
//! ## Snapshot Rules
//!
//! - Entries are read with `fs::read_dir` and sorted by name, files and
//!   subdirectories separately, so listings are identical across platforms.
//! - Symbolic links are followed. A directory whose canonical path is one of
//!   its own ancestors is recorded without contents (cycle protection), with a
//!   warning. Two routes to the same directory that do not loop are both
//!   listed in full.
//! - Directories the renderer will exclude, and directories past the
//!   renderer's depth bound, are recorded without contents instead of being
//!   enumerated. The rendered text is the same either way.
//! - Entries that cannot be read are skipped with a warning; entries whose
//!   metadata cannot be read are listed as files.
//!
//! ## Read View
//!
//! Listings hold the shared side of a `std::sync::RwLock` for their whole
//! duration, from resolution to the last rendered line. The guard is released
//! on every return path. Acquiring it never needs a runtime, so
//! `list_directory` can be called from async and blocking code alike.
//!
use crate::common::fs::binary::ContentSniffer;
use crate::common::fs::ignore_status::GitignoreStatus;
use crate::core::config::Config;
use crate::core::error::{DirtreeError, Result};
use crate::tree::capability::{BinaryCheck, ProjectContext, ReportedBinary, Resolution, StatusLookup};
use crate::tree::model::{DirectoryNode, FileEntry};
use crate::tree::renderer::TreeRenderer;
use anyhow::{anyhow, Context};
use std::{
    collections::HashSet,
    fs,
    path::{self, Path, PathBuf},
    sync::{PoisonError, RwLock},
};
use tracing::{debug, warn};

/// A project rooted at a directory on the local file system.
#[derive(Debug)]
pub struct FsProject {
    base: PathBuf,
    renderer: TreeRenderer,
    max_depth: Option<usize>,
    status: GitignoreStatus,
    sniffer: ContentSniffer,
    view: RwLock<()>,
}

/// Entry collected from `read_dir` before sorting.
struct RawEntry {
    path: PathBuf,
    name: String,
    is_dir: bool,
}

impl FsProject {
    /// Creates a project for `base` using the settings in `config`.
    pub fn new(base: &Path, config: &Config) -> Result<Self> {
        let base = base
            .canonicalize()
            .with_context(|| format!("Failed to resolve project root '{}'", base.display()))?;
        if !base.is_dir() {
            return Err(anyhow!(DirtreeError::FileSystem(format!(
                "Project root '{}' is not a directory.",
                base.display()
            ))));
        }
        debug!("Opening project at {}", base.display());

        let renderer = TreeRenderer::new(config.tree.metadata_dir.clone())
            .with_max_depth(config.tree.max_depth);
        let status = GitignoreStatus::new(
            &base,
            config.tree.respect_gitignore,
            &config.tree.ignore_patterns,
        );
        Ok(Self {
            renderer,
            max_depth: config.tree.max_depth,
            status,
            sniffer: ContentSniffer::from_config(&config.binary),
            view: RwLock::new(()),
            base,
        })
    }

    /// Canonical base directory relative paths are resolved against.
    pub fn base(&self) -> &Path {
        &self.base
    }

    fn locate(&self, path: &str) -> PathBuf {
        let requested = Path::new(path);
        if requested.is_absolute() {
            requested.to_path_buf()
        } else {
            self.base.join(requested)
        }
    }

    fn snapshot(
        &self,
        path: &Path,
        name: String,
        depth: usize,
        ancestors: &mut HashSet<PathBuf>,
    ) -> DirectoryNode {
        let mut node = DirectoryNode::new(name, path);

        if self.renderer.is_excluded(&node.name, path, &self.status) {
            debug!("Not enumerating excluded directory {}", path.display());
            return node;
        }
        if depth > 0 && self.max_depth.is_some_and(|max| depth >= max) {
            return node;
        }

        let (mut files, mut dirs): (Vec<RawEntry>, Vec<RawEntry>) =
            read_entries(path).into_iter().partition(|entry| !entry.is_dir);
        files.sort_by(|a, b| a.name.cmp(&b.name));
        dirs.sort_by(|a, b| a.name.cmp(&b.name));

        for file in files {
            let is_binary = self.sniffer.classify(&file.path);
            let virtual_path = file.path.to_string_lossy().to_string();
            node.files.push(FileEntry::new(file.name, virtual_path, is_binary));
        }

        for dir in dirs {
            let canonical = match dir.path.canonicalize() {
                Ok(canonical) => Some(canonical),
                Err(e) => {
                    warn!(
                        "Could not canonicalize path '{}': {}. Skipping cycle check.",
                        dir.path.display(),
                        e
                    );
                    None
                }
            };
            if let Some(canonical) = &canonical {
                if !ancestors.insert(canonical.clone()) {
                    warn!(
                        "Detected symlink cycle at '{}'. Skipping subtree.",
                        dir.path.display()
                    );
                    node.subdirectories.push(DirectoryNode::new(dir.name, dir.path));
                    continue;
                }
            }
            let child = self.snapshot(&dir.path, dir.name, depth + 1, ancestors);
            if let Some(canonical) = &canonical {
                ancestors.remove(canonical);
            }
            node.subdirectories.push(child);
        }

        node
    }
}

/// Name shown on the root line. A file-system root such as `/` has no last
/// component, so its path is used without the trailing separator.
fn root_display_name(root: &Path) -> String {
    match root.file_name() {
        Some(name) => name.to_string_lossy().to_string(),
        None => root
            .to_string_lossy()
            .trim_end_matches(path::is_separator)
            .to_string(),
    }
}

/// Reads the immediate entries of `dir`. Never fails; problems are logged.
fn read_entries(dir: &Path) -> Vec<RawEntry> {
    let read_dir_iter = match fs::read_dir(dir) {
        Ok(iter) => iter,
        Err(e) => {
            warn!("Failed to read directory entries from '{}': {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut entries = Vec::new();
    for entry_result in read_dir_iter {
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                warn!(
                    "Failed to process directory entry in '{}': {}. Skipping.",
                    dir.display(),
                    e
                );
                continue;
            }
        };
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();

        // `fs::metadata` follows symlinks, so linked directories count as directories.
        let is_dir = match fs::metadata(&path) {
            Ok(metadata) => metadata.is_dir(),
            Err(e) => {
                warn!(
                    "Could not get metadata for '{}': {}. Assuming file.",
                    path.display(),
                    e
                );
                false
            }
        };
        entries.push(RawEntry { path, name, is_dir });
    }
    entries
}

impl ProjectContext for FsProject {
    fn resolve(&self, path: &str) -> Resolution {
        let located = self.locate(path);
        let metadata = match fs::metadata(&located) {
            Ok(metadata) => metadata,
            Err(e) => {
                debug!("'{}' did not resolve: {}", located.display(), e);
                return Resolution::Missing;
            }
        };
        if !metadata.is_dir() {
            return Resolution::NotADirectory;
        }

        let root = match located.canonicalize() {
            Ok(canonical) => canonical,
            Err(e) => {
                warn!("Could not canonicalize '{}': {}", located.display(), e);
                return Resolution::NotADirectory;
            }
        };
        let name = root_display_name(&root);

        let mut ancestors = HashSet::new();
        ancestors.insert(root.clone());
        Resolution::Directory(self.snapshot(&root, name, 0, &mut ancestors))
    }

    fn status(&self) -> &dyn StatusLookup {
        &self.status
    }

    fn binary(&self) -> &dyn BinaryCheck {
        // Classification already happened while snapshotting.
        &ReportedBinary
    }

    fn renderer(&self) -> &TreeRenderer {
        &self.renderer
    }

    fn with_read_view<R>(&self, f: impl FnOnce() -> R) -> R {
        let _view = self.view.read().unwrap_or_else(PoisonError::into_inner);
        f()
    }
}
