//! # gitignore-Based Ignore Status
//!
//! File: cli/src/common/fs/ignore_status.rs
//!
//! ## Overview
//!
//! Answers "is this directory ignored?" for paths inside a project root using
//! the `ignore` crate's gitignore matcher. Rules come from, in order of
//! precedence:
//!
//! 1. `.gitignore` files in the directory's ancestors, deepest first
//! 2. `<root>/.git/info/exclude`
//! 3. Extra patterns from the configuration (`tree.ignore_patterns`)
//!
//! The first rule set with an opinion wins; a `!pattern` whitelist stops the
//! search. Per-directory matchers are parsed lazily and cached for the
//! lifetime of the lookup.
//!
use crate::tree::capability::StatusLookup;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use ignore::Match;
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};
use tracing::{debug, warn};

/// Ignore-status lookup backed by gitignore files.
#[derive(Debug)]
pub struct GitignoreStatus {
    root: PathBuf,
    respect_gitignore: bool,
    exclude: Option<Gitignore>,
    extra: Option<Gitignore>,
    per_directory: Mutex<HashMap<PathBuf, Option<Arc<Gitignore>>>>,
}

impl GitignoreStatus {
    /// Creates a lookup for `root`. When `respect_gitignore` is false only the
    /// `extra_patterns` are consulted.
    pub fn new(root: &Path, respect_gitignore: bool, extra_patterns: &[String]) -> Self {
        let exclude = if respect_gitignore {
            load_exclude_file(root)
        } else {
            None
        };
        Self {
            root: root.to_path_buf(),
            respect_gitignore,
            exclude,
            extra: build_extra_patterns(root, extra_patterns),
            per_directory: Mutex::new(HashMap::new()),
        }
    }

    fn matcher_for(&self, dir: &Path) -> Option<Arc<Gitignore>> {
        let mut cache = self
            .per_directory
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        cache
            .entry(dir.to_path_buf())
            .or_insert_with(|| load_gitignore(dir))
            .clone()
    }
}

impl StatusLookup for GitignoreStatus {
    fn is_ignored(&self, path: &Path) -> bool {
        if path == self.root || !path.starts_with(&self.root) {
            return false;
        }

        if self.respect_gitignore {
            for dir in path.ancestors().skip(1) {
                if !dir.starts_with(&self.root) {
                    break;
                }
                if let Some(matcher) = self.matcher_for(dir) {
                    match matcher.matched_path_or_any_parents(path, true) {
                        Match::Ignore(glob) => {
                            debug!(
                                "{} ignored by {}/.gitignore ({})",
                                path.display(),
                                dir.display(),
                                glob.original()
                            );
                            return true;
                        }
                        Match::Whitelist(_) => return false,
                        Match::None => {}
                    }
                }
            }
        }

        for matcher in self.exclude.iter().chain(self.extra.iter()) {
            match matcher.matched_path_or_any_parents(path, true) {
                Match::Ignore(_) => return true,
                Match::Whitelist(_) => return false,
                Match::None => {}
            }
        }
        false
    }
}

fn load_gitignore(dir: &Path) -> Option<Arc<Gitignore>> {
    let file = dir.join(".gitignore");
    if !file.is_file() {
        return None;
    }
    let (matcher, err) = Gitignore::new(&file);
    if let Some(e) = err {
        warn!("Problem reading '{}': {}", file.display(), e);
    }
    if matcher.is_empty() {
        None
    } else {
        Some(Arc::new(matcher))
    }
}

fn load_exclude_file(root: &Path) -> Option<Gitignore> {
    let file = root.join(".git").join("info").join("exclude");
    if !file.is_file() {
        return None;
    }
    let mut builder = GitignoreBuilder::new(root);
    if let Some(e) = builder.add(&file) {
        warn!("Problem reading '{}': {}", file.display(), e);
    }
    finish(builder, &file.to_string_lossy())
}

fn build_extra_patterns(root: &Path, patterns: &[String]) -> Option<Gitignore> {
    if patterns.is_empty() {
        return None;
    }
    let mut builder = GitignoreBuilder::new(root);
    for pattern in patterns {
        if let Err(e) = builder.add_line(None, pattern) {
            warn!("Skipping invalid ignore pattern '{}': {}", pattern, e);
        }
    }
    finish(builder, "configured ignore_patterns")
}

fn finish(builder: GitignoreBuilder, source: &str) -> Option<Gitignore> {
    match builder.build() {
        Ok(matcher) if !matcher.is_empty() => Some(matcher),
        Ok(_) => None,
        Err(e) => {
            warn!("Could not build ignore rules from {}: {}", source, e);
            None
        }
    }
}
