//! # dirtree Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module handles loading, merging, validating and printing the dirtree
//! configuration. Settings control which directories are excluded from a
//! listing, how binary files are recognised, and where relative paths are
//! resolved from.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file passed with `--config` (or `DIRTREE_CONFIG`)
//! 2. Project-specific `.dirtree.toml` in the current directory or an ancestor
//! 3. User-specific `<config dir>/dirtree/config.toml`
//! 4. Default values defined in the code
//!
//! Each file is read as a partial `ConfigLayer`: a setting a file mentions
//! overrides every lower layer, even when it restates the built-in default.
//! Settings a file leaves out fall through. After merging, `~` in paths is
//! expanded and the result is validated.
//!
//! ## Examples
//!
//! ```toml
//! [tree]
//! root = "~/code/my-project"
//! metadata_dir = ".git"
//! respect_gitignore = true
//! ignore_patterns = ["*.log", "node_modules/"]
//! max_depth = 4
//!
//! [binary]
//! sniff_bytes = 8000
//! extensions = ["png", "jar"]
//! ```
//!
use crate::core::error::{DirtreeError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub tree: TreeConfig,
    #[serde(default)]
    pub binary: BinaryConfig,
}

/// Settings for tree traversal and directory exclusion.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TreeConfig {
    /// Base directory that relative listing paths are resolved against
    /// (can use ~). Defaults to the current working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    /// Directory name that is always excluded from listings.
    #[serde(default = "default_metadata_dir")]
    pub metadata_dir: String,
    /// Whether `.gitignore` files and `.git/info/exclude` mark paths as ignored.
    #[serde(default = "default_respect_gitignore")]
    pub respect_gitignore: bool,
    /// Extra gitignore-style patterns, matched relative to the project root.
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
    /// Deepest level that is descended into. `None` means unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

/// Settings for binary file classification.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BinaryConfig {
    /// Number of leading bytes inspected for a NUL byte.
    #[serde(default = "default_sniff_bytes")]
    pub sniff_bytes: usize,
    /// File extensions (without the dot, case-insensitive) that are always binary.
    #[serde(default = "default_binary_extensions")]
    pub extensions: Vec<String>,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            root: None,
            metadata_dir: default_metadata_dir(),
            respect_gitignore: default_respect_gitignore(),
            ignore_patterns: Vec::new(),
            max_depth: None,
        }
    }
}

impl Default for BinaryConfig {
    fn default() -> Self {
        Self {
            sniff_bytes: default_sniff_bytes(),
            extensions: default_binary_extensions(),
        }
    }
}

pub(crate) fn default_metadata_dir() -> String {
    ".git".to_string()
}
fn default_respect_gitignore() -> bool {
    true
}
fn default_sniff_bytes() -> usize {
    8000
}
fn default_binary_extensions() -> Vec<String> {
    [
        // Images
        "png", "jpg", "jpeg", "gif", "ico", "webp", "bmp", "tiff",
        // Fonts
        "woff", "woff2", "ttf", "eot", "otf",
        // Media
        "mp3", "mp4", "wav", "ogg", "webm", "avi", "mov", "flac",
        // Archives
        "zip", "tar", "gz", "rar", "7z", "bz2", "xz", "tgz",
        // Documents
        "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx",
        // Compiled
        "pyc", "pyo", "so", "dylib", "dll", "exe", "o", "a", "lib", "class", "jar", "war",
        // Misc
        "wasm", "bin", "db", "sqlite", "sqlite3",
    ]
    .iter()
    .map(|ext| ext.to_string())
    .collect()
}

/// One configuration file as written: only the settings it mentions are `Some`.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    #[serde(default)]
    pub tree: TreeLayer,
    #[serde(default)]
    pub binary: BinaryLayer,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TreeLayer {
    pub root: Option<String>,
    pub metadata_dir: Option<String>,
    pub respect_gitignore: Option<bool>,
    pub ignore_patterns: Option<Vec<String>>,
    pub max_depth: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BinaryLayer {
    pub sniff_bytes: Option<usize>,
    pub extensions: Option<Vec<String>>,
}

const PROJECT_CONFIG_FILENAME: &str = ".dirtree.toml";

/// Loads the merged, expanded and validated configuration.
///
/// `explicit` is the file given with `--config`; when set it must exist.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let explicit_config = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Some(load_config_from_path(path)?)
        }
        None => None,
    };

    let merged = merge_configs(Config::default(), user_config);
    let merged = merge_configs(merged, project_config);
    let mut merged = merge_configs(merged, explicit_config);
    expand_config_paths(&mut merged).context("Failed to expand paths in configuration")?;
    validate_config(&merged).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged);
    Ok(merged)
}

/// Renders a configuration as pretty-printed TOML.
pub fn to_toml(config: &Config) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize configuration to TOML")
}

fn load_user_config() -> Result<Option<ConfigLayer>> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "dirtree") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<ConfigLayer>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.dirtree.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` up to the filesystem root looking for `.dirtree.toml`.
/// The search stops at the first directory that contains a `.git` directory.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path: &Path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigLayer> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Overlays `overlay` on `base`. Every setting present in the overlay wins.
fn merge_configs(base: Config, overlay: Option<ConfigLayer>) -> Config {
    let overlay = match overlay {
        Some(o) => o,
        None => return base,
    };
    let mut merged = base;

    if let Some(root) = overlay.tree.root {
        merged.tree.root = Some(root);
    }
    if let Some(metadata_dir) = overlay.tree.metadata_dir {
        merged.tree.metadata_dir = metadata_dir;
    }
    if let Some(respect_gitignore) = overlay.tree.respect_gitignore {
        merged.tree.respect_gitignore = respect_gitignore;
    }
    if let Some(ignore_patterns) = overlay.tree.ignore_patterns {
        merged.tree.ignore_patterns = ignore_patterns;
    }
    if let Some(max_depth) = overlay.tree.max_depth {
        merged.tree.max_depth = Some(max_depth);
    }
    if let Some(sniff_bytes) = overlay.binary.sniff_bytes {
        merged.binary.sniff_bytes = sniff_bytes;
    }
    if let Some(extensions) = overlay.binary.extensions {
        merged.binary.extensions = extensions;
    }
    merged
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    if let Some(root) = config.tree.root.as_mut() {
        *root = shellexpand::tilde(root.as_str()).into_owned();
        debug!("Expanded tree root: {}", root);
    }
    Ok(())
}

/// Checks a (merged, expanded) configuration for invalid settings.
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    let metadata_dir = &config.tree.metadata_dir;
    if metadata_dir.is_empty() {
        return Err(anyhow!(DirtreeError::Config(
            "tree.metadata_dir must not be empty.".to_string()
        )));
    }
    if metadata_dir.contains('/') || metadata_dir.contains('\\') {
        return Err(anyhow!(DirtreeError::Config(format!(
            "tree.metadata_dir '{}' must be a single directory name, not a path.",
            metadata_dir
        ))));
    }
    if config.tree.max_depth == Some(0) {
        return Err(anyhow!(DirtreeError::Config(
            "tree.max_depth must be at least 1 when set.".to_string()
        )));
    }
    if config.binary.sniff_bytes == 0 {
        return Err(anyhow!(DirtreeError::Config(
            "binary.sniff_bytes must be greater than zero.".to_string()
        )));
    }
    if let Some(root) = &config.tree.root {
        let root_path = PathBuf::from(root);
        if !root_path.exists() {
            warn!("Configured tree root '{}' does not exist.", root_path.display());
        } else if !root_path.is_dir() {
            return Err(anyhow!(DirtreeError::Config(format!(
                "Configured tree root '{}' exists but is not a directory.",
                root_path.display()
            ))));
        }
    }
    Ok(())
}
