//! # dirtree List Command
//!
//! File: cli/src/commands/list.rs
//!
//! ## Overview
//!
//! Implements `dirtree list <PATH>`: loads configuration, applies command-line
//! overrides, opens the project root and prints the listing produced by
//! `tree::execute::execute`.
//!
//! A path that does not exist, or is not a directory, is not treated as a
//! command failure: its message is printed in place of the tree and the
//! command exits successfully, the same way any other listing result is
//! reported.
//!
//! ## Examples
//!
//! ```bash
//! dirtree list src
//! dirtree ls . --max-depth 2
//! dirtree list /abs/path --root /abs --metadata-dir .hg --no-gitignore
//! ```
//!
use crate::common::fs::project::FsProject;
use crate::core::config::{self, Config};
use crate::core::error::Result;
use crate::tree::execute::execute;
use anyhow::Context;
use clap::Parser;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::{debug, info};

/// Arguments for `dirtree list`.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Directory to list, relative to the project root or absolute.
    path: String,

    /// Project root that relative paths are resolved against
    /// (defaults to `tree.root`, then the current directory).
    #[arg(long)]
    root: Option<PathBuf>,

    /// Directory name that is always excluded (default `.git`).
    #[arg(long)]
    metadata_dir: Option<String>,

    /// Stop descending below this depth.
    #[arg(long)]
    max_depth: Option<usize>,

    /// Do not consult `.gitignore` files or `.git/info/exclude`.
    #[arg(long)]
    no_gitignore: bool,
}

/// Handles `dirtree list`.
pub async fn handle_list(args: ListArgs, config_path: Option<&Path>) -> Result<()> {
    info!("Handling list command for '{}'...", args.path);

    let mut cfg = config::load_config(config_path).context("Failed to load dirtree configuration")?;
    apply_overrides(&mut cfg, &args);
    config::validate_config(&cfg).context("Invalid command-line options")?;

    let base = project_base(&args, &cfg)?;
    let project = Arc::new(FsProject::new(&base, &cfg)?);
    debug!("Project root: {}", project.base().display());

    let output = execute(project, args.path.clone()).await?;
    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
    Ok(())
}

/// Command-line flags take precedence over every configuration file.
fn apply_overrides(cfg: &mut Config, args: &ListArgs) {
    if let Some(metadata_dir) = &args.metadata_dir {
        cfg.tree.metadata_dir = metadata_dir.clone();
    }
    if args.max_depth.is_some() {
        cfg.tree.max_depth = args.max_depth;
    }
    if args.no_gitignore {
        cfg.tree.respect_gitignore = false;
    }
}

fn project_base(args: &ListArgs, cfg: &Config) -> Result<PathBuf> {
    if let Some(root) = &args.root {
        return Ok(root.clone());
    }
    if let Some(root) = &cfg.tree.root {
        return Ok(PathBuf::from(root));
    }
    std::env::current_dir().context("Failed to get current directory")
}
