//! # dirtree Config Command
//!
//! File: cli/src/commands/config.rs
//!
//! Implements `dirtree config`, which prints the effective configuration
//! (all layers merged, paths expanded) as TOML. Handy for checking which
//! `.dirtree.toml` is in effect.
//!
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::path::Path;

/// Arguments for `dirtree config` (none yet).
#[derive(Parser, Debug)]
pub struct ConfigArgs {}

/// Handles `dirtree config`.
pub async fn handle_config(_args: ConfigArgs, config_path: Option<&Path>) -> Result<()> {
    let cfg = config::load_config(config_path).context("Failed to load dirtree configuration")?;
    print!("{}", config::to_toml(&cfg)?);
    Ok(())
}
