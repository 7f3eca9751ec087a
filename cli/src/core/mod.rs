//! # dirtree Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure used by every command:
//!
//! - `config`: configuration loading, merging and validation
//! - `error`: the `DirtreeError` enum and the crate-wide `Result` alias
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{DirtreeError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
