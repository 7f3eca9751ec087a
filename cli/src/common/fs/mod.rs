//! # dirtree Filesystem Host (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Everything dirtree needs from the local file system, packaged as
//! implementations of the capability traits in `tree::capability`:
//!
//! - **`binary`**: `ContentSniffer`, extension list + NUL-byte sniffing (`BinaryCheck`).
//! - **`ignore_status`**: `GitignoreStatus`, gitignore-driven ignore status (`StatusLookup`).
//! - **`project`**: `FsProject`, path resolution, directory enumeration and the
//!   read view (`ProjectContext`).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::common::fs::project::FsProject;
//! use crate::tree::execute::execute;
//!
//! let project = Arc::new(FsProject::new(Path::new("."), &config)?);
//! let text = execute(project, "src").await?;
//! ```
//!
pub mod binary;
pub mod ignore_status;
pub mod project;
