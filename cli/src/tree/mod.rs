//! # dirtree Tree Rendering
//!
//! File: cli/src/tree/mod.rs
//!
//! ## Overview
//!
//! The host-independent part of dirtree: snapshot types, the capability
//! traits a host implements, the generated-cache filename rule, the renderer
//! itself, and the `execute` operation that ties them together.
//!
//! ## Architecture
//!
//! - `model`: `DirectoryNode` / `FileEntry` snapshots
//! - `capability`: `StatusLookup`, `BinaryCheck`, `ProjectContext`
//! - `pattern`: generated-cache filename detection
//! - `renderer`: `TreeRenderer`, the depth-first tree text builder
//! - `execute`: background execution and lookup-failure reporting
//!
//! The local file-system host lives in `common::fs`.
//!
pub mod capability;
pub mod execute;
pub mod model;
pub mod pattern;
pub mod renderer;
