//! # Listing Execution
//!
//! File: cli/src/tree/execute.rs
//!
//! ## Overview
//!
//! `execute` is the single operation callers use: give it a project context and
//! a path, get back the listing text. Resolution and rendering run on a
//! blocking worker (`tokio::task::spawn_blocking`) inside the context's read
//! view; the caller awaits the worker's one result. There is no cancellation.
//!
//! Lookup failures are not errors from the caller's point of view. They come
//! back as the listing text:
//!
//! - `File not found: <path>` when nothing exists at the path
//! - `Directory not found: <path>` when the path is not a directory
//!
//! Callers that need to tell these apart from a tree can use `list_directory`,
//! which returns them as `DirtreeError` values instead.
//!
use crate::core::error::{DirtreeError, Result};
use crate::tree::capability::{ProjectContext, Resolution};
use anyhow::anyhow;
use std::sync::Arc;
use tracing::{debug, info};

/// Resolves `path` in `context` and renders it on a background worker.
///
/// Returns `Err` only when the worker itself fails (for example, it panicked).
pub async fn execute<C>(context: Arc<C>, path: impl Into<String>) -> Result<String>
where
    C: ProjectContext + 'static,
{
    let path = path.into();
    debug!("Submitting listing of '{}' to render worker", path);

    let worker = tokio::task::spawn_blocking(move || list_directory(context.as_ref(), &path));
    let outcome = worker
        .await
        .map_err(|e| anyhow!(DirtreeError::Worker(e.to_string())))?;

    match outcome {
        Ok(tree) => Ok(tree),
        Err(failure) if failure.is_lookup_failure() => {
            info!("{}", failure);
            Ok(failure.to_string())
        }
        Err(other) => Err(anyhow!(other)),
    }
}

/// Synchronous listing with structured lookup failures. Holds the context's
/// read view for the whole resolution and traversal.
pub fn list_directory<C>(context: &C, path: &str) -> std::result::Result<String, DirtreeError>
where
    C: ProjectContext,
{
    context.with_read_view(|| match context.resolve(path) {
        Resolution::Missing => Err(DirtreeError::PathNotFound {
            path: path.to_string(),
        }),
        Resolution::NotADirectory => Err(DirtreeError::DirectoryNotFound {
            path: path.to_string(),
        }),
        Resolution::Directory(root) => {
            Ok(context
                .renderer()
                .render(&root, context.status(), context.binary()))
        }
    })
}
