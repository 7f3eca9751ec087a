//! # Binary Content Detection
//!
//! File: cli/src/common/fs/binary.rs
//!
//! Classifies files on disk as binary. A file is binary when its extension is
//! in the configured list, or when a NUL byte appears in its first
//! `sniff_bytes` bytes. Unreadable files are treated as text so they still
//! show up in listings.
//!
use crate::core::config::BinaryConfig;
use std::{
    collections::HashSet,
    fs::File,
    io::{self, Read},
    path::Path,
};
use tracing::{debug, warn};

/// Extension list + NUL-byte sniffing classifier.
#[derive(Debug, Clone)]
pub struct ContentSniffer {
    sniff_bytes: usize,
    extensions: HashSet<String>,
}

impl ContentSniffer {
    pub fn new(sniff_bytes: usize, extensions: impl IntoIterator<Item = String>) -> Self {
        Self {
            sniff_bytes,
            extensions: extensions
                .into_iter()
                .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn from_config(config: &BinaryConfig) -> Self {
        Self::new(config.sniff_bytes, config.extensions.iter().cloned())
    }

    /// Classifies the file at `path`.
    pub fn classify(&self, path: &Path) -> bool {
        let known_binary_extension = path
            .extension()
            .map(|ext| self.extensions.contains(&ext.to_string_lossy().to_ascii_lowercase()))
            .unwrap_or(false);
        if known_binary_extension {
            return true;
        }

        match self.contains_nul(path) {
            Ok(found) => found,
            Err(e) => {
                warn!(
                    "Could not read '{}' for binary detection: {}. Assuming text.",
                    path.display(),
                    e
                );
                false
            }
        }
    }

    fn contains_nul(&self, path: &Path) -> io::Result<bool> {
        let mut head = Vec::with_capacity(self.sniff_bytes.min(64 * 1024));
        File::open(path)?
            .take(self.sniff_bytes as u64)
            .read_to_end(&mut head)?;
        let found = head.contains(&0);
        if found {
            debug!("NUL byte found in first {} bytes of {}", head.len(), path.display());
        }
        Ok(found)
    }
}
