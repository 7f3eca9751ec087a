//! # Generated-Cache Filenames
//!
//! File: cli/src/tree/pattern.rs
//!
//! Files named like a UUID followed by `.json` (optionally with an `@<hex>`
//! revision suffix) are tool-generated caches, e.g.
//! `f5086740-a1a1-491b-82c9-ab065a9d1754.json` or
//! `F5086740-A1A1-491B-82C9-AB065A9D1754@3fa2.json`. They are left out of
//! listings regardless of their content type.
//!
use once_cell::sync::Lazy;
use regex::Regex;

/// 8-4-4-4-12 hex groups, optional `@<hex>`, mandatory `.json`; whole name,
/// case-insensitive.
static GENERATED_CACHE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}(@[0-9a-f]+)?\.json$",
    )
    .expect("Invalid generated-cache filename regex")
});

/// Returns `true` when `name` looks like a generated cache file.
pub fn is_generated_cache_name(name: &str) -> bool {
    GENERATED_CACHE.is_match(name)
}
