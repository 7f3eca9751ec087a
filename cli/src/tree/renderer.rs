//! # Directory Tree Renderer
//!
//! File: cli/src/tree/renderer.rs
//!
//! ## Overview
//!
//! Turns a `DirectoryNode` snapshot into indentation-based tree text:
//!
//! ```text
//! myDirectory/
//!   ├── file1.txt
//!   └── file2.txt
//!   └── subDirectory/
//!     └── file3.txt
//! ```
//!
//! ## Rules
//!
//! - The root line is `<name>/` with no indentation. Every other line is two
//!   spaces per depth level, a connector, and the entry name (`/` appended for
//!   directories).
//! - Within a directory, files come first, then subdirectories, each group in
//!   snapshot order.
//! - The last entry of each group uses `└── `, every other entry `├── `.
//!   "Last" is decided against the unfiltered group, so when trailing files
//!   are skipped no surviving file gets the terminal connector.
//! - Binary files and generated-cache files (see `pattern`) are skipped.
//! - An excluded directory (the metadata directory, or a path the status
//!   lookup reports as ignored) renders none of its contents. Its header line
//!   is still written by its parent.
//!
//! Rendering never fails and never touches the file system; the snapshot is
//! the only input.
//!
use crate::tree::capability::{BinaryCheck, StatusLookup};
use crate::tree::model::DirectoryNode;
use crate::tree::pattern::is_generated_cache_name;
use std::path::Path;
use tracing::debug;

/// Connector for intermediate entries of a group.
const TEE: &str = "├── ";
/// Connector for the last entry of a group.
const ELBOW: &str = "└── ";
/// Indentation added per depth level.
const INDENT: &str = "  ";

/// Renders directory snapshots as tree text.
#[derive(Debug, Clone)]
pub struct TreeRenderer {
    metadata_dir: String,
    max_depth: Option<usize>,
}

impl Default for TreeRenderer {
    fn default() -> Self {
        Self::new(crate::core::config::default_metadata_dir())
    }
}

/// Mutable state of one render call.
struct RenderState {
    lines: Vec<String>,
    depth: usize,
    skipped_binary: usize,
    skipped_generated: usize,
    excluded_dirs: usize,
}

impl RenderState {
    fn new(root_name: &str) -> Self {
        Self {
            lines: vec![format!("{}/", root_name)],
            depth: 1,
            skipped_binary: 0,
            skipped_generated: 0,
            excluded_dirs: 0,
        }
    }

    fn push_entry(&mut self, is_last: bool, label: &str) {
        let connector = if is_last { ELBOW } else { TEE };
        self.lines
            .push(format!("{}{}{}", INDENT.repeat(self.depth), connector, label));
    }

    fn finish(self) -> String {
        let mut output = self.lines.join("\n");
        output.push('\n');
        output
    }
}

impl TreeRenderer {
    /// Creates a renderer that always excludes directories named `metadata_dir`.
    pub fn new(metadata_dir: impl Into<String>) -> Self {
        Self {
            metadata_dir: metadata_dir.into(),
            max_depth: None,
        }
    }

    /// Stops descending below `max_depth`. Directories at that depth still get
    /// their header line.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Directory exclusion rule, shared with snapshot builders so they can skip
    /// enumerating directories whose contents would never be rendered.
    pub fn is_excluded(&self, name: &str, path: &Path, status: &dyn StatusLookup) -> bool {
        name == self.metadata_dir || status.is_ignored(path)
    }

    /// Renders `root` and everything below it.
    pub fn render(
        &self,
        root: &DirectoryNode,
        status: &dyn StatusLookup,
        binary: &dyn BinaryCheck,
    ) -> String {
        let mut state = RenderState::new(&root.name);
        self.visit(root, &mut state, status, binary);
        debug!(
            "Rendered '{}': {} lines, {} binary and {} generated files skipped, {} directories excluded",
            root.name,
            state.lines.len(),
            state.skipped_binary,
            state.skipped_generated,
            state.excluded_dirs
        );
        state.finish()
    }

    fn visit(
        &self,
        dir: &DirectoryNode,
        state: &mut RenderState,
        status: &dyn StatusLookup,
        binary: &dyn BinaryCheck,
    ) {
        if self.is_excluded(&dir.name, &dir.path, status) {
            debug!("Excluding contents of {}", dir.path.display());
            state.excluded_dirs += 1;
            return;
        }

        let file_count = dir.files.len();
        for (index, file) in dir.files.iter().enumerate() {
            if binary.is_binary(file) {
                debug!("Skipping binary file: {}", file.virtual_path);
                state.skipped_binary += 1;
                continue;
            }
            if is_generated_cache_name(&file.name) {
                debug!("Skipping generated cache file: {}", file.virtual_path);
                state.skipped_generated += 1;
                continue;
            }
            // Raw index: skipped trailing files still count as "after" this one.
            state.push_entry(index == file_count - 1, &file.name);
        }

        let dir_count = dir.subdirectories.len();
        for (index, subdirectory) in dir.subdirectories.iter().enumerate() {
            // Checks the parent, not `subdirectory`; the parent already passed
            // this test above, so it never skips. Child exclusion happens on
            // entry to the recursive call, after the header line is written.
            if self.is_excluded(&dir.name, &dir.path, status) {
                continue;
            }
            state.push_entry(
                index == dir_count - 1,
                &format!("{}/", subdirectory.name),
            );

            if self.max_depth.is_some_and(|max| state.depth >= max) {
                continue;
            }
            state.depth += 1;
            self.visit(subdirectory, state, status, binary);
            state.depth -= 1;
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::capability::ReportedBinary;
    use std::path::PathBuf;

    fn nothing_ignored(_: &Path) -> bool {
        false
    }

    fn render_default(root: &DirectoryNode) -> String {
        TreeRenderer::default().render(root, &nothing_ignored, &ReportedBinary)
    }

    fn reference_tree() -> DirectoryNode {
        let root = DirectoryNode::new("myDirectory", "/project/myDirectory");
        let sub = root.child("subDirectory").with_file("file3.txt");
        root.with_file("file1.txt")
            .with_file("file2.txt")
            .with_subdirectory(sub)
    }

    #[test]
    fn test_reference_output() {
        let expected = "myDirectory/\n  ├── file1.txt\n  └── file2.txt\n  └── subDirectory/\n    └── file3.txt\n";
        assert_eq!(render_default(&reference_tree()), expected);
    }

    #[test]
    fn test_empty_directory_renders_root_only() {
        let root = DirectoryNode::new("empty", "/empty");
        assert_eq!(render_default(&root), "empty/\n");
    }

    #[test]
    fn test_line_count_and_indentation_match_depth() {
        let root = DirectoryNode::new("r", "/r");
        let c = root.child("a").child("b").child("c").with_file("deep.txt");
        let b = root.child("a").child("b").with_file("mid.txt").with_subdirectory(c);
        let a = root.child("a").with_file("one.txt").with_file("two.txt").with_subdirectory(b);
        let root = root.with_file("top.txt").with_subdirectory(a);

        let output = render_default(&root);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), root.entry_count() + 1);

        let expected_depths = [
            ("top.txt", 1),
            ("a/", 1),
            ("one.txt", 2),
            ("two.txt", 2),
            ("b/", 2),
            ("mid.txt", 3),
            ("c/", 3),
            ("deep.txt", 4),
        ];
        for (line, (name, depth)) in lines[1..].iter().zip(expected_depths) {
            assert!(line.ends_with(name), "line {:?} should be {}", line, name);
            let indent = line.len() - line.trim_start_matches(' ').len();
            assert_eq!(indent, depth * 2, "wrong indentation for {}", name);
        }
    }

    #[test]
    fn test_files_listed_before_subdirectories_in_snapshot_order() {
        let root = DirectoryNode::new("r", "/r");
        let zeta = root.child("zeta");
        let alpha = root.child("alpha");
        let root = root
            .with_subdirectory(zeta)
            .with_subdirectory(alpha)
            .with_file("z.txt")
            .with_file("a.txt");

        assert_eq!(
            render_default(&root),
            "r/\n  ├── z.txt\n  └── a.txt\n  ├── zeta/\n  └── alpha/\n"
        );
    }

    #[test]
    fn test_connector_uses_raw_index_when_trailing_file_skipped() {
        // The skipped binary is the raw last file, so neither surviving file
        // gets the terminal connector.
        let root = DirectoryNode::new("r", "/r")
            .with_file("a.txt")
            .with_file("b.txt")
            .with_binary_file("c.png");
        assert_eq!(render_default(&root), "r/\n  ├── a.txt\n  ├── b.txt\n");
    }

    #[test]
    fn test_connector_uses_raw_index_when_middle_file_skipped() {
        let root = DirectoryNode::new("r", "/r")
            .with_file("a.txt")
            .with_file("f5086740-a1a1-491b-82c9-ab065a9d1754.json")
            .with_file("b.txt");
        assert_eq!(render_default(&root), "r/\n  ├── a.txt\n  └── b.txt\n");
    }

    #[test]
    fn test_generated_cache_files_skipped_case_insensitively() {
        let root = DirectoryNode::new("r", "/r")
            .with_file("f5086740-a1a1-491b-82c9-ab065a9d1754.json")
            .with_file("F5086740-A1A1-491B-82C9-AB065A9D1754@a1b2.JSON")
            .with_file("notes.json");
        let output = render_default(&root);
        assert!(!output.contains("f5086740"));
        assert!(!output.to_lowercase().contains("ab065a9d1754"));
        assert_eq!(output, "r/\n  └── notes.json\n");
    }

    #[test]
    fn test_binary_check_capability_overrides_entry_flag() {
        let root = DirectoryNode::new("r", "/r")
            .with_file("image.svg")
            .with_file("main.rs");
        let svg_is_binary = |file: &crate::tree::model::FileEntry| file.name.ends_with(".svg");
        let output = TreeRenderer::default().render(&root, &nothing_ignored, &svg_is_binary);
        assert_eq!(output, "r/\n  └── main.rs\n");
    }

    #[test]
    fn test_metadata_directory_omitted_with_descendants() {
        let root = DirectoryNode::new("r", "/r");
        let git = root.child(".git").with_file("HEAD").with_subdirectory(
            root.child(".git").child("objects").with_file("pack"),
        );
        let src = root.child("src").with_file("main.rs");
        let root = root.with_subdirectory(git).with_subdirectory(src);

        let output = render_default(&root);
        assert!(!output.contains("HEAD"));
        assert!(!output.contains("objects"));
        assert!(output.contains("src/"));
        assert!(output.contains("main.rs"));
    }

    #[test]
    fn test_metadata_directory_header_still_written_by_parent() {
        // The exclusion re-check before a subdirectory's header line tests the
        // parent rather than the child, so an excluded child keeps its header.
        // Only its descendants disappear.
        let root = DirectoryNode::new("r", "/r");
        let git = root.child(".git").with_file("HEAD");
        let root = root.with_subdirectory(git);
        assert_eq!(render_default(&root), "r/\n  └── .git/\n");
    }

    #[test]
    fn test_ignored_directory_keeps_header_but_loses_descendants() {
        let root = DirectoryNode::new("r", "/r");
        let target = root
            .child("target")
            .with_file("build.log")
            .with_subdirectory(root.child("target").child("debug").with_file("app"));
        let src = root.child("src").with_file("lib.rs");
        let root = root.with_subdirectory(target).with_subdirectory(src);

        let ignored = [PathBuf::from("/r/target")];
        let status = |path: &Path| ignored.iter().any(|p| p == path);
        let output = TreeRenderer::default().render(&root, &status, &ReportedBinary);

        assert_eq!(
            output,
            "r/\n  ├── target/\n  └── src/\n    └── lib.rs\n"
        );
    }

    #[test]
    fn test_excluded_root_renders_only_root_line() {
        let root = DirectoryNode::new(".git", "/r/.git").with_file("HEAD");
        assert_eq!(render_default(&root), ".git/\n");
    }

    #[test]
    fn test_custom_metadata_dir() {
        let root = DirectoryNode::new("r", "/r");
        let hg = root.child(".hg").with_file("store");
        let git = root.child(".git").with_file("HEAD");
        let root = root.with_subdirectory(hg).with_subdirectory(git);

        let output = TreeRenderer::new(".hg").render(&root, &nothing_ignored, &ReportedBinary);
        assert_eq!(output, "r/\n  ├── .hg/\n  └── .git/\n    └── HEAD\n");
    }

    #[test]
    fn test_max_depth_stops_descent() {
        let output = TreeRenderer::default()
            .with_max_depth(Some(1))
            .render(&reference_tree(), &nothing_ignored, &ReportedBinary);
        assert_eq!(
            output,
            "myDirectory/\n  ├── file1.txt\n  └── file2.txt\n  └── subDirectory/\n"
        );
    }

    #[test]
    fn test_render_does_not_mutate_snapshot() {
        let root = reference_tree();
        let before = root.clone();
        let first = render_default(&root);
        let second = render_default(&root);
        assert_eq!(root, before);
        assert_eq!(first, second);
    }
}
