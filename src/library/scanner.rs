//! Library scanner: walks the root and classifies files by suffix.
//!
//! The scanner is the only component that touches directory structure. It
//! produces a [`LibraryIndex`]; everything downstream works from that.

use crate::error::CuratorError;
use crate::library::index::LibraryIndex;
use crate::library::paths::{canonicalize_root, normalize_rel};
use crate::types::{self, ContentKind};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Default patterns skipped during scans. Names without a `/` match any
/// path component; patterns with a `/` or wildcard match the relative path.
pub const DEFAULT_IGNORE: &[&str] = &[
    ".git",
    ".curator",
    "node_modules",
    "target",
    ".DS_Store",
    "*.swp",
    "*.tmp",
];

/// Scanner configuration.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub follow_symlinks: bool,
    /// Patterns to skip. See [`DEFAULT_IGNORE`] for matching semantics.
    pub ignore: Vec<String>,
    pub max_depth: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            ignore: DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect(),
            max_depth: None,
        }
    }
}

/// Walks a library root and builds the content index.
#[derive(Debug, Clone)]
pub struct Scanner {
    root: PathBuf,
    config: ScanConfig,
}

impl Scanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config: ScanConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    /// Walk the root and index every content file and manifest found.
    ///
    /// Entries are visited in filename order, so the same tree always
    /// produces the same index. Unreadable entries are skipped with a
    /// warning; only a missing root is fatal.
    pub fn scan(&self) -> Result<LibraryIndex, CuratorError> {
        let root = canonicalize_root(&self.root)?;
        let mut index = LibraryIndex::new();

        let mut walker = WalkDir::new(&root)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name();
        if let Some(depth) = self.config.max_depth {
            walker = walker.max_depth(depth);
        }

        let ignore = &self.config.ignore;
        let walk_root = root.clone();
        for entry in walker
            .into_iter()
            .filter_entry(move |e| e.depth() == 0 || !is_ignored_entry(e.path(), &walk_root, ignore))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("skipping unreadable entry: {e}");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let rel = entry.path().strip_prefix(&root).unwrap_or(entry.path());
            let rel_path = normalize_rel(&rel.to_string_lossy());
            let name = entry.file_name().to_string_lossy();

            if let Some(kind) = ContentKind::from_file_name(&name) {
                debug!(path = %rel_path, kind = %kind, "indexed content file");
                index.insert_content(rel_path, kind);
            } else if types::is_collection_manifest(&name) {
                debug!(path = %rel_path, "indexed collection manifest");
                index.insert_manifest(rel_path);
            }
        }

        Ok(index)
    }

    /// The root this scanner walks, as configured.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_ignored_entry(path: &Path, root: &Path, patterns: &[String]) -> bool {
    let rel = match path.strip_prefix(root) {
        Ok(rel) => rel,
        Err(_) => return false,
    };
    let rel_path = normalize_rel(&rel.to_string_lossy());
    is_ignored(&rel_path, patterns)
}

/// Whether a normalized relative path matches any ignore pattern.
///
/// A bare name (no `/`, no wildcard) matches when any path component equals
/// it. Anything else is treated as a glob against the full relative path and
/// against the final component.
pub(crate) fn is_ignored(rel_path: &str, patterns: &[String]) -> bool {
    let name = crate::library::paths::file_name(rel_path);

    for pattern in patterns {
        let is_bare = !pattern.contains('/') && !pattern.contains('*') && !pattern.contains('?');
        if is_bare {
            if rel_path.split('/').any(|component| component == pattern) {
                return true;
            }
            continue;
        }

        if let Ok(glob) = glob::Pattern::new(pattern) {
            if glob.matches(rel_path) || glob.matches(name) {
                return true;
            }
        }
    }

    false
}
