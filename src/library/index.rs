//! In-memory index of a scanned library.

use crate::library::paths::normalize_rel;
use crate::types::ContentKind;
use std::collections::BTreeMap;

/// Maps library-relative content paths to their inferred kinds and holds the
/// manifest inventory. This is the ground truth the collection resolver
/// checks references against.
///
/// Keys are normalized paths; iteration order is lexicographic, which keeps
/// every downstream report deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryIndex {
    entries: BTreeMap<String, ContentKind>,
    manifests: Vec<String>,
}

impl LibraryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert_content(&mut self, path: String, kind: ContentKind) {
        self.entries.insert(path, kind);
    }

    pub(crate) fn insert_manifest(&mut self, path: String) {
        self.manifests.push(path);
        self.manifests.sort();
    }

    /// Kind of the content file at `path`, normalizing the same way the
    /// scanner does. `None` when the library has no such file.
    pub fn kind_of(&self, path: &str) -> Option<ContentKind> {
        self.entries.get(&normalize_rel(path)).copied()
    }

    /// Whether the library contains a content file at `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(&normalize_rel(path))
    }

    /// All content paths with their kinds, in path order.
    pub fn content_paths(&self) -> impl Iterator<Item = (&str, ContentKind)> {
        self.entries.iter().map(|(p, k)| (p.as_str(), *k))
    }

    /// Content paths of one kind, in path order.
    pub fn paths_of_kind(&self, kind: ContentKind) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, k)| **k == kind)
            .map(|(p, _)| p.as_str())
            .collect()
    }

    /// Manifest paths, sorted.
    pub fn manifest_paths(&self) -> &[String] {
        &self.manifests
    }

    pub fn count_of(&self, kind: ContentKind) -> usize {
        self.entries.values().filter(|k| **k == kind).count()
    }

    pub fn content_len(&self) -> usize {
        self.entries.len()
    }

    pub fn manifest_len(&self) -> usize {
        self.manifests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.manifests.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LibraryIndex {
        let mut index = LibraryIndex::new();
        index.insert_content("prompts/sql.prompt.md".to_string(), ContentKind::Prompt);
        index.insert_content("agents/eng.agent.md".to_string(), ContentKind::Agent);
        index.insert_manifest("kits/base.collection.yml".to_string());
        index
    }

    #[test]
    fn lookup_normalizes_references() {
        let index = sample();
        assert_eq!(
            index.kind_of("./prompts/sql.prompt.md"),
            Some(ContentKind::Prompt)
        );
        assert_eq!(
            index.kind_of("prompts\\sql.prompt.md"),
            Some(ContentKind::Prompt)
        );
        assert_eq!(index.kind_of("prompts/other.prompt.md"), None);
    }

    #[test]
    fn counts_by_kind() {
        let index = sample();
        assert_eq!(index.count_of(ContentKind::Prompt), 1);
        assert_eq!(index.count_of(ContentKind::Instruction), 0);
        assert_eq!(index.content_len(), 2);
        assert_eq!(index.manifest_len(), 1);
    }

    #[test]
    fn iteration_is_path_ordered() {
        let index = sample();
        let paths: Vec<&str> = index.content_paths().map(|(p, _)| p).collect();
        assert_eq!(paths, vec!["agents/eng.agent.md", "prompts/sql.prompt.md"]);
    }
}
