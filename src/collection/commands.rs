//! Collection command service: single entry point per collection CLI command
//! variant.
//!
//! Owns collection workflow logic; CLI parses, calls one method per variant,
//! and formats output.

use crate::collection::manifest::CollectionManifest;
use crate::collection::resolver;
use crate::collection::validation::validate_manifest;
use crate::content::ContentFile;
use crate::error::CuratorError;
use crate::library::index::LibraryIndex;
use crate::library::paths::file_name;
use crate::types::ContentKind;
use crate::validate::report::{Issue, Severity};
use serde::Serialize;
use std::path::Path;

pub struct CollectionCommandService;

/// One row of collection list output.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionListItem {
    pub id: String,
    pub name: String,
    pub path: String,
    pub tags: Vec<String>,
    pub items: usize,
}

/// Result of collection list command.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionListResult {
    pub collections: Vec<CollectionListItem>,
    pub total: usize,
}

/// One resolved item enriched for display.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionItemView {
    pub path: String,
    pub kind: ContentKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Result of collection show command.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionShowResult {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub path: String,
    pub ordering: String,
    pub show_badge: bool,
    pub items: Vec<CollectionItemView>,
    /// Findings for items that did not resolve.
    pub issues: Vec<Issue>,
}

/// Result of validating one manifest.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionValidateResult {
    pub path: String,
    pub issues: Vec<Issue>,
    pub valid: bool,
}

impl CollectionCommandService {
    /// List every parseable manifest in the library. Manifests that fail to
    /// parse are skipped here; `validate` is the command that reports them.
    pub fn list(
        root: &Path,
        index: &LibraryIndex,
        tag: Option<&str>,
    ) -> Result<CollectionListResult, CuratorError> {
        let mut collections = Vec::new();

        for rel in index.manifest_paths() {
            let manifest = match CollectionManifest::load(&root.join(rel)) {
                Ok(m) => m,
                Err(e) => {
                    tracing::warn!(path = %rel, "skipping unparseable manifest: {e}");
                    continue;
                }
            };
            if let Some(tag) = tag {
                if !manifest.has_tag(tag) {
                    continue;
                }
            }
            collections.push(CollectionListItem {
                id: manifest.id,
                name: manifest.name,
                path: rel.clone(),
                tags: manifest.tags,
                items: manifest.items.len(),
            });
        }

        let total = collections.len();
        Ok(CollectionListResult { collections, total })
    }

    /// Show one collection, resolved against the index. `selector` is a
    /// collection id or a manifest path.
    pub fn show(
        root: &Path,
        index: &LibraryIndex,
        selector: &str,
    ) -> Result<CollectionShowResult, CuratorError> {
        let (rel, manifest) = Self::find(root, index, selector)?;
        let resolution = resolver::resolve(&manifest, index);

        let mut items = Vec::with_capacity(resolution.items.len());
        for resolved in &resolution.items {
            let description = ContentFile::load(root, &resolved.path, resolved.kind)
                .ok()
                .and_then(|f| f.description().map(str::to_string));
            items.push(CollectionItemView {
                path: resolved.path.clone(),
                kind: resolved.kind,
                description,
            });
        }

        // Ordering is a display hint; resolution order stays declared.
        if manifest.display.ordering == crate::collection::manifest::ItemOrdering::Alpha {
            items.sort_by(|a, b| a.path.cmp(&b.path));
        }

        Ok(CollectionShowResult {
            id: manifest.id,
            name: manifest.name,
            description: manifest.description,
            tags: manifest.tags,
            path: rel,
            ordering: manifest.display.ordering.as_str().to_string(),
            show_badge: manifest.display.show_badge,
            items,
            issues: resolution.issues,
        })
    }

    /// Validate one manifest by id or path.
    pub fn validate_single(
        root: &Path,
        index: &LibraryIndex,
        selector: &str,
    ) -> Result<CollectionValidateResult, CuratorError> {
        let (rel, manifest) = Self::find(root, index, selector)?;
        let issues = validate_manifest(&manifest, &rel, index);
        let valid = !issues.iter().any(|i| i.severity == Severity::Error);
        Ok(CollectionValidateResult {
            path: rel,
            issues,
            valid,
        })
    }

    /// Validate every manifest in the library, including unparseable ones.
    pub fn validate_all(
        root: &Path,
        index: &LibraryIndex,
    ) -> Result<Vec<CollectionValidateResult>, CuratorError> {
        let mut results = Vec::new();
        for rel in index.manifest_paths() {
            let issues = crate::validate::manifest_issues(root, rel, index);
            let valid = !issues.iter().any(|i| i.severity == Severity::Error);
            results.push(CollectionValidateResult {
                path: rel.clone(),
                issues,
                valid,
            });
        }
        Ok(results)
    }

    /// Locate a manifest by collection id or by library-relative path.
    fn find(
        root: &Path,
        index: &LibraryIndex,
        selector: &str,
    ) -> Result<(String, CollectionManifest), CuratorError> {
        // Path selectors carry the manifest suffix.
        if crate::types::is_collection_manifest(selector) {
            let rel = crate::library::paths::normalize_rel(selector);
            if index.manifest_paths().iter().any(|p| *p == rel) {
                let manifest = CollectionManifest::load(&root.join(&rel))?;
                return Ok((rel, manifest));
            }
            return Err(CuratorError::NotFound(format!(
                "collection manifest '{selector}'"
            )));
        }

        for rel in index.manifest_paths() {
            if crate::collection::manifest::manifest_stem(file_name(rel)) == Some(selector) {
                let manifest = CollectionManifest::load(&root.join(rel))?;
                return Ok((rel.clone(), manifest));
            }
        }
        Err(CuratorError::NotFound(format!("collection '{selector}'")))
    }
}
