//! Manifest-level validation: identifier rules, emptiness, references.

use crate::collection::manifest::{self, CollectionManifest};
use crate::collection::resolver;
use crate::library::index::LibraryIndex;
use crate::library::paths::file_name;
use crate::validate::report::{Issue, IssueKind};

/// Validate one parsed manifest, including reference resolution against the
/// index. `manifest_path` is the manifest's library-relative path, used to
/// check that the id matches the filename.
pub fn validate_manifest(
    manifest: &CollectionManifest,
    manifest_path: &str,
    index: &LibraryIndex,
) -> Vec<Issue> {
    let mut issues = Vec::new();

    if let Err(reason) = manifest::validate_collection_id(&manifest.id) {
        issues.push(Issue::error(IssueKind::InvalidId {
            id: manifest.id.clone(),
            reason,
        }));
    } else if let Some(stem) = manifest::manifest_stem(file_name(manifest_path)) {
        if stem != manifest.id {
            issues.push(Issue::error(IssueKind::IdMismatch {
                expected: stem.to_string(),
                actual: manifest.id.clone(),
            }));
        }
    }

    if manifest.name.trim().is_empty() {
        issues.push(Issue::error(IssueKind::EmptyField {
            field: "name".to_string(),
        }));
    }
    if manifest.description.trim().is_empty() {
        issues.push(Issue::warning(IssueKind::EmptyField {
            field: "description".to_string(),
        }));
    }

    if manifest.items.is_empty() {
        issues.push(Issue::error(IssueKind::EmptyCollection));
    } else {
        issues.extend(resolver::resolve(manifest, index).issues);
    }

    issues
}
