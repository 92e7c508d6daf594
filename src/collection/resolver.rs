//! Collection resolution against the library index.
//!
//! Resolution checks every item and reports every failure; it never stops at
//! the first broken reference. Items that resolve cleanly come back in
//! declared order regardless of display hints.

use crate::collection::manifest::CollectionManifest;
use crate::library::index::LibraryIndex;
use crate::library::paths::normalize_rel;
use crate::types::ContentKind;
use crate::validate::report::{Issue, IssueKind};
use serde::Serialize;

/// One successfully resolved item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedItem {
    /// Normalized library-relative path.
    pub path: String,
    pub kind: ContentKind,
}

/// Outcome of resolving a manifest: the items that checked out, plus every
/// finding for the ones that did not.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub items: Vec<ResolvedItem>,
    pub issues: Vec<Issue>,
}

impl Resolution {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Resolve a manifest's items against the index.
///
/// Per item: the path must exist in the library, and the declared kind must
/// match the kind inferred from the file's suffix. A missing file is a
/// dangling reference; a kind disagreement is a mismatch. Duplicate paths
/// are advisory.
pub fn resolve(manifest: &CollectionManifest, index: &LibraryIndex) -> Resolution {
    let mut resolution = Resolution::default();
    let mut seen: Vec<String> = Vec::new();

    for item in &manifest.items {
        let normalized = normalize_rel(&item.path);

        if seen.contains(&normalized) {
            resolution.issues.push(Issue::warning(IssueKind::DuplicateItem {
                path: normalized.clone(),
            }));
            continue;
        }
        seen.push(normalized.clone());

        match index.kind_of(&normalized) {
            None => {
                resolution
                    .issues
                    .push(Issue::error(IssueKind::DanglingReference {
                        path: normalized.clone(),
                    }));
            }
            Some(actual) if actual != item.kind => {
                resolution.issues.push(Issue::error(IssueKind::KindMismatch {
                    path: normalized.clone(),
                    expected: item.kind,
                    actual,
                }));
            }
            Some(kind) => {
                resolution.items.push(ResolvedItem {
                    path: normalized,
                    kind,
                });
            }
        }
    }

    resolution
}
