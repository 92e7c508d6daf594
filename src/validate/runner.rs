//! Library validation runner: scan, check every file, assemble the report.

use crate::collection::manifest::CollectionManifest;
use crate::collection::validate_manifest;
use crate::content::{validate_content_file, ContentFile};
use crate::error::CuratorError;
use crate::library::index::LibraryIndex;
use crate::library::paths::canonicalize_root;
use crate::library::scanner::{ScanConfig, Scanner};
use crate::validate::report::{FileReport, Issue, IssueKind, ValidationReport};
use std::path::Path;
use tracing::debug;

/// Validate an entire library.
///
/// Scans the root, validates every content file's front matter, then parses
/// and validates every collection manifest against the scanned index. Every
/// file is examined and every finding reported; only scan failure is fatal.
pub fn validate_library(
    root: &Path,
    scan_config: ScanConfig,
) -> Result<ValidationReport, CuratorError> {
    let canonical = canonicalize_root(root)?;
    let index = Scanner::new(&canonical).with_config(scan_config).scan()?;
    validate_index(&canonical, &index)
}

/// Validate a library from an already-built index. Used by the watch runtime
/// and anywhere else the scan has happened separately.
pub fn validate_index(
    root: &Path,
    index: &LibraryIndex,
) -> Result<ValidationReport, CuratorError> {
    let mut files = Vec::new();

    for (rel, kind) in index.content_paths() {
        let issues = match ContentFile::load(root, rel, kind) {
            Ok(file) => validate_content_file(&file),
            Err(e) => vec![Issue::error(IssueKind::Unreadable {
                message: e.to_string(),
            })],
        };
        debug!(path = %rel, findings = issues.len(), "validated content file");
        files.push(FileReport {
            path: rel.to_string(),
            kind: Some(kind),
            issues,
        });
    }

    for rel in index.manifest_paths() {
        let issues = manifest_issues(root, rel, index);
        debug!(path = %rel, findings = issues.len(), "validated manifest");
        files.push(FileReport {
            path: rel.clone(),
            kind: None,
            issues,
        });
    }

    Ok(ValidationReport::assemble(
        root.display().to_string(),
        index.content_len(),
        index.manifest_len(),
        files,
    ))
}

/// All findings for one manifest file: read and parse failures become
/// findings, a parsed manifest goes through full validation.
pub fn manifest_issues(root: &Path, rel: &str, index: &LibraryIndex) -> Vec<Issue> {
    let abs = root.join(rel);
    let content = match std::fs::read_to_string(&abs) {
        Ok(content) => content,
        Err(e) => {
            return vec![Issue::error(IssueKind::Unreadable {
                message: e.to_string(),
            })]
        }
    };

    match CollectionManifest::parse(&content) {
        Ok(manifest) => validate_manifest(&manifest, rel, index),
        Err(e) => vec![Issue::error(IssueKind::ManifestParse {
            message: e.to_string(),
        })],
    }
}
