//! Validation findings and the library-wide report.
//!
//! Every finding is attributed to the file it was found in and carries a
//! structured kind. Reports list all findings in all files; nothing stops at
//! the first problem.

use crate::types::ContentKind;
use serde::Serialize;
use std::fmt;

/// How serious a finding is. Errors make a library invalid; warnings are
/// advisory unless strict mode promotes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// Structured kind of a validation finding.
///
/// Serialized with a `code` tag so JSON consumers can match on finding types
/// without parsing messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "kebab-case")]
pub enum IssueKind {
    /// Content file has no leading `---` block.
    MissingFrontMatter,
    /// The opening `---` delimiter is never closed.
    UnclosedFrontMatter,
    /// The block is present but is not a valid YAML mapping, or a known
    /// field has the wrong type.
    InvalidFrontMatter { message: String },
    /// A field the file's kind requires is absent.
    MissingRequiredField { field: String },
    /// A present field carries no usable value.
    EmptyField { field: String },
    /// A pattern field does not parse as a glob.
    InvalidGlob {
        field: String,
        pattern: String,
        message: String,
    },
    /// The file could not be read.
    Unreadable { message: String },
    /// Collection manifest does not deserialize.
    ManifestParse { message: String },
    /// Collection declares no items.
    EmptyCollection,
    /// Collection id does not satisfy the identifier format.
    InvalidId { id: String, reason: String },
    /// Collection id disagrees with the manifest filename.
    IdMismatch { expected: String, actual: String },
    /// Collection item points at a file the library does not contain.
    DanglingReference { path: String },
    /// Collection item declares one kind but the file's suffix says another.
    KindMismatch {
        path: String,
        expected: ContentKind,
        actual: ContentKind,
    },
    /// The same path is listed more than once in a collection.
    DuplicateItem { path: String },
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFrontMatter => write!(f, "missing front matter block"),
            Self::UnclosedFrontMatter => write!(f, "front matter block is never closed"),
            Self::InvalidFrontMatter { message } => write!(f, "invalid front matter: {message}"),
            Self::MissingRequiredField { field } => {
                write!(f, "missing required field '{field}'")
            }
            Self::EmptyField { field } => write!(f, "field '{field}' is empty"),
            Self::InvalidGlob {
                field,
                pattern,
                message,
            } => write!(f, "field '{field}' has invalid glob '{pattern}': {message}"),
            Self::Unreadable { message } => write!(f, "file could not be read: {message}"),
            Self::ManifestParse { message } => write!(f, "manifest does not parse: {message}"),
            Self::EmptyCollection => write!(f, "collection declares no items"),
            Self::InvalidId { id, reason } => write!(f, "invalid collection id '{id}': {reason}"),
            Self::IdMismatch { expected, actual } => write!(
                f,
                "collection id '{actual}' does not match filename (expected '{expected}')"
            ),
            Self::DanglingReference { path } => {
                write!(f, "references missing file '{path}'")
            }
            Self::KindMismatch {
                path,
                expected,
                actual,
            } => write!(f, "'{path}' is declared as {expected} but is a {actual}"),
            Self::DuplicateItem { path } => write!(f, "'{path}' is listed more than once"),
        }
    }
}

/// One validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub severity: Severity,
    #[serde(flatten)]
    pub kind: IssueKind,
    /// Human-readable rendering of `kind`.
    pub message: String,
}

impl Issue {
    pub fn error(kind: IssueKind) -> Self {
        let message = kind.to_string();
        Self {
            severity: Severity::Error,
            kind,
            message,
        }
    }

    pub fn warning(kind: IssueKind) -> Self {
        let message = kind.to_string();
        Self {
            severity: Severity::Warning,
            kind,
            message,
        }
    }
}

/// All findings for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// Library-relative path.
    pub path: String,
    /// Inferred kind for content files; manifests have none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ContentKind>,
    pub issues: Vec<Issue>,
}

impl FileReport {
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }
}

/// Library-wide validation report.
///
/// Contains no timestamps or other run-dependent state: validating the same
/// tree twice yields byte-identical reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Library root the report describes.
    pub root: String,
    /// Content files examined.
    pub content_files: usize,
    /// Collection manifests examined.
    pub collections: usize,
    /// Files with at least one finding, sorted by path.
    pub files: Vec<FileReport>,
    pub error_count: usize,
    pub warning_count: usize,
    /// True when no errors were found. Warnings do not affect validity.
    pub valid: bool,
}

impl ValidationReport {
    /// Assemble a report from per-file findings. Files without findings are
    /// dropped; the rest are sorted by path for deterministic output.
    pub fn assemble(
        root: String,
        content_files: usize,
        collections: usize,
        mut files: Vec<FileReport>,
    ) -> Self {
        files.retain(|f| !f.issues.is_empty());
        files.sort_by(|a, b| a.path.cmp(&b.path));

        let error_count = files.iter().map(FileReport::error_count).sum();
        let warning_count = files.iter().map(FileReport::warning_count).sum();

        Self {
            root,
            content_files,
            collections,
            files,
            error_count,
            warning_count,
            valid: error_count == 0,
        }
    }

    /// Whether the report passes: errors always fail, warnings fail only in
    /// strict mode.
    pub fn passes(&self, strict: bool) -> bool {
        self.error_count == 0 && (!strict || self.warning_count == 0)
    }
}
