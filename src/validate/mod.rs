//! Validation Model
//!
//! The finding taxonomy, the per-file report structures, and the runner that
//! validates a whole library in one pass. Findings are data: a broken
//! library produces a report, not an error.

pub mod report;
mod runner;

pub use report::{FileReport, Issue, IssueKind, Severity, ValidationReport};
pub use runner::{manifest_issues, validate_index, validate_library};
