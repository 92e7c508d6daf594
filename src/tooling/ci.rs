//! CI Integration
//!
//! Batch entry point for pipelines: run a sequence of operations over a
//! library root, collect one machine-readable report, and decide an exit
//! code. Unlike the interactive CLI this layer uses `anyhow` so pipeline
//! failures surface with context instead of being pretty-printed.

use crate::library::commands::LibraryCommandService;
use crate::library::scanner::ScanConfig;
use crate::validate::validate_library;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One operation a CI batch performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOperation {
    /// Build the index and report inventory counts.
    Scan,
    /// Full library validation; `strict` counts warnings as failures.
    Validate { strict: bool },
}

impl BatchOperation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Scan => "scan",
            Self::Validate { .. } => "validate",
        }
    }
}

/// Outcome of one batch operation.
#[derive(Debug, Clone, Serialize)]
pub struct OperationResult {
    pub operation: String,
    pub passed: bool,
    pub errors: usize,
    pub warnings: usize,
    /// Operation-specific payload: the scan summary or the full report.
    pub detail: serde_json::Value,
}

/// Aggregated outcome of a CI batch.
///
/// Unlike validation reports, batch reports are pipeline artifacts and carry
/// their generation time.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub root: String,
    pub generated_at: String,
    pub results: Vec<OperationResult>,
    pub passed: bool,
}

impl BatchReport {
    /// 0 when every operation passed, 2 otherwise. 1 is left for operational
    /// failures decided at the binary boundary.
    pub fn exit_code(&self) -> i32 {
        if self.passed {
            0
        } else {
            2
        }
    }
}

/// Runs batches of operations against one library root.
pub struct CiIntegration {
    root: PathBuf,
    scan_config: ScanConfig,
}

impl CiIntegration {
    pub fn new(root: impl Into<PathBuf>, scan_config: ScanConfig) -> Self {
        Self {
            root: root.into(),
            scan_config,
        }
    }

    /// Execute the operations in order and aggregate their outcomes.
    ///
    /// A failing validation is a *passed=false* result, not an error; only
    /// environmental problems (unreadable root, serialization) return `Err`.
    pub fn run_batch(&self, operations: &[BatchOperation]) -> Result<BatchReport> {
        let mut results = Vec::with_capacity(operations.len());
        for operation in operations {
            results.push(self.run_one(*operation)?);
        }
        let passed = results.iter().all(|r| r.passed);
        tracing::info!(
            root = %self.root.display(),
            operations = results.len(),
            passed,
            "CI batch finished"
        );
        Ok(BatchReport {
            root: self.root.display().to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            results,
            passed,
        })
    }

    fn run_one(&self, operation: BatchOperation) -> Result<OperationResult> {
        match operation {
            BatchOperation::Scan => {
                let summary =
                    LibraryCommandService::scan(&self.root, self.scan_config.clone())
                        .with_context(|| {
                            format!("scan failed for library {}", self.root.display())
                        })?;
                Ok(OperationResult {
                    operation: operation.name().to_string(),
                    passed: true,
                    errors: 0,
                    warnings: 0,
                    detail: serde_json::to_value(&summary)
                        .context("failed to serialize scan summary")?,
                })
            }
            BatchOperation::Validate { strict } => {
                let report = validate_library(&self.root, self.scan_config.clone())
                    .with_context(|| {
                        format!("validation failed for library {}", self.root.display())
                    })?;
                Ok(OperationResult {
                    operation: operation.name().to_string(),
                    passed: report.passes(strict),
                    errors: report.error_count,
                    warnings: report.warning_count,
                    detail: serde_json::to_value(&report)
                        .context("failed to serialize validation report")?,
                })
            }
        }
    }
}

/// Write a batch report as pretty JSON, creating parent directories.
pub fn write_report(report: &BatchReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create report directory {}", parent.display())
            })?;
        }
    }
    let json = serde_json::to_string_pretty(report).context("failed to serialize CI report")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write CI report to {}", path.display()))
}
