//! Configuration Model
//!
//! Layered configuration: built-in defaults, then the global XDG file, then
//! library-local files, then `CURATOR__*` environment variables. Sections
//! cover scanning, validation, and logging.

mod facade;
mod merge;
pub mod sources;
pub mod xdg;

pub use facade::ConfigLoader;
pub use merge::MergeService;

use crate::library::scanner::{ScanConfig, DEFAULT_IGNORE};
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

fn default_ignore() -> Vec<String> {
    DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect()
}

/// Scan section: what the scanner skips and how deep it goes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSection {
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,
    #[serde(default)]
    pub follow_symlinks: bool,
    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl Default for ScanSection {
    fn default() -> Self {
        Self {
            ignore: default_ignore(),
            follow_symlinks: false,
            max_depth: None,
        }
    }
}

impl ScanSection {
    pub fn to_scan_config(&self) -> ScanConfig {
        ScanConfig {
            follow_symlinks: self.follow_symlinks,
            ignore: self.ignore.clone(),
            max_depth: self.max_depth,
        }
    }
}

/// Validate section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidateSection {
    /// Treat warnings as errors.
    #[serde(default)]
    pub strict: bool,
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CuratorConfig {
    #[serde(default)]
    pub scan: ScanSection,
    #[serde(default)]
    pub validate: ValidateSection,
    #[serde(default)]
    pub logging: LoggingConfig,
}
