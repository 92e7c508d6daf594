//! ConfigLoader facade delegating to the merge service.

use super::merge::MergeService;
use super::CuratorConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from files and environment for a library root.
    pub fn load(library_root: &Path) -> Result<CuratorConfig, ConfigError> {
        MergeService::load(library_root)
    }

    /// Load configuration from a specific file, still applying the
    /// environment overlay.
    pub fn load_from_file(path: &Path) -> Result<CuratorConfig, ConfigError> {
        MergeService::load_from_file(path)
    }

    /// Create default configuration.
    pub fn default() -> CuratorConfig {
        CuratorConfig::default()
    }
}
