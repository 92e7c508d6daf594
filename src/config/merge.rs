//! MergeService: orchestrates sources and deserializes to CuratorConfig.

use crate::config::sources::{environment, global_file, library_file};
use crate::config::CuratorConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};
use std::path::Path;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from library and standard sources.
    /// Precedence: defaults (lowest) -> global file -> library files ->
    /// environment (highest).
    pub fn load(library_root: &Path) -> Result<CuratorConfig, ConfigError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = library_file::add_to_builder(builder, library_root)?;
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load config from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<CuratorConfig, ConfigError> {
        let path_str = path
            .to_str()
            .ok_or_else(|| ConfigError::Message(format!("non-UTF-8 config path: {path:?}")))?;

        let builder = builder_with_defaults()?;
        let builder = builder.add_source(config::File::with_name(path_str));
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}

/// Base builder carrying explicit defaults for the scalar keys. List and
/// nested defaults come from serde during deserialization.
fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = Config::builder()
        .set_default("scan.follow_symlinks", false)?
        .set_default("validate.strict", false)?;
    Ok(builder)
}
