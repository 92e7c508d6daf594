//! Library-local config file sources.
//!
//! Two optional locations inside the library root: `.curator/config.toml`
//! first, then `curator.toml`, so the visible root file wins when both
//! exist.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    library_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let hidden = library_root.join(".curator").join("config.toml");
    let visible = library_root.join("curator.toml");

    let builder = builder
        .add_source(File::from(hidden).required(false))
        .add_source(File::from(visible).required(false));
    Ok(builder)
}
