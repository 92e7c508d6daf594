//! Global config file source: $XDG_CONFIG_HOME/curator/config.toml

use crate::config::xdg;
use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;

/// Add the global config file to the builder when it can be located. The
/// file itself is optional.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = match xdg::global_config_path() {
        Some(path) => builder.add_source(File::from(path).required(false)),
        None => builder,
    };
    Ok(builder)
}
