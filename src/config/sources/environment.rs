//! Environment variable source: CURATOR_* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// Uses CURATOR_ prefix and __ as separator for nested keys, so
/// `CURATOR__VALIDATE__STRICT=true` sets `validate.strict`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("CURATOR")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
