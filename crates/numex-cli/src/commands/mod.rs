//! CLI subcommands.

pub mod ai;
pub mod config;
pub mod process;

use numex_core::models::config::NumexConfig;

/// Load configuration from an explicit path, the default location, or
/// built-in defaults, in that order.
pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<NumexConfig> {
    if let Some(path) = config_path {
        return Ok(NumexConfig::from_file(std::path::Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        Ok(NumexConfig::from_file(&default_path)?)
    } else {
        Ok(NumexConfig::default())
    }
}
