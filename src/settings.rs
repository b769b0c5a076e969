//! Layered configuration for the bootstrap binary.

use config::{Config, ConfigError, Environment, File};

use crate::models::config::ServerConfig;

/// Directory holding `default.yaml` and the optional `local.yaml`.
pub const CONFIG_DIR: &str = "config";

/// Loads `config/default.yaml`, then `config/local.yaml` if present, then
/// `SCHULBIB__*` environment variables.
pub fn load_config() -> Result<ServerConfig, ConfigError> {
    load_config_from(CONFIG_DIR)
}

pub fn load_config_from(dir: &str) -> Result<ServerConfig, ConfigError> {
    Config::builder()
        .add_source(File::with_name(&format!("{dir}/default")))
        .add_source(File::with_name(&format!("{dir}/local")).required(false))
        .add_source(Environment::with_prefix("SCHULBIB").separator("__"))
        .build()?
        .try_deserialize()
}
