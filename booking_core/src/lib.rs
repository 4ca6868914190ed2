pub mod client;
pub mod form;
pub mod model;
pub mod session;
pub mod status;
pub mod store;
pub mod time;
pub mod validate;

use crate::error::ConfigError;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const ENV_VAR_PREFIX: &str = "BOOKING__";
pub const SETTINGS_FILE: &str = "Settings.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub api: ApiConfig,
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8080/api".to_string(),
                timeout_secs: 10,
            },
            data_dir: None,
        }
    }
}

pub fn load_config() -> Result<Config, ConfigError> {
    Ok(Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(SETTINGS_FILE))
        .merge(Env::prefixed(ENV_VAR_PREFIX).split("__"))
        .extract::<Config>()?)
}

/// Default location for persisted client state when the config does not
/// name one.
pub fn default_data_dir() -> Option<PathBuf> {
    home::home_dir().map(|h| h.join(".atc-booking"))
}

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum ConfigError {
        #[error("failed to load configuration: {0}")]
        Figment(#[from] figment::Error),
    }
}
