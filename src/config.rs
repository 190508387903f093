//! App configuration
//!
//! Everything has a default; a JSON file named by `EMPLOYEE_DB_CONFIG`
//! overrides individual keys.

use std::path::Path;

use anyhow::Context as _;
use serde::Deserialize;

use crate::error::ConfigError;

pub const CONFIG_ENV_VAR: &str = "EMPLOYEE_DB_CONFIG";

/// How new records get their id
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdScheme {
    /// `list length + 1`; ids can repeat after deletions
    #[default]
    ListLength,
    /// Process-wide counter, never reused
    Monotonic,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub window_title: String,
    pub id_scheme: IdScheme,
    /// Outline blank inputs after a refused commit
    pub highlight_missing_fields: bool,
    /// Show a hint when the DOB isn't DD-MM-YYYY
    pub date_of_birth_hint: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 480.,
            window_height: 800.,
            window_title: String::from("Employee Database"),
            id_scheme: IdScheme::ListLength,
            highlight_missing_fields: false,
            date_of_birth_hint: false,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

/// Load the config named by `EMPLOYEE_DB_CONFIG`, or defaults when unset
pub fn load_from_env() -> anyhow::Result<AppConfig> {
    let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
        log::info!("{} not set, using default configuration", CONFIG_ENV_VAR);
        return Ok(AppConfig::default());
    };
    let path = Path::new(&path);
    let config = AppConfig::from_file(path)
        .with_context(|| format!("loading configuration from {}", path.display()))?;
    log::info!("Loaded configuration from {}", path.display());
    Ok(config)
}
