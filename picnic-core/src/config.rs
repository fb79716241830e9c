use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::{
    error::{PicnicError, Result},
    model::UnitGroup,
};

/// Env var holding the Visual Crossing API key.
pub const API_KEY_ENV: &str = "VISUAL_CROSSING_WEATHER_DATA";

/// Env var pointing at an explicit config file.
pub const CONFIG_PATH_ENV: &str = "PICNIC_CONFIG";

/// Weather provider endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Scheme and host, e.g. `https://weather.visualcrossing.com`.
    pub base_url: String,
    pub weather_data_path: String,
    /// No timeout when unset.
    pub request_timeout_secs: Option<u64>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://weather.visualcrossing.com".to_string(),
            weather_data_path: "/VisualCrossingWebServices/rest/services/timeline".to_string(),
            request_timeout_secs: None,
        }
    }
}

/// Read-only settings, loaded once at startup.
///
/// Example TOML:
/// ```toml
/// unit_group = "metric"
/// excluded_flags = ["--trace-warnings", "-c"]
///
/// [provider]
/// base_url = "https://weather.visualcrossing.com"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderConfig,
    pub unit_group: UnitGroup,
    /// Command-line flags dropped before argument parsing.
    pub excluded_flags: Vec<String>,
    /// Taken from the environment, never from the file.
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            unit_group: UnitGroup::Metric,
            excluded_flags: vec!["--trace-warnings".to_string(), "-c".to_string()],
            api_key: None,
        }
    }
}

impl Config {
    /// Load config from `$PICNIC_CONFIG`, else the platform config file, else
    /// defaults; then pick up the API key from the environment.
    pub fn load() -> Result<Self> {
        let mut cfg = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::load_from(Path::new(&path))?,
            None => {
                let path = Self::config_file_path()?;
                if path.exists() {
                    Self::load_from(&path)?
                } else {
                    debug!(path = %path.display(), "no config file, using defaults");
                    Self::default()
                }
            }
        };

        cfg.api_key = std::env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty());
        Ok(cfg)
    }

    /// Parse a config file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            PicnicError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&contents).map_err(|e| {
            PicnicError::Config(format!("Failed to parse config file {}: {e}", path.display()))
        })
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| PicnicError::Config(e.to_string()))
    }

    /// Path to the platform config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "picnic-planner", "picnic-cli").ok_or_else(|| {
            PicnicError::Config("Could not determine platform config directory".to_string())
        })?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn is_excluded_flag(&self, arg: &str) -> bool {
        self.excluded_flags.iter().any(|flag| flag == arg)
    }
}
