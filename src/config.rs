//! Configuration loading
//!
//! Reads `config.toml` from the platform config directory (or an explicit
//! path). A missing file yields the defaults; an unreadable or malformed file
//! also yields the defaults plus a warning for the UI to display.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{
    ClipboardBackend, ClipboardConfig, Config, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS,
    ServerConfig,
};

use crate::error::MathElfError;

/// Outcome of loading the configuration
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Default location: `<config_dir>/mathelf/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mathelf").join("config.toml"))
}

/// Load config from `path`, or from the default location when `None`
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    let path = match path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(p) => p,
        None => {
            return ConfigResult {
                config: Config::default(),
                warning: None,
            };
        }
    };

    // An explicitly missing default file is normal, not an error
    if !path.exists() {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match read_config(&path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Falling back to default config: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("{}. Using defaults.", e)),
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config, MathElfError> {
    let contents = fs::read_to_string(path).map_err(|source| MathElfError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let config: Config = toml::from_str(&contents).map_err(|e| MathElfError::ConfigParse {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;

    validate_base_url(&config.server.base_url)?;
    Ok(config)
}

/// Accept only absolute http(s) URLs; returns the URL without a trailing slash
pub fn validate_base_url(url: &str) -> Result<String, MathElfError> {
    let parsed =
        reqwest::Url::parse(url).map_err(|_| MathElfError::InvalidServerUrl(url.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(MathElfError::InvalidServerUrl(url.to_string()));
    }

    Ok(url.trim_end_matches('/').to_string())
}
