//! Configuration module
//!
//! Handles loading and saving dcrwire configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::protocol::{CurrencyNet, ServiceFlag, PROTOCOL_VERSION};

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Unsupported protocol version {got} (supported: 1..={max})")]
    UnsupportedVersion { got: u32, max: u32 },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Wire protocol settings
    #[serde(default)]
    pub wire: WireConfig,
}

/// General configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log filter directive (e.g. "info", "dcrwire=trace")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Wire protocol configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireConfig {
    /// Protocol version to speak; must not exceed the crate's latest
    #[serde(default = "default_protocol_version")]
    pub protocol_version: u32,
    /// Network name or magic value
    #[serde(default)]
    pub network: CurrencyNet,
    /// Service bits to advertise
    #[serde(default = "default_services")]
    pub services: ServiceFlag,
}

fn default_protocol_version() -> u32 {
    PROTOCOL_VERSION
}

fn default_services() -> ServiceFlag {
    ServiceFlag::NODE_NETWORK
}

impl Default for WireConfig {
    fn default() -> Self {
        Self {
            protocol_version: default_protocol_version(),
            network: CurrencyNet::default(),
            services: default_services(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from the default location
    pub fn load_default() -> ConfigResult<Self> {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("dcrwire/config.toml")),
            Some(PathBuf::from("./dcrwire.toml")),
        ];

        let config_paths: Vec<PathBuf> = config_paths.into_iter().flatten().collect();
        Self::load_first_existing(&config_paths)
    }

    /// Load the first path that exists, or the defaults if none does.
    ///
    /// A file that exists but fails to parse or validate is an error.
    pub fn load_first_existing(paths: &[PathBuf]) -> ConfigResult<Self> {
        for path in paths {
            if path.exists() {
                return Self::load(path);
            }
        }

        tracing::debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let contents = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Check values that the type system cannot.
    pub fn validate(&self) -> ConfigResult<()> {
        let pver = self.wire.protocol_version;
        if pver == 0 || pver > PROTOCOL_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                got: pver,
                max: PROTOCOL_VERSION,
            });
        }
        Ok(())
    }
}

/// Generate a sample configuration file
pub fn generate_sample_config() -> ConfigResult<String> {
    let config = Config {
        wire: WireConfig {
            network: CurrencyNet::TEST_NET,
            ..Default::default()
        },
        ..Default::default()
    };

    Ok(toml::to_string_pretty(&config)?)
}
