use crate::runtime::SessionContext;
use crate::validator::{SourceValidator, DEFAULT_SOURCE_PATH};
use crate::{MockError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".clarity-mock.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub validator: ValidatorConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionConfig {
    /// `tx-sender` to use instead of the reset address
    #[serde(default)]
    pub sender: Option<String>,
    /// Contract owner to use instead of the reset address
    #[serde(default)]
    pub owner: Option<String>,
    /// Starting block height; must not be below the reset height
    #[serde(default)]
    pub block_height: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ValidatorConfig {
    /// Path to the contract source to validate
    #[serde(default)]
    pub source: Option<PathBuf>,
    /// Replaces the default marker list when set
    #[serde(default)]
    pub markers: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Default output format ("text" or "json")
    #[serde(default)]
    pub format: Option<String>,
}

impl Config {
    /// Load configuration from a file in the project root
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            MockError::FileError(format!(
                "Failed to read config file {:?}: {}",
                config_path, e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            MockError::FileError(format!(
                "Failed to parse TOML config from {:?}: {}",
                config_path, e
            ))
        })?;

        Ok(config)
    }

    /// Load default config if file is missing, otherwise return error on parse failure
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Warning: Failed to load config: {}. Using defaults.", e);
                Config::default()
            }
        }
    }

    /// A fresh session with the configured overrides applied.
    pub fn session(&self) -> Result<SessionContext> {
        let mut session = SessionContext::new();
        if let Some(sender) = &self.session.sender {
            session.set_tx_sender(sender.clone());
        }
        if let Some(owner) = &self.session.owner {
            session.set_contract_owner(owner.clone());
        }
        if let Some(height) = self.session.block_height {
            session.set_block_height(height)?;
        }
        Ok(session)
    }

    pub fn source_path(&self) -> PathBuf {
        self.validator
            .source
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_PATH))
    }

    pub fn source_validator(&self) -> SourceValidator {
        match &self.validator.markers {
            Some(markers) => SourceValidator::with_markers(markers.clone()),
            None => SourceValidator::new(),
        }
    }

    pub fn wants_json(&self) -> bool {
        self.output
            .format
            .as_deref()
            .is_some_and(|f| f.eq_ignore_ascii_case("json"))
    }
}
