use crate::auth::{Credentials, DEFAULT_MAX_ATTEMPTS, DEFAULT_OPERATOR, DEFAULT_PASSWORD};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;
const DEFAULT_HEADER_WIDTH: usize = 50;

/// Console configuration, stored in `<config dir>/config.json`.
///
/// Every field falls back to its default, so a missing file or a partial one
/// reproduces the stock console.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HmsConfig {
    /// Operator name accepted by the login gate
    pub operator: String,

    /// Password accepted by the login gate
    pub password: String,

    /// Login attempts before the console exits
    pub max_login_attempts: u32,

    /// Threshold used when the operator leaves the low-stock prompt blank
    pub low_stock_threshold: i64,

    /// Width of the `=` rule around section headers
    pub header_width: usize,
}

impl Default for HmsConfig {
    fn default() -> Self {
        Self {
            operator: DEFAULT_OPERATOR.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            max_login_attempts: DEFAULT_MAX_ATTEMPTS,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            header_width: DEFAULT_HEADER_WIDTH,
        }
    }
}

impl HmsConfig {
    pub fn path<P: AsRef<Path>>(config_dir: P) -> PathBuf {
        config_dir.as_ref().join(CONFIG_FILENAME)
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = Self::path(config_dir);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: HmsConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<PathBuf> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let config_path = Self::path(config_dir);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content)?;
        Ok(config_path)
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.operator.clone(), self.password.clone())
    }
}
