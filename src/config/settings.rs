use crate::error::{ChainError, Result};
use crate::utils::{HashEngine, DEFAULT_HASH_ALGORITHM};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(|| {
    Config::load().unwrap_or_else(|e| {
        log::warn!("Falling back to default configuration: {e}");
        Config::default()
    })
});

// Threshold used when neither a file, the environment, nor a flag sets one
const DEFAULT_FEE_THRESHOLD: i64 = 20;

const CONFIG_FILE_KEY: &str = "MERKLE_CHAIN_CONFIG";
const FEE_THRESHOLD_KEY: &str = "MERKLE_CHAIN_THRESHOLD";
const HASH_ALGORITHM_KEY: &str = "MERKLE_CHAIN_HASH";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    fee_threshold: i64,
    hash_algorithm: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            fee_threshold: DEFAULT_FEE_THRESHOLD,
            hash_algorithm: String::from(DEFAULT_HASH_ALGORITHM),
        }
    }
}

impl Config {
    /// Defaults, then the TOML file named by `MERKLE_CHAIN_CONFIG`, then the
    /// `MERKLE_CHAIN_THRESHOLD` / `MERKLE_CHAIN_HASH` variables
    pub fn load() -> Result<Config> {
        let config = match env::var(CONFIG_FILE_KEY) {
            Ok(path) => Config::from_file(path)?,
            Err(_) => Config::default(),
        };
        config.with_overrides(
            env::var(FEE_THRESHOLD_KEY).ok(),
            env::var(HASH_ALGORITHM_KEY).ok(),
        )
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            ChainError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Config::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Config> {
        Ok(toml::from_str(contents)?)
    }

    pub fn with_overrides(
        mut self,
        fee_threshold: Option<String>,
        hash_algorithm: Option<String>,
    ) -> Result<Config> {
        if let Some(value) = fee_threshold {
            self.fee_threshold = value.trim().parse().map_err(|e| {
                ChainError::Config(format!("{FEE_THRESHOLD_KEY} must be an integer: {e}"))
            })?;
        }
        if let Some(name) = hash_algorithm {
            self.hash_algorithm = name;
        }
        Ok(self)
    }

    pub fn get_fee_threshold(&self) -> i64 {
        self.fee_threshold
    }

    pub fn set_fee_threshold(&mut self, threshold: i64) {
        self.fee_threshold = threshold;
    }

    pub fn get_hash_algorithm(&self) -> &str {
        self.hash_algorithm.as_str()
    }

    /// Fails with `HashUnavailable` for an unknown algorithm name
    pub fn hash_engine(&self) -> Result<HashEngine> {
        HashEngine::from_name(&self.hash_algorithm)
    }
}
