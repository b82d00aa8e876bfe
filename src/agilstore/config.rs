//! # Configuration
//!
//! Each scope directory may hold a `config.json` next to the data document.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data-file` | `produtos.json` | File name of the product document |
//! | `currency` | `R$` | Symbol shown in front of prices |
//!
//! A missing file means defaults. Unknown fields in the file are ignored.

use crate::error::{InventoryError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_DATA_FILE: &str = "produtos.json";
pub const DEFAULT_CURRENCY: &str = "R$";

pub const KEYS: &[&str] = &["data-file", "currency"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    #[serde(default = "default_data_file")]
    pub data_file: String,

    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            currency: default_currency(),
        }
    }
}

impl StoreConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(InventoryError::Io)?;
        serde_json::from_str(&content).map_err(|e| {
            InventoryError::Config(format!("{}: {}", config_path.display(), e))
        })
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(InventoryError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(InventoryError::Serialization)?;
        fs::write(config_path, content).map_err(InventoryError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "currency" => Some(self.currency.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let value = value.trim();
        if value.is_empty() {
            return Err(format!("Value for {} cannot be empty", key));
        }
        match key {
            "data-file" => {
                if value.contains(['/', '\\']) || value == "." || value == ".." {
                    return Err("data-file must be a file name, not a path".to_string());
                }
                self.data_file = value.to_string();
            }
            "currency" => self.currency = value.to_string(),
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    /// `(key, value)` pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}
