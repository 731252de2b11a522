use crate::error::{Result, UserbookError};
use crate::store::DEFAULT_STORAGE_KEY;
use crate::validation::ValidationMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for userbook, stored in `<data dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserbookConfig {
    /// Key the collection is stored under (file `<key>.json`)
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// How a form submission walks its fields
    #[serde(default)]
    pub validation: ValidationMode,

    /// Ask before removing a user
    #[serde(default = "default_confirm_remove")]
    pub confirm_remove: bool,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_confirm_remove() -> bool {
    true
}

impl Default for UserbookConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            validation: ValidationMode::default(),
            confirm_remove: default_confirm_remove(),
        }
    }
}

impl UserbookConfig {
    pub const KEYS: [&'static str; 3] = ["storage-key", "validation", "confirm-remove"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(UserbookError::Io)?;
        let config: UserbookConfig =
            serde_json::from_str(&content).map_err(UserbookError::Serialization)?;
        check_storage_key(&config.storage_key)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(UserbookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(UserbookError::Serialization)?;
        fs::write(config_path, content).map_err(UserbookError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "storage-key" => Ok(self.storage_key.clone()),
            "validation" => Ok(self.validation.to_string()),
            "confirm-remove" => Ok(self.confirm_remove.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage-key" => {
                check_storage_key(value)?;
                self.storage_key = value.to_string();
            }
            "validation" => {
                self.validation = value.parse().map_err(UserbookError::Config)?;
            }
            "confirm-remove" => {
                self.confirm_remove = value.parse().map_err(|_| {
                    UserbookError::Config(format!(
                        "confirm-remove must be true or false, got '{}'",
                        value
                    ))
                })?;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

/// The key becomes a file name, so it must stay a plain name inside the data dir.
fn check_storage_key(value: &str) -> Result<()> {
    let valid = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(UserbookError::Config(format!(
            "storage-key must be letters, digits, '-' or '_', got '{}'",
            value
        )));
    }
    Ok(())
}

fn unknown_key(key: &str) -> UserbookError {
    UserbookError::Config(format!(
        "Unknown config key '{}' (known: {})",
        key,
        UserbookConfig::KEYS.join(", ")
    ))
}
