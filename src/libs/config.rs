//! Configuration for studentdb.
//!
//! The configuration is a small JSON file (`config.json`) in the per-OS data
//! directory. Today it holds only the database connection settings; the
//! connection parameters are injected into the record store from here rather
//! than being baked into the adapter.
//!
//! ```rust,no_run
//! use studentdb::libs::config::Config;
//!
//! let config = Config::read()?;
//! let database = config.database()?;
//! println!("Using {}", database.path);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DB_FILE_NAME: &str = "students.db";

/// Environment variable that overrides the configured database path.
/// A `.env` file in the working directory is honoured as well.
pub const DATABASE_ENV: &str = "STUDENTDB_DATABASE";

/// Path used by SQLite for a private, non-persistent database.
pub const IN_MEMORY: &str = ":memory:";

/// Connection settings for the student database.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    /// SQLite database file, or `:memory:`.
    pub path: String,
}

impl DatabaseConfig {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_memory() -> Self {
        Self::new(IN_MEMORY)
    }

    pub fn is_in_memory(&self) -> bool {
        self.path == IN_MEMORY
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,
}

impl Config {
    /// Reads the configuration file, or returns the default configuration
    /// when none has been saved yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().peek_path(CONFIG_FILE_NAME);
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Interactive wizard, seeded with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.database()?;

        msg_print!(Message::ConfigModuleDatabase);
        config.database = Some(DatabaseConfig {
            path: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDatabasePath.to_string())
                .default(default.path)
                .interact_text()?,
        });

        Ok(config)
    }

    /// Resolves the database settings: the environment override first, then
    /// the configuration file, then `students.db` in the data directory.
    pub fn database(&self) -> Result<DatabaseConfig> {
        if let Ok(path) = env::var(DATABASE_ENV) {
            if !path.trim().is_empty() {
                return Ok(DatabaseConfig::new(path.trim()));
            }
        }

        if let Some(database) = &self.database {
            return Ok(database.clone());
        }

        let path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Ok(DatabaseConfig::new(path.to_string_lossy()))
    }
}
