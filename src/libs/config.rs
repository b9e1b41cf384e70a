//! Configuration for the booking desk.
//!
//! The only thing the desk needs to know is how to reach its database. The
//! descriptor lives in `config.json` inside the platform data directory and
//! is read once at startup, then handed to every data-access call.
//!
//! ## Resolution order
//!
//! 1. `config.json` in the data directory, if present
//! 2. built-in defaults (`hotel.db` next to the configuration file)
//! 3. `HOTELBOOK_DB_PATH`, from the environment or a `.env` file, overrides
//!    the database path from either of the above
//!
//! ```rust,no_run
//! use hotelbook::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Database: {}", config.database.path.display());
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
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DB_FILE_NAME: &str = "hotel.db";

/// Environment variable overriding the database file location.
pub const DB_PATH_ENV: &str = "HOTELBOOK_DB_PATH";

const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

fn default_busy_timeout() -> u64 {
    DEFAULT_BUSY_TIMEOUT_MS
}

/// Connection descriptor for the booking database.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    /// SQLite database file.
    pub path: PathBuf,

    /// How long a connection waits for another writer before giving up.
    ///
    /// Two desks booking at the same moment are serialized by the database
    /// write lock; the second one waits up to this many milliseconds.
    #[serde(default = "default_busy_timeout")]
    pub busy_timeout_ms: u64,
}

impl DatabaseConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DatabaseConfig {
            path: path.into(),
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        let path = DataStorage::new().get_path(DB_FILE_NAME).unwrap_or_else(|_| PathBuf::from(DB_FILE_NAME));
        DatabaseConfig::new(path)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl Config {
    /// Configuration pointing at an explicit database file.
    pub fn with_database_path(path: impl Into<PathBuf>) -> Self {
        Config {
            database: DatabaseConfig::new(path),
        }
    }

    /// Loads the configuration file, falling back to defaults when it does
    /// not exist, and applies the environment override.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let mut config = Self::read_file()?;
        config.apply_env();
        Ok(config)
    }

    fn read_file() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    fn apply_env(&mut self) {
        let _ = dotenv::dotenv();
        if let Ok(path) = env::var(DB_PATH_ENV) {
            if !path.trim().is_empty() {
                self.database.path = PathBuf::from(path.trim());
            }
        }
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. A missing file is not an error.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Interactive setup wizard, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let current = Self::read_file().unwrap_or_default();

        msg_print!(Message::ConfigModuleDatabase);
        let path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatabasePath.to_string())
            .default(current.database.path.display().to_string())
            .interact_text()?;

        let busy_timeout_ms: u64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptBusyTimeout.to_string())
            .default(current.database.busy_timeout_ms)
            .interact_text()?;

        Ok(Config {
            database: DatabaseConfig {
                path: PathBuf::from(path.trim()),
                busy_timeout_ms,
            },
        })
    }
}
