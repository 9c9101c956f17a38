//! Configuration management for the ttrack application.
//!
//! Settings live in a JSON file under the platform application-data
//! directory (`~/.local/share/lacodda/ttrack/config.json` on Linux, the
//! equivalent on macOS and Windows), or wherever the global `--config`
//! option points. The file holds one optional module: the TrackingTime
//! connection settings. A missing file is not an error; it reads as an
//! empty configuration so that only `init` is required before first use.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ttrack::libs::config::Config;
//!
//! let config = Config::read()?.tracking_time()?;
//! println!("API URL: {}", config.api_url);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Password};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

const DEFAULT_API_URL: &str = "https://app.trackingtime.co";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

/// TrackingTime connection settings.
///
/// The password rides HTTP basic auth on every request; there is no session
/// endpoint to exchange it for a token, so it is kept alongside the other
/// connection parameters.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TrackingTimeConfig {
    pub username: String,
    pub password: String,
    /// Numeric account id used to resolve the active task.
    pub user_id: i64,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl TrackingTimeConfig {
    /// Interactive setup, pre-filling current values as defaults.
    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self {
            username: "".to_string(),
            password: "".to_string(),
            user_id: 0,
            api_url: default_api_url(),
        });
        msg_print!(Message::ConfigModuleTrackingTime);
        Ok(Self {
            username: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptUsername.to_string())
                .default(config.username)
                .interact_text()?,
            password: Password::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptPassword.to_string())
                .interact()?,
            user_id: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptUserId.to_string())
                .default(config.user_id)
                .interact_text()?,
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
        })
    }
}

/// Main configuration container.
///
/// Unconfigured modules are omitted from the JSON output to keep the file
/// clean and hand-editable.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_time: Option<TrackingTimeConfig>,
}

impl Config {
    /// Reads the configuration from the default location.
    ///
    /// A missing file yields `Config::default()`.
    pub fn read() -> Result<Config> {
        Self::read_from(None)
    }

    /// Reads the configuration from `path`, or the default location when
    /// `path` is `None`.
    pub fn read_from(path: Option<&Path>) -> Result<Config> {
        let config_file_path = Self::file_path(path)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(None)
    }

    /// Saves the configuration to `path`, or the default location when
    /// `path` is `None`.
    pub fn save_to(&self, path: Option<&Path>) -> Result<()> {
        let config_file_path = Self::file_path(path)?;
        if let Some(parent) = config_file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard on top of the stored
    /// configuration and returns the result for saving.
    pub fn init(path: Option<&Path>) -> Result<Self> {
        let mut config = match Self::read_from(path) {
            Ok(config) => config,
            Err(_) => Config::default(),
        };

        config.tracking_time = Some(TrackingTimeConfig::init(&config.tracking_time)?);
        Ok(config)
    }

    /// Removes the stored configuration file. Returns `false` when there
    /// was nothing to remove.
    pub fn delete(path: Option<&Path>) -> Result<bool> {
        let config_file_path = Self::file_path(path)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// The TrackingTime module, or a setup hint when not configured yet.
    pub fn tracking_time(self) -> Result<TrackingTimeConfig> {
        self.tracking_time.ok_or_else(|| msg_error_anyhow!(Message::TrackingTimeConfigNotFound))
    }

    fn file_path(path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(path.to_path_buf()),
            None => DataStorage::new().get_path(CONFIG_FILE_NAME),
        }
    }
}
