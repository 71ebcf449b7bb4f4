//! Configuration management for the taskdo application.
//!
//! Settings live as pretty-printed JSON in the platform data directory and
//! are edited through the interactive `taskdo init` wizard. Each optional
//! module (mailer, scheduler) is configured independently; unconfigured
//! modules are omitted from the file.

use crate::api::MailerConfig;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module shown in the interactive setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier used in configuration routing
    pub key: String,
    /// Display name shown during interactive setup
    pub name: String,
}

/// Watcher timing settings: how often due reminders are polled and at which
/// hour the daily archival sweep runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Reminder poll interval in seconds
    pub poll_interval: u64,
    /// Local hour of day (0-23) for the archival sweep
    pub archive_hour: u32,
}

impl Default for SchedulerConfig {
    /// Poll every 30 seconds; sweep at midnight, matching the original
    /// daily cadence.
    fn default() -> Self {
        SchedulerConfig {
            poll_interval: 30,
            archive_hour: 0,
        }
    }
}

impl SchedulerConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "scheduler".to_string(),
            name: "Scheduler".to_string(),
        }
    }

    pub fn init(config: &Option<SchedulerConfig>) -> Result<Self> {
        let current = config.clone().unwrap_or_default();

        let poll_interval: u64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPollInterval.to_string())
            .default(current.poll_interval)
            .interact_text()?;
        let archive_hour: u32 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptArchiveHour.to_string())
            .default(current.archive_hour)
            .validate_with(|hour: &u32| if *hour < 24 { Ok(()) } else { Err("hour must be 0-23") })
            .interact_text()?;

        Ok(Self { poll_interval, archive_hour })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Mail gateway used for reminder delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailer: Option<MailerConfig>,

    /// Watcher polling and sweep cadence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduler: Option<SchedulerConfig>,
}

impl Config {
    /// Loads the configuration, falling back to defaults when no file exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Presents a multi-select of available modules and prompts for each
    /// selected one, pre-filling current values as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![MailerConfig::module(), SchedulerConfig::module()];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for index in selected {
            match modules[index].key.as_str() {
                "mailer" => config.mailer = Some(MailerConfig::init(&config.mailer)?),
                "scheduler" => config.scheduler = Some(SchedulerConfig::init(&config.scheduler)?),
                _ => {}
            }
        }

        Ok(config)
    }
}
