//! Persistent settings for the presence application.
//!
//! Settings live in `config.json` inside the per-user data directory
//! resolved by [`DataStorage`]. A missing file is not an error: every
//! command runs with [`Config::default`] until `presence init` saves one.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use presence::libs::config::Config;
//!
//! let config = Config::read()?;
//! let report = config.report.unwrap_or_default();
//! println!("Trend window: {} days", report.trend_days);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::seed::DEFAULT_SEED;
use crate::libs::filter::DEFAULT_PAGE_SIZE;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Windows and paging used by the reporting commands. Fields missing from
/// the file take their default value.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    /// Days shown in the daily trend of the statistics view.
    pub trend_days: usize,

    /// Calendar days in the dashboard trend, ending today.
    pub dashboard_days: u32,

    /// Rows per page on the attendance list.
    pub page_size: usize,

    /// Days before `--to` where the report range starts when no `--from`
    /// is given. Both ends are included, so 30 covers 31 days.
    pub default_range_days: u32,

    /// Seed of the generated sample attendance. `None` uses the built-in seed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl ReportConfig {
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            trend_days: 10,
            dashboard_days: 7,
            page_size: DEFAULT_PAGE_SIZE,
            default_range_days: 30,
            seed: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportConfig>,
}

impl Config {
    /// Loads the saved configuration, or the default one when none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
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

    /// Report settings, falling back to defaults when the section is absent.
    pub fn report(&self) -> ReportConfig {
        self.report.clone().unwrap_or_default()
    }

    /// Interactive setup wizard; existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.report();

        msg_print!(Message::ConfigModuleReport);
        let seed: u64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSeed.to_string())
            .default(default.seed())
            .interact_text()?;

        config.report = Some(ReportConfig {
            trend_days: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTrendDays.to_string())
                .default(default.trend_days)
                .interact_text()?,
            dashboard_days: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDashboardDays.to_string())
                .default(default.dashboard_days)
                .interact_text()?,
            page_size: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptPageSize.to_string())
                .default(default.page_size)
                .interact_text()?,
            default_range_days: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDefaultRangeDays.to_string())
                .default(default.default_range_days)
                .interact_text()?,
            seed: (seed != DEFAULT_SEED).then_some(seed),
        });

        Ok(config)
    }
}
