use std::{
    ffi::OsString,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    currency::{CurrencyCode, FormatOptions, LocaleConfig, LocaleFormatter},
    errors::ConfigError,
};

const APP_DIR: &str = "pulsewrap";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

pub const DEFAULT_REPORT_TITLE: &str = "PulseWrap KPI Recap";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub currency: String,
    pub locale: LocaleConfig,
    pub format: FormatOptions,
    pub report_title: String,
    /// Directory holding `kpi_daily_<V>.json` files; embedded demos are used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "USD".into(),
            locale: LocaleConfig::default(),
            format: FormatOptions::default(),
            report_title: DEFAULT_REPORT_TITLE.into(),
            data_dir: None,
        }
    }
}

impl Config {
    pub fn formatter(&self) -> LocaleFormatter {
        LocaleFormatter::new(
            self.locale.clone(),
            CurrencyCode::new(self.currency.as_str()),
            self.format.clone(),
        )
    }
}

/// Handles persistence for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Manager for the per-user config file, if the platform has a config dir.
    pub fn user_default() -> Option<Self> {
        dirs::config_dir().map(|dir| Self::new(dir.join(APP_DIR).join(CONFIG_FILE)))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.config_path.exists() {
            let data = fs::read_to_string(&self.config_path)?;
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
            Ok(Config::default())
        }
    }

    /// Writes to a sibling `<name>.tmp` file, then renames it over the target.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        if let Some(dir) = self
            .config_path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
        {
            fs::create_dir_all(dir)?;
        }

        let staging = self.staging_path();
        let mut file = File::create(&staging)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        drop(file);
        fs::rename(&staging, &self.config_path)?;

        tracing::info!(path = %self.config_path.display(), "config saved");
        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .config_path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from(CONFIG_FILE));
        name.push(".");
        name.push(TMP_SUFFIX);
        self.config_path.with_file_name(name)
    }
}
