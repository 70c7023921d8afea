use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::api::ApiConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::output::{OutputConfig, OutputFormat};
use super::search::SearchConfig;
use super::watch::WatchConfig;
use crate::record_sort::SortField;
use crate::search_request::ObjectTypeFilter;

/// Main pdnsgrep configuration, as read from `.pdnsgrep.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line (or through `PDNSGREP_*` variables).
/// Every `Some` replaces what the config file says; `true` flags switch
/// the matching option on.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub url: Option<String>,
    pub token: Option<String>,
    pub timeout_secs: Option<u64>,
    pub object_type: Option<ObjectTypeFilter>,
    pub record_type: Option<String>,
    pub sort_by: Option<SortField>,
    pub output: Option<OutputFormat>,
    pub delimiter: Option<String>,
    pub no_header: bool,
    pub no_color: bool,
    pub stats: bool,
    pub watch_interval_secs: Option<u64>,
    pub log_level: Option<String>,
}

impl Config {
    /// Reads `config_path` when given, otherwise starts from defaults,
    /// then applies the command-line overrides.
    pub fn load(config_path: Option<&Path>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(url) = overrides.url {
            self.api.url = url;
        }
        if let Some(token) = overrides.token {
            self.api.token = token;
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.api.timeout_secs = timeout;
        }
        if let Some(object_type) = overrides.object_type {
            self.search.object_type = object_type;
        }
        if let Some(record_type) = overrides.record_type {
            self.search.record_type = Some(record_type);
        }
        if let Some(sort_by) = overrides.sort_by {
            self.search.sort_by = Some(sort_by);
        }
        if let Some(format) = overrides.output {
            self.output.format = format;
        }
        if let Some(delimiter) = overrides.delimiter {
            self.output.delimiter = delimiter;
        }
        self.output.no_header |= overrides.no_header;
        self.output.no_color |= overrides.no_color;
        self.output.stats |= overrides.stats;
        if let Some(interval) = overrides.watch_interval_secs {
            self.watch.interval_secs = interval;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.token.is_empty() {
            return Err(ConfigError::MissingToken);
        }
        if !self.api.url.starts_with("http://") && !self.api.url.starts_with("https://") {
            return Err(ConfigError::InvalidUrl(self.api.url.clone()));
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        if self.watch.interval_secs == 0 {
            return Err(ConfigError::InvalidInterval);
        }
        let delimiter = &self.output.delimiter;
        if delimiter.len() != 1 || !delimiter.is_ascii() {
            return Err(ConfigError::InvalidDelimiter(delimiter.clone()));
        }
        Ok(())
    }
}
