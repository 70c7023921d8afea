use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::ConfigError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Raw,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Csv => "csv",
            OutputFormat::Raw => "raw",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "raw" => Ok(OutputFormat::Raw),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::UnknownOutputFormat(s.to_string())),
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Column delimiter for csv output (default: ";")
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    #[serde(default)]
    pub no_header: bool,

    #[serde(default)]
    pub no_color: bool,

    /// Print per-type and per-zone counts instead of the records
    #[serde(default)]
    pub stats: bool,
}

impl OutputConfig {
    /// The delimiter as a single byte; `validate` guarantees this exists.
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter.as_bytes().first().copied().unwrap_or(b';')
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            delimiter: default_delimiter(),
            no_header: false,
            no_color: false,
            stats: false,
        }
    }
}

fn default_delimiter() -> String {
    ";".to_string()
}
