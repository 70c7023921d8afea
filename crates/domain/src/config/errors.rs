use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Token needs to be defined")]
    MissingToken,

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    #[error("Timeout must be greater than zero")]
    InvalidTimeout,

    #[error("Watch interval must be greater than zero")]
    InvalidInterval,

    #[error("Delimiter must be a single ASCII character, got {0:?}")]
    InvalidDelimiter(String),

    #[error("Output format {0} not known (valid options: table, csv, raw, json)")]
    UnknownOutputFormat(String),
}
