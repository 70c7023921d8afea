use pdnsgrep_domain::{CliOverrides, Config};
use std::path::{Path, PathBuf};
use tracing::debug;

const DEFAULT_CONFIG_FILE: &str = ".pdnsgrep.toml";

/// Loads the explicit config file, or `~/.pdnsgrep.toml` when it exists,
/// applies the command-line overrides and validates the result.
pub fn load_config(config_path: Option<&Path>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let path = config_path.map(Path::to_path_buf).or_else(default_config_path);

    let config = Config::load(path.as_deref(), cli_overrides)?;
    config.validate()?;

    Ok(config)
}

/// Logs which configuration is in effect; call once logging is up.
pub fn log_config(config: &Config, config_path: Option<&Path>) {
    let path = config_path.map(Path::to_path_buf).or_else(default_config_path);
    debug!(
        config_file = %path.as_deref().map(|p| p.display().to_string()).unwrap_or_else(|| "none".to_string()),
        url = %config.api.url,
        timeout_secs = config.api.timeout_secs,
        output = %config.output.format,
        object_type = %config.search.object_type,
        "Configuration loaded"
    );
}

fn default_config_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    let path = PathBuf::from(home).join(DEFAULT_CONFIG_FILE);
    path.is_file().then_some(path)
}
