use pdnsgrep_domain::Config;
use tracing::debug;

/// Logs go to stderr so stdout only carries search results.
pub fn init_logging(config: &Config) {
    let log_level = config.logging.level.parse().unwrap_or(tracing::Level::WARN);

    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .with_max_level(log_level)
        .with_ansi(!config.output.no_color)
        .with_writer(std::io::stderr)
        .init();

    debug!("Logging initialized at level: {}", config.logging.level);
}
