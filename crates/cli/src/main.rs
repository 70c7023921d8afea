//! # pdnsgrep
//!
//! Searches a PowerDNS server for every given term at once and prints the
//! combined results.

mod bootstrap;
mod cli;
mod output;

use clap::Parser;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use pdnsgrep_application::use_cases::SearchRecordsUseCase;
use pdnsgrep_domain::config::OutputConfig;
use pdnsgrep_domain::{Config, SearchQuery, SearchResultItem};
use pdnsgrep_infrastructure::PowerDnsClient;
use pdnsgrep_jobs::WatchJob;
use std::io::{self, Write};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    if let Some(shell) = cli.show_completion {
        cli::Cli::write_completion(shell, &mut io::stdout());
        return Ok(());
    }

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config);
    bootstrap::log_config(&config, cli.config.as_deref());

    let client = Arc::new(PowerDnsClient::from_config(&config.api)?);
    let search = Arc::new(SearchRecordsUseCase::new(client));

    let query = SearchQuery::new(cli.terms.clone())
        .with_object_type(config.search.object_type)
        .with_record_type(config.search.record_type.clone())
        .with_sort(config.search.sort_by);

    if cli.watch {
        run_watch(search, query, &config).await;
        return Ok(());
    }

    let records = search
        .execute_query(&query)
        .await
        .inspect_err(|e| error!(error = %e, "Search failed"))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::write_results(&mut out, &records, &config.output)?;
    out.flush()?;

    Ok(())
}

async fn run_watch(search: Arc<SearchRecordsUseCase>, query: SearchQuery, config: &Config) {
    let shutdown = CancellationToken::new();

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupt received, stopping watch");
        }
        signal_token.cancel();
    });

    let output_config = config.output.clone();
    let updates = WatchJob::new(search, query)
        .with_interval(config.watch.interval())
        .with_cancellation(shutdown)
        .run(move |records| {
            if let Err(e) = redraw(records, &output_config) {
                error!(error = %e, "Failed to render watch results");
            }
        })
        .await;

    info!(updates, "Watch stopped");
}

fn redraw(records: &[SearchResultItem], config: &OutputConfig) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    output::write_results(&mut out, records, config)?;
    out.flush()?;
    Ok(())
}
