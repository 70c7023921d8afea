use pdnsgrep_application::use_cases::SearchRecordsUseCase;
use pdnsgrep_domain::{records_equal, SearchQuery, SearchResultItem};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// Re-runs a search at a fixed interval and reports the result set each
/// time it differs from the previous one.
///
/// A failed tick is logged and the job keeps polling. The job stops once
/// its cancellation token fires.
///
/// # Example
///
/// ```rust,ignore
/// WatchJob::new(search, query)
///     .with_interval(Duration::from_secs(5))
///     .with_cancellation(token)
///     .run(|records| render(records))
///     .await;
/// ```
pub struct WatchJob {
    search: Arc<SearchRecordsUseCase>,
    query: SearchQuery,
    interval: Duration,
    shutdown: CancellationToken,
}

impl WatchJob {
    pub fn new(search: Arc<SearchRecordsUseCase>, query: SearchQuery) -> Self {
        Self {
            search,
            query,
            interval: Duration::from_secs(5),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Polls until cancelled. `on_change` sees the first successful result
    /// and every later result that differs from the one before it.
    /// Returns how many times `on_change` was called.
    pub async fn run<F>(self, mut on_change: F) -> usize
    where
        F: FnMut(&[SearchResultItem]) + Send,
    {
        info!(
            terms = self.query.terms.len(),
            interval_ms = self.interval.as_millis() as u64,
            "Starting watch job"
        );

        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut previous: Option<Vec<SearchResultItem>> = None;
        let mut updates = 0;

        loop {
            tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => {
                    info!("WatchJob: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    // Dropping the search on shutdown cancels its units.
                    let searched = tokio::select! {
                        biased;
                        _ = self.shutdown.cancelled() => {
                            info!("WatchJob: shutting down during search");
                            break;
                        }
                        searched = self.search.execute_query(&self.query) => searched,
                    };

                    let records = match searched {
                        Ok(records) => records,
                        Err(e) => {
                            error!(error = %e, "Watch search failed");
                            continue;
                        }
                    };

                    let changed = previous
                        .as_deref()
                        .map_or(true, |prev| !records_equal(prev, &records));

                    if changed {
                        debug!(results = records.len(), "Search results changed");
                        on_change(&records);
                        updates += 1;
                        previous = Some(records);
                    }
                }
            }
        }

        updates
    }
}
