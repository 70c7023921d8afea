use pdnsgrep_domain::{
    filter_by_type, sort_records, DomainError, ObjectTypeFilter, SearchQuery, SearchRequest,
    SearchResultItem,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use crate::ports::SearchClient;

/// Items buffered between the search units and the collector. Units block
/// on a full channel until the collector catches up.
const ITEM_CHANNEL_CAPACITY: usize = 1_024;

/// A unit's error, tagged with the term that produced it.
#[derive(Debug)]
struct TermFailure {
    term: Arc<str>,
    error: DomainError,
}

/// Result of one search unit: how many items it emitted, or why it stopped.
type SearchOutcome = Result<usize, TermFailure>;

/// Runs one search per term concurrently and merges the results.
///
/// ## Fan-out / fan-in
///
/// Each term becomes its own task on the runtime. Tasks push their items
/// into one bounded channel which `execute` drains while the searches are
/// still running. A coordinator task joins every unit and only then drops
/// the last sender, so the drain loop ends exactly once, after the last
/// producer is done.
///
/// ## Failure
///
/// The first failing unit cancels a shared [`CancellationToken`]. The other
/// units check the token before every emission and stop without sending
/// anything else. A unit already waiting on the server finishes that request
/// first. When any unit failed, the whole call returns that error and the
/// items collected so far are dropped.
///
/// Result order across terms is not defined; sort afterwards when it matters.
pub struct SearchRecordsUseCase {
    client: Arc<dyn SearchClient>,
}

impl SearchRecordsUseCase {
    pub fn new(client: Arc<dyn SearchClient>) -> Self {
        Self { client }
    }

    #[instrument(skip(self, terms, object_type), fields(terms = terms.len(), object_type = %object_type))]
    pub async fn execute(
        &self,
        terms: &[String],
        object_type: ObjectTypeFilter,
    ) -> Result<Vec<SearchResultItem>, DomainError> {
        if terms.is_empty() {
            return Err(DomainError::NoSearchTerms);
        }

        let cancel = CancellationToken::new();
        // Dropping this future halts the units at their next emission.
        let _cancel_on_drop = cancel.clone().drop_guard();

        let (tx, mut rx) = mpsc::channel(ITEM_CHANNEL_CAPACITY);
        let mut units = JoinSet::new();

        for term in terms {
            let request = SearchRequest::for_term(term, object_type);
            units.spawn(run_search_unit(
                Arc::clone(&self.client),
                Arc::from(term.as_str()),
                request,
                tx.clone(),
                cancel.clone(),
            ));
        }

        let coordinator = tokio::spawn(wait_for_units(units, tx, cancel));

        let mut combined = Vec::new();
        while let Some(item) = rx.recv().await {
            combined.push(item);
        }

        let failure = coordinator
            .await
            .map_err(|e| DomainError::TaskFailed(e.to_string()))?;

        if let Some(failure) = failure {
            warn!(
                term = %failure.term,
                error = %failure.error,
                discarded = combined.len(),
                "Search failed, discarding partial results"
            );
            return Err(failure.error);
        }

        info!(results = combined.len(), "Search completed");
        Ok(combined)
    }

    /// Full pipeline for one invocation: search, then type filter, then sort.
    pub async fn execute_query(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<SearchResultItem>, DomainError> {
        let mut records = self.execute(&query.terms, query.object_type).await?;

        if let Some(record_type) = &query.record_type {
            records = filter_by_type(&records, record_type);
            debug!(record_type = %record_type, remaining = records.len(), "Filtered on record type");
        }

        if let Some(field) = query.sort_by {
            sort_records(&mut records, field);
        }

        Ok(records)
    }
}

async fn run_search_unit(
    client: Arc<dyn SearchClient>,
    term: Arc<str>,
    request: SearchRequest,
    tx: mpsc::Sender<SearchResultItem>,
    cancel: CancellationToken,
) -> SearchOutcome {
    debug!(term = %term, pattern = %request.pattern, "Searching for term");

    let result = match client.search(&request).await {
        Ok(items) => emit_items(items, &tx, &cancel).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(emitted) => {
            debug!(term = %term, emitted, "Search unit finished");
            Ok(emitted)
        }
        Err(error) => {
            cancel.cancel();
            Err(TermFailure { term, error })
        }
    }
}

async fn emit_items(
    items: Vec<SearchResultItem>,
    tx: &mpsc::Sender<SearchResultItem>,
    cancel: &CancellationToken,
) -> Result<usize, DomainError> {
    let count = items.len();
    for item in items {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(DomainError::Cancelled),
            sent = tx.send(item) => sent.map_err(|_| DomainError::Cancelled)?,
        }
    }
    Ok(count)
}

/// Joins every unit, then closes the item channel by dropping the
/// original sender. Returns the failure to report, if any.
async fn wait_for_units(
    mut units: JoinSet<SearchOutcome>,
    tx: mpsc::Sender<SearchResultItem>,
    cancel: CancellationToken,
) -> Option<TermFailure> {
    let mut reported: Option<TermFailure> = None;

    while let Some(joined) = units.join_next().await {
        let outcome = joined.unwrap_or_else(|e| {
            Err(TermFailure {
                term: Arc::from("<panicked>"),
                error: DomainError::TaskFailed(e.to_string()),
            })
        });

        let Err(failure) = outcome else {
            continue;
        };
        cancel.cancel();

        // A sibling's cancellation never hides the failure that caused it.
        let replace = match &reported {
            None => true,
            Some(current) => {
                current.error == DomainError::Cancelled && failure.error != DomainError::Cancelled
            }
        };
        if replace {
            reported = Some(failure);
        }
    }

    drop(tx);
    reported
}
