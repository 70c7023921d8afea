#[path = "../common/mod.rs"]
mod common;

use common::{record_json, FakePowerDns, API_KEY};
use pdnsgrep_application::use_cases::SearchRecordsUseCase;
use pdnsgrep_domain::{SearchQuery, SearchResultItem};
use pdnsgrep_infrastructure::{HttpsTransport, PowerDnsClient};
use pdnsgrep_jobs::WatchJob;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn test_watch_reports_changes_from_the_api() {
    let server = FakePowerDns::start().await.expect("Failed to start fake API");
    server.respond(
        "*web*",
        vec![record_json("web.example.com.", "A", "192.0.2.1", "example.com.", 300)],
    );

    let transport = HttpsTransport::new(Duration::from_secs(5)).unwrap();
    let client = PowerDnsClient::with_transport(&server.url(), API_KEY, transport);
    let search = Arc::new(SearchRecordsUseCase::new(Arc::new(client)));

    let token = CancellationToken::new();
    let seen: Arc<Mutex<Vec<Vec<SearchResultItem>>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let job = WatchJob::new(search, SearchQuery::new(vec!["web".to_string()]))
        .with_interval(Duration::from_millis(20))
        .with_cancellation(token.clone());
    let handle = tokio::spawn(job.run(move |records| {
        sink.lock().unwrap().push(records.to_vec());
    }));

    tokio::time::sleep(Duration::from_millis(150)).await;
    server.respond(
        "*web*",
        vec![record_json("web.example.com.", "A", "192.0.2.2", "example.com.", 300)],
    );
    tokio::time::sleep(Duration::from_millis(150)).await;
    token.cancel();

    let updates = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("watch job should stop")
        .unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(updates, 2);
    assert_eq!(seen[0][0].content, "192.0.2.1");
    assert_eq!(seen[1][0].content, "192.0.2.2");
    assert!(server.hits() > 2);
}
