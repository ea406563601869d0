//! Poll loop behavior against a scripted source, on paused time

use async_trait::async_trait;
use clubboard::{BoardSnapshot, Refresher};
use sheets::{SheetsError, Table, ValuesSource};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

#[derive(Clone, Copy)]
enum Step {
    Clubs(&'static [&'static str]),
    Fail(u16),
}

/// Plays back `steps` in order, repeating the last one
struct ScriptedSource {
    steps: Vec<Step>,
    delay: Duration,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedSource {
    fn new(steps: Vec<Step>) -> Arc<Self> {
        Self::slow(steps, Duration::ZERO)
    }

    fn slow(steps: Vec<Step>, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            steps,
            delay,
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ValuesSource for ScriptedSource {
    async fn fetch_table(&self) -> sheets::Result<Table> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let step = self.steps.get(call).or(self.steps.last()).copied();
        match step {
            Some(Step::Clubs(names)) => {
                let mut rows = vec![vec!["Club_name".to_string()]];
                rows.extend(names.iter().map(|name| vec![name.to_string()]));
                Table::from_rows(rows).ok_or_else(|| SheetsError::EmptyRange("A1".to_string()))
            }
            Some(Step::Fail(status)) => Err(SheetsError::Status {
                status,
                body: "backend error".to_string(),
            }),
            None => Err(SheetsError::EmptyRange("A1".to_string())),
        }
    }

    fn describe(&self) -> String {
        "scripted".to_string()
    }
}

fn names(snapshot: &BoardSnapshot) -> Vec<String> {
    snapshot
        .records()
        .iter()
        .map(|record| record.get("Club_name").unwrap_or_default().to_string())
        .collect()
}

async fn next(receiver: &mut watch::Receiver<BoardSnapshot>) -> BoardSnapshot {
    receiver.changed().await.unwrap();
    receiver.borrow_and_update().clone()
}

const INTERVAL: Duration = Duration::from_millis(3000);

#[tokio::test(start_paused = true)]
async fn test_first_poll_is_immediate() {
    let source = ScriptedSource::new(vec![Step::Clubs(&["Art", "Band"])]);
    let handle = Refresher::new(source.clone(), INTERVAL).spawn();
    let mut receiver = handle.subscribe();

    assert!(handle.snapshot().is_loading());

    let snapshot = next(&mut receiver).await;
    assert!(!snapshot.is_loading());
    assert!(snapshot.error.is_none());
    assert!(snapshot.last_updated.is_some());
    assert_eq!(names(&snapshot), vec!["Art", "Band"]);
    assert_eq!(source.calls(), 1);

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_failure_keeps_previous_records() {
    let source = ScriptedSource::new(vec![Step::Clubs(&["Art"]), Step::Fail(500)]);
    let handle = Refresher::new(source, INTERVAL)
        .with_error_message("Cannot load")
        .spawn();
    let mut receiver = handle.subscribe();

    next(&mut receiver).await;
    let snapshot = next(&mut receiver).await;

    assert_eq!(names(&snapshot), vec!["Art"]);
    let failure = snapshot.error.expect("error should be set");
    assert_eq!(failure.message, "Cannot load");
    assert!(failure.detail.contains("500"));
    assert_eq!(snapshot.consecutive_failures, 1);

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_recovery_clears_error_and_replaces_records() {
    let source = ScriptedSource::new(vec![
        Step::Clubs(&["Art", "Band"]),
        Step::Fail(503),
        Step::Fail(503),
        Step::Clubs(&["Chess"]),
    ]);
    let handle = Refresher::new(source, INTERVAL).spawn();
    let mut receiver = handle.subscribe();

    next(&mut receiver).await;
    next(&mut receiver).await;
    let failing = next(&mut receiver).await;
    assert_eq!(failing.consecutive_failures, 2);

    let recovered = next(&mut receiver).await;
    assert!(recovered.error.is_none());
    assert_eq!(names(&recovered), vec!["Chess"]);
    assert_eq!(recovered.polls, 4);

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_first_poll_failure_has_no_records() {
    let source = ScriptedSource::new(vec![Step::Fail(500)]);
    let handle = Refresher::new(source, INTERVAL).spawn();
    let mut receiver = handle.subscribe();

    let snapshot = next(&mut receiver).await;
    assert!(!snapshot.is_loading());
    assert!(snapshot.error.is_some());
    assert!(snapshot.records().is_empty());
    assert!(snapshot.last_updated.is_none());

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_polls_on_interval() {
    let source = ScriptedSource::new(vec![Step::Clubs(&["Art"])]);
    let handle = Refresher::new(source.clone(), INTERVAL).spawn();

    tokio::time::sleep(INTERVAL * 3 + Duration::from_millis(100)).await;
    assert_eq!(source.calls(), 4);

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_refresh_now_polls_before_interval() {
    let source = ScriptedSource::new(vec![Step::Fail(500), Step::Clubs(&["Art"])]);
    let handle = Refresher::new(source.clone(), Duration::from_secs(3600)).spawn();
    let mut receiver = handle.subscribe();

    let failed = next(&mut receiver).await;
    assert!(failed.error.is_some());

    handle.refresh_now();
    let retried = next(&mut receiver).await;
    assert!(retried.error.is_none());
    assert_eq!(names(&retried), vec!["Art"]);
    assert_eq!(source.calls(), 2);

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_stops_polling() {
    let source = ScriptedSource::new(vec![Step::Clubs(&["Art"])]);
    let handle = Refresher::new(source.clone(), INTERVAL).spawn();
    let mut receiver = handle.subscribe();

    next(&mut receiver).await;
    handle.shutdown().await;
    let calls = source.calls();

    tokio::time::sleep(INTERVAL * 10).await;
    assert_eq!(source.calls(), calls);
}

#[tokio::test(start_paused = true)]
async fn test_slow_polls_never_overlap() {
    let source = ScriptedSource::slow(vec![Step::Clubs(&["Art"])], Duration::from_secs(5));
    let handle = Refresher::new(source.clone(), Duration::from_secs(1)).spawn();

    tokio::time::sleep(Duration::from_secs(20)).await;

    assert_eq!(source.max_in_flight.load(Ordering::SeqCst), 1);
    assert!(source.calls() <= 5);

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_refresh_requests_during_poll_collapse() {
    let source = ScriptedSource::slow(vec![Step::Clubs(&["Art"])], Duration::from_secs(5));
    let handle = Refresher::new(source.clone(), Duration::from_secs(3600)).spawn();
    let mut receiver = handle.subscribe();

    next(&mut receiver).await;
    assert_eq!(source.calls(), 1);

    handle.refresh_now();
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(source.calls(), 2);

    handle.refresh_now();
    handle.refresh_now();
    handle.refresh_now();
    tokio::time::sleep(Duration::from_secs(20)).await;

    assert_eq!(source.calls(), 3);
    assert_eq!(source.max_in_flight.load(Ordering::SeqCst), 1);

    handle.shutdown().await;
}
