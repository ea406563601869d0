//! Background polling of the sheet
//!
//! A [`Refresher`] owns one poll task. Each poll replaces the published table
//! wholesale on success, or keeps the previous table and sets an error on
//! failure. Views observe the published [`BoardSnapshot`] through a
//! `tokio::sync::watch` receiver.
//!
//! Polls never overlap: the fetch is awaited inside the loop, missed ticks are
//! skipped, and manual refresh requests made during a poll collapse into one
//! follow-up poll.

use chrono::{DateTime, Local};
use sheets::{Record, SheetsError, Table, ValuesSource};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{oneshot, watch, Notify};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// A failed poll, as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollFailure {
    /// Localized message for the error panel
    pub message: String,
    /// Technical cause
    pub detail: String,
    /// When the poll failed
    pub at: DateTime<Local>,
}

/// Published dashboard state
#[derive(Debug, Clone, Default)]
pub struct BoardSnapshot {
    /// Table from the last successful poll
    pub table: Arc<Table>,
    /// Set by a failed poll, cleared by the next successful one
    pub error: Option<PollFailure>,
    /// Time of the last successful poll
    pub last_updated: Option<DateTime<Local>>,
    /// Completed polls, successful or not
    pub polls: u64,
    /// Failed polls since the last success
    pub consecutive_failures: u64,
}

impl BoardSnapshot {
    /// No poll has completed yet
    pub fn is_loading(&self) -> bool {
        self.polls == 0
    }

    pub fn records(&self) -> &[Record] {
        self.table.records()
    }

    /// Replace the table and clear the error
    pub fn apply_success(&mut self, table: Table, at: DateTime<Local>) {
        self.table = Arc::new(table);
        self.error = None;
        self.last_updated = Some(at);
        self.polls += 1;
        self.consecutive_failures = 0;
    }

    /// Keep the table and set the error
    pub fn apply_failure(&mut self, err: &SheetsError, message: &str, at: DateTime<Local>) {
        self.error = Some(PollFailure {
            message: message.to_string(),
            detail: err.to_string(),
            at,
        });
        self.polls += 1;
        self.consecutive_failures += 1;
    }
}

/// Polls a [`ValuesSource`] on a fixed interval
pub struct Refresher {
    source: Arc<dyn ValuesSource>,
    interval: Duration,
    error_message: String,
}

impl Refresher {
    pub fn new(source: Arc<dyn ValuesSource>, interval: Duration) -> Self {
        Self {
            source,
            interval,
            error_message: "Unable to load data, please try again".to_string(),
        }
    }

    /// Message published when a poll fails
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    /// Fetch once and fold the outcome into `snapshot`
    pub async fn poll_once(&self, snapshot: &mut BoardSnapshot) {
        debug!("Polling {}", self.source.describe());

        match self.source.fetch_table().await {
            Ok(table) => {
                if snapshot.error.is_some() {
                    info!("Poll recovered after {} failure(s)", snapshot.consecutive_failures);
                }
                debug!("Loaded {} record(s)", table.len());
                snapshot.apply_success(table, Local::now());
            }
            Err(err) => {
                warn!("Poll of {} failed: {}", self.source.describe(), err);
                snapshot.apply_failure(&err, &self.error_message, Local::now());
            }
        }
    }

    /// Start the poll task. The first poll runs immediately.
    pub fn spawn(self) -> RefresherHandle {
        let (sender, receiver) = watch::channel(BoardSnapshot::default());
        let refresh = Arc::new(Notify::new());
        let (stop_tx, stop_rx) = oneshot::channel();

        info!(
            "Polling {} every {:?}",
            self.source.describe(),
            self.interval
        );
        let task = tokio::spawn(self.run(sender, Arc::clone(&refresh), stop_rx));

        RefresherHandle {
            receiver,
            refresh,
            stop: Some(stop_tx),
            task: Some(task),
        }
    }

    async fn run(
        self,
        sender: watch::Sender<BoardSnapshot>,
        refresh: Arc<Notify>,
        mut stop: oneshot::Receiver<()>,
    ) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut snapshot = BoardSnapshot::default();

        loop {
            tokio::select! {
                _ = &mut stop => break,
                _ = ticker.tick() => {}
                _ = refresh.notified() => {
                    debug!("Manual refresh requested");
                    ticker.reset();
                }
            }

            tokio::select! {
                _ = &mut stop => break,
                _ = self.poll_once(&mut snapshot) => {}
            }

            sender.send_replace(snapshot.clone());
        }

        debug!("Poll task stopped");
    }
}

/// Owner of a running poll task
///
/// Dropping the handle without calling [`RefresherHandle::shutdown`] aborts
/// the task.
#[derive(Debug)]
pub struct RefresherHandle {
    receiver: watch::Receiver<BoardSnapshot>,
    refresh: Arc<Notify>,
    stop: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl RefresherHandle {
    /// New receiver of published snapshots
    pub fn subscribe(&self) -> watch::Receiver<BoardSnapshot> {
        self.receiver.clone()
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> BoardSnapshot {
        self.receiver.borrow().clone()
    }

    /// Poll as soon as the current poll (if any) finishes
    pub fn refresh_now(&self) {
        self.refresh.notify_one();
    }

    /// Stop polling and wait for the task to finish
    pub async fn shutdown(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                warn!("Poll task ended abnormally: {}", err);
            }
        }
        info!("Polling stopped");
    }
}

impl Drop for RefresherHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
