//! Dashboard view state

use crate::board::{club_rows, ClubRow};
use crate::config::{BoardConfig, ColumnsConfig, Layout, UiLabels};
use crate::refresher::{BoardSnapshot, PollFailure};
use crate::status::StatusClassifier;
use crate::tui::events::Action;
use tracing::debug;

/// Rows moved by PageUp/PageDown
const PAGE: usize = 10;

/// Dashboard application
///
/// Holds the latest published snapshot plus purely presentational state
/// (layout and scroll offset).
#[derive(Debug)]
pub struct App {
    snapshot: BoardSnapshot,
    classifier: StatusClassifier,
    columns: ColumnsConfig,
    labels: UiLabels,
    layout: Layout,
    /// First visible row
    pub scroll: usize,
    running: bool,
    refresh_requested: bool,
}

impl App {
    /// Create a new app instance from config
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            snapshot: BoardSnapshot::default(),
            classifier: config.classifier(),
            columns: config.columns.clone(),
            labels: config.ui.labels.clone(),
            layout: config.ui.layout,
            scroll: 0,
            running: true,
            refresh_requested: false,
        }
    }

    /// Replace the displayed snapshot
    pub fn update(&mut self, snapshot: BoardSnapshot) {
        self.snapshot = snapshot;
        self.clamp_scroll();
    }

    pub fn snapshot(&self) -> &BoardSnapshot {
        &self.snapshot
    }

    /// Rows for the current snapshot, classified afresh
    pub fn rows(&self) -> Vec<ClubRow> {
        club_rows(&self.snapshot.table, &self.columns, &self.classifier)
    }

    pub fn row_count(&self) -> usize {
        self.snapshot.table.len()
    }

    pub fn error(&self) -> Option<&PollFailure> {
        self.snapshot.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.snapshot.is_loading()
    }

    pub fn labels(&self) -> &UiLabels {
        &self.labels
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: Layout) {
        debug!("Switching layout to: {}", layout);
        self.layout = layout;
        self.scroll = 0;
    }

    /// Cycle table → cards → split
    pub fn next_layout(&mut self) {
        let layout = match self.layout {
            Layout::Table => Layout::Cards,
            Layout::Cards => Layout::Split,
            Layout::Split => Layout::Table,
        };
        self.set_layout(layout);
    }

    /// Cycle split → cards → table
    pub fn previous_layout(&mut self) {
        let layout = match self.layout {
            Layout::Table => Layout::Split,
            Layout::Cards => Layout::Table,
            Layout::Split => Layout::Cards,
        };
        self.set_layout(layout);
    }

    pub fn scroll_up(&mut self, by: usize) {
        self.scroll = self.scroll.saturating_sub(by);
    }

    pub fn scroll_down(&mut self, by: usize) {
        self.scroll = self.scroll.saturating_add(by);
        self.clamp_scroll();
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.row_count().saturating_sub(1));
    }

    /// Apply a key action
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Quit => self.quit(),
            Action::Refresh => self.refresh_requested = true,
            Action::NextLayout => self.next_layout(),
            Action::PreviousLayout => self.previous_layout(),
            Action::ScrollUp => self.scroll_up(1),
            Action::ScrollDown => self.scroll_down(1),
            Action::PageUp => self.scroll_up(PAGE),
            Action::PageDown => self.scroll_down(PAGE),
            Action::Top => self.scroll = 0,
            Action::Bottom => self.scroll = self.row_count().saturating_sub(1),
        }
    }

    /// Whether a manual refresh was requested since the last call
    pub fn take_refresh_request(&mut self) -> bool {
        std::mem::take(&mut self.refresh_requested)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn should_quit(&self) -> bool {
        !self.running
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}
