//! Live dashboard in the terminal
//!
//! The poll task publishes snapshots; this module owns the terminal, redraws
//! whenever a snapshot or key event arrives, and forwards retry requests to
//! the poll task.

use crate::config::BoardConfig;
use crate::error::Result;
use crate::refresher::Refresher;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use sheets::ValuesSource;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

pub mod app;
pub mod events;
pub mod ui;

pub use app::App;
pub use events::{action_for, Action, Event, EventHandler};

/// Input tick rate
const TICK_RATE: Duration = Duration::from_millis(250);

/// Run the dashboard until the user quits
pub async fn run(config: &BoardConfig, source: Arc<dyn ValuesSource>) -> Result<()> {
    info!("Starting dashboard");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, config, source).await;

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("Dashboard exited");
    result
}

async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    config: &BoardConfig,
    source: Arc<dyn ValuesSource>,
) -> Result<()> {
    let handle = Refresher::new(source, config.poll_interval())
        .with_error_message(config.ui.labels.error_message.clone())
        .spawn();
    let mut snapshots = handle.subscribe();
    let mut events = EventHandler::new(TICK_RATE);
    let mut app = App::new(config);

    let outcome = loop {
        if let Err(err) = terminal.draw(|f| ui::draw(f, &app)) {
            break Err(err.into());
        }

        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    debug!("Poll task went away");
                    break Ok(());
                }
                app.update(snapshots.borrow_and_update().clone());
            }
            event = events.next() => match event {
                Some(Event::Key(key)) => {
                    if let Some(action) = action_for(key) {
                        app.handle(action);
                    }
                }
                Some(Event::Resize(_, _)) | Some(Event::Tick) => {}
                None => break Ok(()),
            },
        }

        if app.take_refresh_request() {
            handle.refresh_now();
        }

        if app.should_quit() {
            break Ok(());
        }
    };

    handle.shutdown().await;
    outcome
}
