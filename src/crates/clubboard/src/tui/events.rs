//! Terminal input for the dashboard

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::thread;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

/// UI events
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard key pressed
    Key(KeyEvent),

    /// Terminal resized
    Resize(u16, u16),

    /// Periodic tick
    Tick,
}

/// What a key asks the dashboard to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Refresh,
    NextLayout,
    PreviousLayout,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
}

/// Reads terminal events on a background thread
///
/// The thread exits on the first tick after the receiver is dropped.
pub struct EventHandler {
    receiver: UnboundedReceiver<Event>,
    _thread_handle: thread::JoinHandle<()>,
}

impl EventHandler {
    /// Create a new event handler ticking every `tick_rate`
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = unbounded_channel();

        let thread_handle = thread::spawn(move || {
            let mut last_tick = Instant::now();

            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                if event::poll(timeout).unwrap_or(false) {
                    let forwarded = match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            sender.send(Event::Key(key))
                        }
                        Ok(CrosstermEvent::Resize(w, h)) => sender.send(Event::Resize(w, h)),
                        _ => Ok(()),
                    };
                    if forwarded.is_err() {
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if sender.send(Event::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self {
            receiver,
            _thread_handle: thread_handle,
        }
    }

    /// Next event, or `None` once the input thread has stopped
    pub async fn next(&mut self) -> Option<Event> {
        self.receiver.recv().await
    }
}

/// Map a key press to a dashboard action
pub fn action_for(key: KeyEvent) -> Option<Action> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('d'), KeyModifiers::CONTROL) => {
            Some(Action::Quit)
        }
        (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => Some(Action::Quit),
        (KeyCode::Char('r'), _) | (KeyCode::F(5), _) => Some(Action::Refresh),
        (KeyCode::Tab, _) => Some(Action::NextLayout),
        (KeyCode::BackTab, _) => Some(Action::PreviousLayout),
        (KeyCode::Up, _) | (KeyCode::Char('k'), _) => Some(Action::ScrollUp),
        (KeyCode::Down, _) | (KeyCode::Char('j'), _) => Some(Action::ScrollDown),
        (KeyCode::PageUp, _) => Some(Action::PageUp),
        (KeyCode::PageDown, _) => Some(Action::PageDown),
        (KeyCode::Home, _) | (KeyCode::Char('g'), _) => Some(Action::Top),
        (KeyCode::End, _) | (KeyCode::Char('G'), _) => Some(Action::Bottom),
        _ => None,
    }
}
