//! Event handling for TUI.
//!
//! A separate thread forwards terminal events; refresh ticks are produced on
//! the receiving side when the tick deadline passes without input.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Application events.
#[derive(Debug)]
pub enum Event {
    /// Timer tick for data refresh.
    Tick,
    /// Keyboard input (presses only).
    Key(KeyEvent),
    /// Terminal resize (width, height).
    Resize(u16, u16),
}

/// Event handler that polls for terminal events in a separate thread.
pub struct EventHandler {
    rx: Receiver<Event>,
    tx: Sender<Event>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            loop {
                if !event::poll(POLL_INTERVAL).unwrap_or(false) {
                    continue;
                }
                let Ok(evt) = event::read() else {
                    continue;
                };
                let event = match evt {
                    CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
                    CrosstermEvent::Resize(w, h) => Event::Resize(w, h),
                    _ => continue,
                };
                if event_tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self { rx, tx }
    }

    /// Queues an event ahead of anything the terminal sends later.
    pub fn push(&self, event: Event) {
        let _ = self.tx.send(event);
    }

    pub fn receiver(&self) -> &Receiver<Event> {
        &self.rx
    }
}

/// Waits for the next event; yields [`Event::Tick`] once `deadline` passes.
pub fn next_before(rx: &Receiver<Event>, deadline: Instant) -> Result<Event, mpsc::RecvError> {
    let timeout = deadline.saturating_duration_since(Instant::now());
    match rx.recv_timeout(timeout) {
        Ok(event) => Ok(event),
        Err(RecvTimeoutError::Timeout) => Ok(Event::Tick),
        Err(RecvTimeoutError::Disconnected) => Err(mpsc::RecvError),
    }
}
