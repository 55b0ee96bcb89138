//! Event handling for the TUI

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use remote_control_core::{Participant, ParticipantId};
use tokio::sync::mpsc;

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input
    Key(KeyEvent),
    /// Terminal tick (for notification expiry)
    Tick,
    /// A participant asked to control the local desktop
    RemoteControlRequest { participant_id: ParticipantId },
    /// Someone joined the conference
    ParticipantJoined(Participant),
    /// Someone left the conference
    ParticipantLeft(ParticipantId),
    /// Local screen sharing started or stopped
    ScreenSharingChanged(bool),
}

/// Channel conference events arrive on, plus keyboard polling
pub struct EventHandler {
    /// Sender for events
    sender: mpsc::UnboundedSender<Event>,
    /// Receiver for events
    receiver: mpsc::UnboundedReceiver<Event>,
    /// How long to wait for a key press per frame
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            sender,
            receiver,
            tick_rate,
        }
    }

    /// Get a clone of the sender for other tasks to send events
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.sender.clone()
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Try to receive the next event (non-blocking)
    pub fn try_recv(&mut self) -> Option<Event> {
        self.receiver.try_recv().ok()
    }

    /// Poll for keyboard events with timeout
    pub fn poll_keyboard(&self, timeout: Duration) -> std::io::Result<Option<KeyEvent>> {
        if event::poll(timeout)? {
            if let CrosstermEvent::Key(key) = event::read()? {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }
}
