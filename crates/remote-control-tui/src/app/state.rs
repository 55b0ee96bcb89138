//! Application state

use remote_control_core::{ConferenceState, ParticipantId, PermissionReply};

/// Maximum number of sent replies kept for display
const REPLY_HISTORY: usize = 20;

/// Current screen/view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Participant list and session status
    #[default]
    Conference,

    /// Help screen
    Help,
}

/// Application state
pub struct AppState {
    /// Current screen
    pub current_screen: Screen,

    /// Participants and screen sharing flag
    pub conference: ConferenceState,

    /// Participant list selection index
    pub participant_index: usize,

    /// Permission replies sent to requesters, most recent last
    pub sent_replies: Vec<PermissionReply>,

    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ConferenceState::default())
    }
}

impl AppState {
    /// Create new application state around a conference
    pub fn new(conference: ConferenceState) -> Self {
        Self {
            current_screen: Screen::Conference,
            conference,
            participant_index: 0,
            sent_replies: Vec::new(),
            error_message: None,
        }
    }

    /// Keep the selection inside the participant list
    pub fn clamp_selection(&mut self) {
        let count = self.conference.participants.len();
        self.participant_index = self.participant_index.min(count.saturating_sub(1));
    }

    /// Remember a reply that was sent
    pub fn record_reply(&mut self, reply: PermissionReply) {
        self.sent_replies.push(reply);
        if self.sent_replies.len() > REPLY_HISTORY {
            self.sent_replies.remove(0);
        }
    }

    /// Display name for a participant, falling back to the raw ID
    pub fn display_name(&self, id: &ParticipantId) -> String {
        self.conference
            .participant(id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|_| id.to_string())
    }

    /// Clear the error message
    pub fn clear_messages(&mut self) {
        self.error_message = None;
    }
}
