//! Conference state visible to dialogs

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::participant::{Participant, ParticipantId, ParticipantRegistry};

/// The slice of conference state the authorization prompt reads
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConferenceState {
    /// Everyone in the conference
    pub participants: ParticipantRegistry,

    /// Whether the local user is currently sharing their screen
    #[serde(default)]
    pub sharing_screen: bool,
}

impl ConferenceState {
    /// Create an empty conference state
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a participant by ID
    pub fn participant(&self, id: &ParticipantId) -> Result<&Participant> {
        self.participants.get(id)
    }

    /// Update the screen sharing flag
    pub fn set_sharing_screen(&mut self, sharing: bool) {
        if self.sharing_screen != sharing {
            tracing::info!("Screen sharing {}", if sharing { "started" } else { "stopped" });
        }
        self.sharing_screen = sharing;
    }
}
