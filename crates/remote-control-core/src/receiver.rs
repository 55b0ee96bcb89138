//! Receiver side of a remote control session
//!
//! Tracks who asked for control, who currently has it, and answers each
//! request on the reply channel.

use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard};

use tokio::sync::mpsc;

use crate::authorization::AuthorizationHandler;
use crate::error::{Error, Result};
use crate::participant::ParticipantId;
use crate::protocol::{Permission, PermissionReply};

#[derive(Debug, Default)]
struct ReceiverState {
    pending: BTreeSet<ParticipantId>,
    controller: Option<ParticipantId>,
}

/// Answers remote control requests addressed to the local user
#[derive(Debug)]
pub struct RemoteControlReceiver {
    state: Mutex<ReceiverState>,
    replies: mpsc::UnboundedSender<PermissionReply>,
}

impl RemoteControlReceiver {
    /// Create a receiver and the channel its replies are delivered on
    pub fn new() -> (Self, mpsc::UnboundedReceiver<PermissionReply>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::with_sender(tx), rx)
    }

    /// Create a receiver that replies on an existing channel
    pub fn with_sender(replies: mpsc::UnboundedSender<PermissionReply>) -> Self {
        Self {
            state: Mutex::new(ReceiverState::default()),
            replies,
        }
    }

    fn lock(&self) -> MutexGuard<'_, ReceiverState> {
        // State stays consistent across a panic in a caller, so recover it.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Record an incoming request from `participant`
    pub fn request(&self, participant: &ParticipantId) -> Result<()> {
        let mut state = self.lock();
        if let Some(controller) = &state.controller {
            return Err(Error::SessionActive(controller.clone()));
        }
        tracing::info!("Remote control requested by {}", participant);
        state.pending.insert(participant.clone());
        Ok(())
    }

    /// Whether `participant` is waiting for an answer
    pub fn is_pending(&self, participant: &ParticipantId) -> bool {
        self.lock().pending.contains(participant)
    }

    /// The participant currently controlling the desktop
    pub fn controller(&self) -> Option<ParticipantId> {
        self.lock().controller.clone()
    }

    /// End the active session, returning who had control
    pub fn stop(&self) -> Option<ParticipantId> {
        let stopped = self.lock().controller.take();
        if let Some(id) = &stopped {
            tracing::info!("Remote control session with {} stopped", id);
        }
        stopped
    }

    /// Forget everything about a participant who left the conference.
    ///
    /// Returns true if they were controlling the desktop.
    pub fn participant_left(&self, participant: &ParticipantId) -> bool {
        let mut state = self.lock();
        state.pending.remove(participant);
        if state.controller.as_ref() == Some(participant) {
            state.controller = None;
            tracing::info!("Controller {} left, session stopped", participant);
            true
        } else {
            false
        }
    }

    fn reply(&self, participant: &ParticipantId, permission: Permission) -> Result<()> {
        self.replies
            .send(PermissionReply::new(participant.clone(), permission))
            .map_err(|_| Error::ChannelClosed)
    }
}

impl AuthorizationHandler for RemoteControlReceiver {
    fn grant(&self, participant: &ParticipantId) -> Result<()> {
        {
            let mut state = self.lock();
            if !state.pending.remove(participant) {
                return Err(Error::NoPendingRequest(participant.clone()));
            }
            state.controller = Some(participant.clone());
        }
        tracing::info!("Granted remote control to {}", participant);
        self.reply(participant, Permission::Grant)
    }

    fn deny(&self, participant: &ParticipantId) -> Result<()> {
        self.lock().pending.remove(participant);
        tracing::info!("Denied remote control to {}", participant);
        self.reply(participant, Permission::Deny)
    }
}
