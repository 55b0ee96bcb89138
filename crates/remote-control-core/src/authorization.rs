//! Authorization handler seam
//!
//! Whatever owns the remote control session implements this trait. Dialogs
//! only ever report the user's decision through it.

use crate::error::Result;
use crate::participant::ParticipantId;

/// Receives the local user's answer to a remote control request.
pub trait AuthorizationHandler {
    /// Allow `participant` to control the local desktop
    fn grant(&self, participant: &ParticipantId) -> Result<()>;

    /// Refuse the request from `participant`
    fn deny(&self, participant: &ParticipantId) -> Result<()>;
}

impl<T: AuthorizationHandler + ?Sized> AuthorizationHandler for &T {
    fn grant(&self, participant: &ParticipantId) -> Result<()> {
        (**self).grant(participant)
    }

    fn deny(&self, participant: &ParticipantId) -> Result<()> {
        (**self).deny(participant)
    }
}

impl<T: AuthorizationHandler + ?Sized> AuthorizationHandler for std::sync::Arc<T> {
    fn grant(&self, participant: &ParticipantId) -> Result<()> {
        (**self).grant(participant)
    }

    fn deny(&self, participant: &ParticipantId) -> Result<()> {
        (**self).deny(participant)
    }
}
