//! Error types for remote control authorization

use thiserror::Error;

use crate::participant::ParticipantId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Participant not found: {0}")]
    ParticipantNotFound(ParticipantId),

    #[error("No pending remote control request from {0}")]
    NoPendingRequest(ParticipantId),

    #[error("Remote control session already active with {0}")]
    SessionActive(ParticipantId),

    #[error("Permission reply channel closed")]
    ChannelClosed,

    #[error("Translation error: {0}")]
    Translation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
