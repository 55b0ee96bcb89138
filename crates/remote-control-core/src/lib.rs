//! Remote Control Core - Authorization types for remote desktop control
//!
//! This crate holds the pieces a client needs to ask its local user whether a
//! remote participant may take control of the desktop: the participant
//! registry, the authorization handler seam, the receiver that answers the
//! requester, dialog actions and the translator.

pub mod authorization;
pub mod dialog;
pub mod error;
pub mod i18n;
pub mod participant;
pub mod protocol;
pub mod receiver;
pub mod state;

pub use authorization::AuthorizationHandler;
pub use dialog::{DialogAction, DialogKind, DialogStack, Dispatch};
pub use error::{Error, Result};
pub use i18n::Translator;
pub use participant::{Participant, ParticipantId, ParticipantRegistry};
pub use protocol::{Permission, PermissionReply};
pub use receiver::RemoteControlReceiver;
pub use state::ConferenceState;
