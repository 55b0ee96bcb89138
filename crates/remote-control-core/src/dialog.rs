//! Dialog actions and the dialog stack that hosts modal prompts

use serde::{Deserialize, Serialize};

use crate::participant::ParticipantId;

/// Which modal dialog is being shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DialogKind {
    /// Ask the local user to allow or deny remote desktop control
    RemoteControlAuthorization { participant_id: ParticipantId },
}

/// Actions that open or close the current dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogAction {
    Show(DialogKind),
    Hide,
}

/// Something that accepts dialog actions
pub trait Dispatch {
    fn dispatch(&mut self, action: DialogAction);
}

/// Holds the dialog currently shown to the user.
///
/// Only one dialog is visible at a time; showing a new one replaces it.
#[derive(Debug, Default)]
pub struct DialogStack {
    current: Option<DialogKind>,
    dispatched: u64,
}

impl DialogStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// The dialog currently shown, if any
    pub fn current(&self) -> Option<&DialogKind> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Number of actions dispatched so far
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }
}

impl Dispatch for DialogStack {
    fn dispatch(&mut self, action: DialogAction) {
        tracing::debug!("Dialog action: {:?}", action);
        self.dispatched += 1;
        match action {
            DialogAction::Show(kind) => {
                if let Some(previous) = self.current.replace(kind) {
                    tracing::debug!("Replaced dialog {:?}", previous);
                }
            }
            DialogAction::Hide => self.current = None,
        }
    }
}
