//! Remote control authorization prompt
//!
//! Asks the local user whether a participant may control their desktop.
//! The prompt only reads conference state; the decision goes to an
//! [`AuthorizationHandler`] and closing goes through a [`Dispatch`].

use ratatui::prelude::*;
use remote_control_core::{
    AuthorizationHandler, ConferenceState, DialogAction, Dispatch, ParticipantId, Result,
    Translator,
};

use crate::ui::components::confirm::ConfirmDialog;
use crate::ui::Theme;

pub const TITLE_KEY: &str = "dialog.remoteControlTitle";
pub const MESSAGE_KEY: &str = "dialog.remoteControlRequestMessage";
pub const SHARE_SCREEN_WARNING_KEY: &str = "dialog.remoteControlShareScreenWarning";
pub const OK_KEY: &str = "dialog.Allow";
pub const CANCEL_KEY: &str = "dialog.Cancel";

/// Translated texts of the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptContent {
    pub title: String,
    pub message: String,
    pub warning: Option<String>,
    pub ok_label: String,
    pub cancel_label: String,
}

/// Props of the authorization prompt, derived from conference state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationPrompt {
    participant_id: ParticipantId,
    display_name: String,
    sharing_screen: bool,
}

impl AuthorizationPrompt {
    /// Derive the prompt for `participant_id`.
    ///
    /// Fails with `ParticipantNotFound` if the participant is not in the
    /// conference.
    pub fn from_state(state: &ConferenceState, participant_id: &ParticipantId) -> Result<Self> {
        let participant = state.participant(participant_id)?;
        Ok(Self {
            participant_id: participant_id.clone(),
            display_name: participant.name.clone(),
            sharing_screen: state.sharing_screen,
        })
    }

    pub fn participant_id(&self) -> &ParticipantId {
        &self.participant_id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Translate every text the prompt shows.
    ///
    /// The share screen warning is only present while the local user is not
    /// already sharing, since allowing control starts sharing.
    pub fn content(&self, t: &Translator) -> PromptContent {
        let warning = if self.sharing_screen {
            None
        } else {
            Some(t.t(SHARE_SCREEN_WARNING_KEY, &[]))
        };

        PromptContent {
            title: t.t(TITLE_KEY, &[]),
            message: t.t(MESSAGE_KEY, &[("user", &self.display_name)]),
            warning,
            ok_label: t.t(OK_KEY, &[]),
            cancel_label: t.t(CANCEL_KEY, &[]),
        }
    }

    /// Render the prompt centered over `area`
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme, t: &Translator) {
        let content = self.content(t);
        ConfirmDialog::new(
            &content.title,
            &content.message,
            &content.ok_label,
            &content.cancel_label,
        )
        .with_warning(content.warning.as_deref())
        .render(frame, area, theme);
    }

    /// The user declined.
    ///
    /// Returns `true`: the host should close the dialog itself.
    pub fn on_decline<H: AuthorizationHandler>(&self, handler: &H) -> Result<bool> {
        handler.deny(&self.participant_id)?;
        Ok(true)
    }

    /// The user allowed control.
    ///
    /// Hides the dialog before granting. Returns `false`: the dialog is
    /// already closed and must not be closed again.
    pub fn on_accept<D: Dispatch, H: AuthorizationHandler>(
        &self,
        dispatcher: &mut D,
        handler: &H,
    ) -> Result<bool> {
        dispatcher.dispatch(DialogAction::Hide);
        handler.grant(&self.participant_id)?;
        Ok(false)
    }
}
