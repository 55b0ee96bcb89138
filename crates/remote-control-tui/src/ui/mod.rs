//! UI rendering

pub mod components;
pub mod layout;
pub mod screens;
pub mod theme;

pub use theme::Theme;

use ratatui::prelude::*;
use remote_control_core::DialogKind;

use crate::app::{App, Screen};
use crate::ui::components::authorization::AuthorizationPrompt;

/// Main render function - delegates to the current screen, then overlays
/// the modal dialog and notifications
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    match app.state.current_screen {
        Screen::Conference => screens::conference::render(frame, app),
        Screen::Help => screens::help::render(frame, app),
    }

    if let Some(DialogKind::RemoteControlAuthorization { participant_id }) = app.dialogs.current()
    {
        // A prompt whose participant vanished is closed on the next key press
        if let Ok(prompt) = AuthorizationPrompt::from_state(&app.state.conference, participant_id)
        {
            prompt.render(frame, area, &app.theme, &app.translator);
        }
    }

    app.notifications.render(frame, area, &app.theme);
}
