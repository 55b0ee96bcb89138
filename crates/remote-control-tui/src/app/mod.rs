//! Application state and event handling

pub mod config;
pub mod events;
mod state;

pub use config::TuiConfig;
pub use events::{Event, EventHandler};
pub use state::{AppState, Screen};

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEventKind};
use ratatui::prelude::*;
use remote_control_core::{
    AuthorizationHandler, ConferenceState, DialogAction, DialogKind, DialogStack, Dispatch, Error,
    ParticipantId, PermissionReply, RemoteControlReceiver, Translator,
};
use tokio::sync::mpsc;

use crate::ui::components::authorization::AuthorizationPrompt;
use crate::ui::components::notification::{Notification, NotificationManager};
use crate::ui::{self, Theme};

/// Application result type
pub type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Main application struct
pub struct App {
    /// Application state
    pub state: AppState,

    /// Color palette
    pub theme: Theme,

    /// Dialog and notification strings
    pub translator: Translator,

    /// Answers remote control requests
    pub receiver: RemoteControlReceiver,

    /// Currently shown modal dialog
    pub dialogs: DialogStack,

    /// Toast notifications
    pub notifications: NotificationManager,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Tick counter
    pub tick: u64,

    /// Conference events and keyboard polling
    events: EventHandler,

    /// Replies produced by the receiver
    replies: mpsc::UnboundedReceiver<PermissionReply>,

    /// Last tick time
    last_tick: Instant,
}

impl App {
    /// Create a new application instance
    pub fn new(conference: ConferenceState, config: &TuiConfig, translator: Translator) -> Self {
        let (receiver, replies) = RemoteControlReceiver::new();
        Self {
            state: AppState::new(conference),
            theme: Theme::from_preference(config.high_contrast),
            translator,
            receiver,
            dialogs: DialogStack::new(),
            notifications: NotificationManager::new(),
            should_quit: false,
            tick: 0,
            events: EventHandler::new(config.tick_rate()),
            replies,
            last_tick: Instant::now(),
        }
    }

    /// Sender for feeding conference events into the app
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.events.sender()
    }

    /// Run the application main loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> AppResult<()> {
        let tick_rate = self.events.tick_rate();

        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, self))?;

            let timeout = tick_rate.saturating_sub(self.last_tick.elapsed());
            if let Some(key) = self.events.poll_keyboard(timeout)? {
                self.handle_event(Event::Key(key));
            }

            self.pump();

            if self.last_tick.elapsed() >= tick_rate {
                self.handle_event(Event::Tick);
                self.last_tick = Instant::now();
            }
        }

        Ok(())
    }

    /// Drain queued conference events and outgoing replies
    pub fn pump(&mut self) {
        while let Some(event) = self.events.try_recv() {
            self.handle_event(event);
        }

        while let Ok(reply) = self.replies.try_recv() {
            match reply.to_json() {
                Ok(json) => tracing::info!("Sending permission reply: {}", json),
                Err(e) => tracing::error!("Failed to encode permission reply: {}", e),
            }
            self.state.record_reply(reply);
        }
    }

    /// Handle a single event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
            Event::Tick => {
                self.tick = self.tick.wrapping_add(1);
                self.notifications.tick();
            }
            Event::RemoteControlRequest { participant_id } => {
                self.handle_request(participant_id);
            }
            Event::ParticipantJoined(participant) => {
                self.state.conference.participants.join(participant);
            }
            Event::ParticipantLeft(participant_id) => {
                self.handle_participant_left(participant_id);
            }
            Event::ScreenSharingChanged(sharing) => {
                self.state.conference.set_sharing_screen(sharing);
            }
        }
    }

    /// Handle key press events
    pub fn handle_key(&mut self, key: KeyCode) {
        // The modal dialog captures all keys while open
        if self.dialogs.is_open() {
            self.handle_prompt_key(key);
            return;
        }

        match self.state.current_screen {
            Screen::Conference => self.handle_conference_key(key),
            Screen::Help => self.handle_help_key(key),
        }
    }

    /// The authorization prompt for the dialog currently shown, if any.
    ///
    /// A dialog whose participant has disappeared is closed.
    pub fn current_prompt(&mut self) -> Option<AuthorizationPrompt> {
        let DialogKind::RemoteControlAuthorization { participant_id } =
            self.dialogs.current()?.clone();

        match AuthorizationPrompt::from_state(&self.state.conference, &participant_id) {
            Ok(prompt) => Some(prompt),
            Err(e) => {
                tracing::warn!("Closing authorization dialog: {}", e);
                self.dialogs.dispatch(DialogAction::Hide);
                None
            }
        }
    }

    fn handle_request(&mut self, participant_id: ParticipantId) {
        // Nobody can be asked about a participant we cannot name
        if !self.state.conference.participants.contains(&participant_id) {
            let e = Error::ParticipantNotFound(participant_id.clone());
            tracing::warn!("Rejecting remote control request: {}", e);
            self.deny_unprompted(&participant_id, e);
            return;
        }

        if let Err(e) = self.receiver.request(&participant_id) {
            tracing::warn!("Rejecting remote control request from {}: {}", participant_id, e);
            self.deny_unprompted(&participant_id, e);
            return;
        }

        // Only one prompt is shown; whoever it was asking for gets a refusal
        if let Some(DialogKind::RemoteControlAuthorization { participant_id: shown }) =
            self.dialogs.current().cloned()
        {
            if shown != participant_id {
                tracing::info!(
                    "Prompt for {} replaced by request from {}",
                    shown,
                    participant_id
                );
                let name = self.state.display_name(&shown);
                let reason = self
                    .translator
                    .t("notify.remoteControlDenied", &[("user", &name)]);
                self.deny_unprompted(&shown, reason);
            }
        }

        self.dialogs
            .dispatch(DialogAction::Show(DialogKind::RemoteControlAuthorization {
                participant_id,
            }));
    }

    fn deny_unprompted(&mut self, participant_id: &ParticipantId, reason: impl ToString) {
        if let Err(e) = self.receiver.deny(participant_id) {
            tracing::error!("Failed to deny {}: {}", participant_id, e);
        }
        self.notifications.push(Notification::warning(reason.to_string()));
    }

    fn handle_participant_left(&mut self, participant_id: ParticipantId) {
        let name = self.state.display_name(&participant_id);

        if let Err(e) = self.state.conference.participants.leave(&participant_id) {
            tracing::warn!("{}", e);
        }
        self.state.clamp_selection();

        if self.receiver.participant_left(&participant_id) {
            self.notifications.push(Notification::info(
                self.translator
                    .t("notify.remoteControlStopped", &[("user", &name)]),
            ));
        }

        let prompting_them = matches!(
            self.dialogs.current(),
            Some(DialogKind::RemoteControlAuthorization { participant_id: id }) if *id == participant_id
        );
        if prompting_them {
            self.dialogs.dispatch(DialogAction::Hide);
        }
    }

    fn handle_prompt_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.accept_prompt(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.decline_prompt(),
            _ => {}
        }
    }

    fn accept_prompt(&mut self) {
        let Some(prompt) = self.current_prompt() else {
            return;
        };

        match prompt.on_accept(&mut self.dialogs, &self.receiver) {
            Ok(close) => {
                if close {
                    self.dialogs.dispatch(DialogAction::Hide);
                }
                // Granting control shares the screen
                self.state.conference.set_sharing_screen(true);
                self.notifications.push(Notification::success(self.translator.t(
                    "notify.remoteControlGranted",
                    &[("user", prompt.display_name())],
                )));
            }
            Err(e) => {
                tracing::error!("Grant failed: {}", e);
                self.state.error_message = Some(e.to_string());
                self.notifications.push(Notification::error(e.to_string()));
            }
        }
    }

    fn decline_prompt(&mut self) {
        let Some(prompt) = self.current_prompt() else {
            return;
        };

        match prompt.on_decline(&self.receiver) {
            Ok(close) => {
                if close {
                    self.dialogs.dispatch(DialogAction::Hide);
                }
                self.notifications.push(Notification::info(self.translator.t(
                    "notify.remoteControlDenied",
                    &[("user", prompt.display_name())],
                )));
            }
            Err(e) => {
                tracing::error!("Deny failed: {}", e);
                self.dialogs.dispatch(DialogAction::Hide);
                self.state.error_message = Some(e.to_string());
                self.notifications.push(Notification::error(e.to_string()));
            }
        }
    }

    fn handle_conference_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                if self.state.participant_index > 0 {
                    self.state.participant_index -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let count = self.state.conference.participants.len();
                if self.state.participant_index < count.saturating_sub(1) {
                    self.state.participant_index += 1;
                }
            }
            KeyCode::Char('s') => {
                let sharing = !self.state.conference.sharing_screen;
                self.state.conference.set_sharing_screen(sharing);
            }
            KeyCode::Char('x') => {
                if let Some(controller) = self.receiver.stop() {
                    let name = self.state.display_name(&controller);
                    self.notifications.push(Notification::info(
                        self.translator
                            .t("notify.remoteControlStopped", &[("user", &name)]),
                    ));
                }
            }
            KeyCode::Char('?') => self.state.current_screen = Screen::Help,
            KeyCode::Esc => self.state.clear_messages(),
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
                self.state.current_screen = Screen::Conference;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use remote_control_core::{Participant, Permission};

    use super::*;

    fn app() -> App {
        let mut conference = ConferenceState::new();
        conference.participants.join(Participant::local("me", "Bob"));
        conference.participants.join(Participant::new("p1", "Alice"));
        App::new(conference, &TuiConfig::default(), Translator::new())
    }

    fn request(app: &mut App, id: &str) {
        app.handle_event(Event::RemoteControlRequest {
            participant_id: id.into(),
        });
    }

    #[test]
    fn test_request_opens_prompt() {
        let mut app = app();
        request(&mut app, "p1");

        assert!(app.dialogs.is_open());
        assert!(app.receiver.is_pending(&"p1".into()));
        assert_eq!(app.current_prompt().unwrap().display_name(), "Alice");
    }

    #[test]
    fn test_accept_grants_and_starts_sharing() {
        let mut app = app();
        request(&mut app, "p1");

        app.handle_key(KeyCode::Char('y'));
        app.pump();

        assert!(!app.dialogs.is_open());
        assert_eq!(app.receiver.controller(), Some(ParticipantId::new("p1")));
        assert!(app.state.conference.sharing_screen);
        assert_eq!(app.state.sent_replies.len(), 1);
        assert_eq!(app.state.sent_replies[0].permission, Permission::Grant);
    }

    #[test]
    fn test_decline_denies_and_closes() {
        let mut app = app();
        request(&mut app, "p1");

        app.handle_key(KeyCode::Esc);
        app.pump();

        assert!(!app.dialogs.is_open());
        assert_eq!(app.receiver.controller(), None);
        assert!(!app.state.conference.sharing_screen);
        assert_eq!(app.state.sent_replies[0].permission, Permission::Deny);
    }

    #[test]
    fn test_unknown_requester_is_denied_without_prompt() {
        let mut app = app();
        request(&mut app, "ghost");
        app.pump();

        assert!(!app.dialogs.is_open());
        assert_eq!(app.state.sent_replies.len(), 1);
        assert_eq!(app.state.sent_replies[0].user_id, ParticipantId::new("ghost"));
        assert_eq!(app.notifications.active().len(), 1);
    }

    #[test]
    fn test_replaced_prompt_denies_first_requester() {
        let mut app = app();
        app.handle_event(Event::ParticipantJoined(Participant::new("p2", "Carol")));
        request(&mut app, "p1");
        request(&mut app, "p2");

        assert_eq!(app.current_prompt().unwrap().display_name(), "Carol");

        app.handle_key(KeyCode::Char('y'));
        app.pump();

        let replies: Vec<_> = app
            .state
            .sent_replies
            .iter()
            .map(|r| (r.user_id.as_str().to_string(), r.permission))
            .collect();
        assert_eq!(
            replies,
            vec![
                ("p1".to_string(), Permission::Deny),
                ("p2".to_string(), Permission::Grant),
            ]
        );
        assert!(!app.receiver.is_pending(&"p1".into()));
        assert_eq!(app.receiver.controller(), Some(ParticipantId::new("p2")));
    }

    #[test]
    fn test_repeated_request_keeps_prompt() {
        let mut app = app();
        request(&mut app, "p1");
        request(&mut app, "p1");
        app.pump();

        assert!(app.dialogs.is_open());
        assert!(app.receiver.is_pending(&"p1".into()));
        assert!(app.state.sent_replies.is_empty());
    }

    #[test]
    fn test_requester_leaving_closes_prompt() {
        let mut app = app();
        request(&mut app, "p1");

        app.handle_event(Event::ParticipantLeft("p1".into()));

        assert!(!app.dialogs.is_open());
        assert!(!app.receiver.is_pending(&"p1".into()));
    }

    #[test]
    fn test_other_keys_ignored_while_prompting() {
        let mut app = app();
        request(&mut app, "p1");

        app.handle_key(KeyCode::Char('q'));

        assert!(!app.should_quit);
        assert!(app.dialogs.is_open());
    }

    #[test]
    fn test_stop_session() {
        let mut app = app();
        request(&mut app, "p1");
        app.handle_key(KeyCode::Enter);

        app.handle_key(KeyCode::Char('x'));

        assert_eq!(app.receiver.controller(), None);
    }

    #[test]
    fn test_events_from_sender_are_pumped() {
        let mut app = app();
        let sender = app.sender();
        sender
            .send(Event::ParticipantJoined(Participant::new("p2", "Carol")))
            .unwrap();
        sender.send(Event::ScreenSharingChanged(true)).unwrap();

        app.pump();

        assert!(app.state.conference.participants.contains(&"p2".into()));
        assert!(app.state.conference.sharing_screen);
    }
}
