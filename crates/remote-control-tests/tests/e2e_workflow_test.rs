//! End-to-end workflow tests for remote control authorization
//!
//! These tests drive the terminal app the way a conference would: events
//! arrive on the app's channel, the user answers the prompt with keys, and
//! permission replies come out the other side.

use std::fs;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use remote_control_core::{
    AuthorizationHandler, ConferenceState, Participant, ParticipantId, Permission,
    RemoteControlReceiver, Translator,
};
use remote_control_tui::app::{App, Event, TuiConfig};
use remote_control_tui::ui;

fn conference() -> ConferenceState {
    let mut conference = ConferenceState::new();
    conference.participants.join(Participant::local("me", "Bob"));
    conference.participants.join(Participant::new("p1", "Alice"));
    conference.participants.join(Participant::new("p2", "Carol"));
    conference
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn screen_text(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

/// A request is prompted, granted, and the session is later ended
#[test]
fn test_grant_workflow() {
    let mut app = App::new(conference(), &TuiConfig::default(), Translator::new());
    let events = app.sender();

    // ==========================================
    // STEP 1: Alice asks for control
    // ==========================================
    events
        .send(Event::RemoteControlRequest {
            participant_id: "p1".into(),
        })
        .unwrap();
    app.pump();

    assert!(app.dialogs.is_open());
    let text = screen_text(&app);
    assert!(text.contains("Will you allow Alice to remotely control your desktop?"));
    assert!(text.contains("share your screen"));

    // ==========================================
    // STEP 2: The user allows it
    // ==========================================
    events.send(key(KeyCode::Char('y'))).unwrap();
    app.pump();

    assert!(!app.dialogs.is_open());
    assert_eq!(app.receiver.controller(), Some(ParticipantId::new("p1")));
    assert!(app.state.conference.sharing_screen);

    let replies = &app.state.sent_replies;
    assert_eq!(replies.len(), 1);
    let wire: serde_json::Value = serde_json::from_str(&replies[0].to_json().unwrap()).unwrap();
    assert_eq!(wire["type"], "remote-control");
    assert_eq!(wire["userId"], "p1");
    assert_eq!(wire["permission"], "grant");

    // ==========================================
    // STEP 3: Carol asks while Alice is in control
    // ==========================================
    events
        .send(Event::RemoteControlRequest {
            participant_id: "p2".into(),
        })
        .unwrap();
    app.pump();

    assert!(!app.dialogs.is_open());
    assert_eq!(app.state.sent_replies.len(), 2);
    assert_eq!(app.state.sent_replies[1].permission, Permission::Deny);

    // ==========================================
    // STEP 4: Alice leaves, ending the session
    // ==========================================
    events.send(Event::ParticipantLeft("p1".into())).unwrap();
    app.pump();

    assert_eq!(app.receiver.controller(), None);
    assert!(!app.state.conference.participants.contains(&"p1".into()));
}

/// A second request replaces the open prompt; the first requester is refused
#[test]
fn test_competing_prompts_both_answered() {
    let mut app = App::new(conference(), &TuiConfig::default(), Translator::new());
    let events = app.sender();

    // ==========================================
    // STEP 1: Alice, then Carol, ask for control
    // ==========================================
    for id in ["p1", "p2"] {
        events
            .send(Event::RemoteControlRequest {
                participant_id: id.into(),
            })
            .unwrap();
    }
    app.pump();

    let text = screen_text(&app);
    assert!(text.contains("Will you allow Carol to remotely control your desktop?"));
    assert!(!app.receiver.is_pending(&"p1".into()));

    // ==========================================
    // STEP 2: The user allows Carol
    // ==========================================
    events.send(key(KeyCode::Enter)).unwrap();
    app.pump();

    let replies: Vec<(&str, Permission)> = app
        .state
        .sent_replies
        .iter()
        .map(|r| (r.user_id.as_str(), r.permission))
        .collect();
    assert_eq!(replies, vec![("p1", Permission::Deny), ("p2", Permission::Grant)]);
    assert_eq!(app.receiver.controller(), Some(ParticipantId::new("p2")));
}

/// Declining answers the requester and never shares the screen
#[test]
fn test_deny_workflow() {
    let mut app = App::new(conference(), &TuiConfig::default(), Translator::new());

    app.handle_event(Event::RemoteControlRequest {
        participant_id: "p2".into(),
    });
    app.handle_event(key(KeyCode::Char('n')));
    app.pump();

    assert!(!app.dialogs.is_open());
    assert_eq!(app.receiver.controller(), None);
    assert!(!app.state.conference.sharing_screen);
    assert_eq!(app.state.sent_replies.len(), 1);
    assert_eq!(app.state.sent_replies[0].user_id, ParticipantId::new("p2"));
    assert_eq!(app.state.sent_replies[0].permission, Permission::Deny);
}

/// When the screen is already shared the warning line is not shown
#[test]
fn test_no_warning_while_sharing() {
    let mut app = App::new(conference(), &TuiConfig::default(), Translator::new());
    app.handle_event(Event::ScreenSharingChanged(true));
    app.handle_event(Event::RemoteControlRequest {
        participant_id: "p1".into(),
    });

    let text = screen_text(&app);
    assert!(text.contains("Alice"));
    assert!(!text.contains("share your screen"));
}

/// A translation bundle loaded from disk replaces the dialog strings
#[test]
fn test_translated_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let bundle = dir.path().join("de.json");
    fs::write(
        &bundle,
        r#"{
            "dialog": {
                "Allow": "Erlauben",
                "Cancel": "Abbrechen",
                "remoteControlTitle": "Fernsteuerung",
                "remoteControlRequestMessage": "Darf __user__ Ihren Desktop steuern?"
            }
        }"#,
    )
    .unwrap();

    let mut translator = Translator::new();
    assert_eq!(translator.load_bundle(&bundle).unwrap(), 4);

    let mut app = App::new(conference(), &TuiConfig::default(), translator);
    app.handle_event(Event::RemoteControlRequest {
        participant_id: "p1".into(),
    });

    let text = screen_text(&app);
    assert!(text.contains("Fernsteuerung"));
    assert!(text.contains("Darf Alice Ihren Desktop steuern?"));
    assert!(text.contains("[Y] Erlauben"));
}

/// The receiver can be used directly as the authorization handler
#[test]
fn test_receiver_as_shared_handler() {
    let (receiver, mut replies) = RemoteControlReceiver::new();
    let handler = std::sync::Arc::new(receiver);

    handler.request(&"p1".into()).unwrap();
    handler.grant(&"p1".into()).unwrap();
    handler.deny(&"p2".into()).unwrap();

    assert!(replies.try_recv().unwrap().is_granted());
    assert!(!replies.try_recv().unwrap().is_granted());
    assert!(replies.try_recv().is_err());
}
