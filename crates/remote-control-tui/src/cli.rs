//! Command line arguments

use std::path::PathBuf;

use clap::Parser;
use remote_control_core::{ConferenceState, Participant, ParticipantId};

#[derive(Parser, Debug)]
#[command(name = "remote-control-tui")]
#[command(about = "Allow or deny remote desktop control requests", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the config file (defaults to the user config directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed a remote participant as ID=NAME (repeatable)
    #[arg(short, long = "participant", value_parser = parse_participant)]
    pub participants: Vec<Participant>,

    /// Raise a remote control request from this participant on startup
    #[arg(short, long)]
    pub request: Option<String>,

    /// Start with the local screen already shared
    #[arg(long)]
    pub sharing_screen: bool,
}

impl Cli {
    /// Build the initial conference from the arguments
    pub fn conference(&self, local_display_name: &str) -> ConferenceState {
        let mut conference = ConferenceState::new();
        conference
            .participants
            .join(Participant::local("local", local_display_name));
        for participant in &self.participants {
            conference.participants.join(participant.clone());
        }
        conference.sharing_screen = self.sharing_screen;
        conference
    }

    pub fn request(&self) -> Option<ParticipantId> {
        self.request.as_deref().map(ParticipantId::from)
    }
}

/// Parse `ID=NAME` into a remote participant
pub fn parse_participant(arg: &str) -> Result<Participant, String> {
    let (id, name) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected ID=NAME, got {:?}", arg))?;
    let (id, name) = (id.trim(), name.trim());
    if id.is_empty() || name.is_empty() {
        return Err(format!("participant ID and name must not be empty: {:?}", arg));
    }
    Ok(Participant::new(id, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_participant() {
        let p = parse_participant("p1=Alice Smith").unwrap();
        assert_eq!(p.id.as_str(), "p1");
        assert_eq!(p.name, "Alice Smith");
        assert!(!p.local);
    }

    #[rstest]
    #[case("p1")]
    #[case("=Alice")]
    #[case("p1=")]
    #[case(" = ")]
    fn test_parse_participant_rejects(#[case] arg: &str) {
        assert!(parse_participant(arg).is_err());
    }

    #[test]
    fn test_cli_builds_conference() {
        let cli = Cli::parse_from([
            "remote-control-tui",
            "-p",
            "p1=Alice",
            "--participant",
            "p2=Carol",
            "--request",
            "p1",
            "--sharing-screen",
        ]);

        let conference = cli.conference("Bob");
        assert_eq!(conference.participants.len(), 3);
        assert_eq!(conference.participants.local().unwrap().name, "Bob");
        assert!(conference.sharing_screen);
        assert_eq!(cli.request(), Some(ParticipantId::new("p1")));
    }
}
