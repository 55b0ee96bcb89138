//! Conference participants
//!
//! The registry is the read side the authorization prompt resolves display
//! names from. The prompt never mutates it.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Participant identifier as assigned by the conference
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Create a new ParticipantId
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ParticipantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A conference participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    /// Display name shown in dialogs
    pub name: String,
    /// Whether this is the local user
    #[serde(default)]
    pub local: bool,
}

impl Participant {
    /// Create a remote participant
    pub fn new(id: impl Into<ParticipantId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            local: false,
        }
    }

    /// Create the local participant
    pub fn local(id: impl Into<ParticipantId>, name: impl Into<String>) -> Self {
        Self {
            local: true,
            ..Self::new(id, name)
        }
    }
}

/// Registry of everyone currently in the conference
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticipantRegistry {
    participants: BTreeMap<ParticipantId, Participant>,
}

impl ParticipantRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a participant, replacing any previous record with the same ID
    pub fn join(&mut self, participant: Participant) -> Option<Participant> {
        tracing::debug!("Participant joined: {}", participant.id);
        self.participants.insert(participant.id.clone(), participant)
    }

    /// Remove a participant
    pub fn leave(&mut self, id: &ParticipantId) -> Result<Participant> {
        tracing::debug!("Participant left: {}", id);
        self.participants
            .remove(id)
            .ok_or_else(|| Error::ParticipantNotFound(id.clone()))
    }

    /// Change a participant's display name
    pub fn rename(&mut self, id: &ParticipantId, name: impl Into<String>) -> Result<()> {
        let participant = self
            .participants
            .get_mut(id)
            .ok_or_else(|| Error::ParticipantNotFound(id.clone()))?;
        participant.name = name.into();
        Ok(())
    }

    /// Look up a participant by ID
    pub fn get(&self, id: &ParticipantId) -> Result<&Participant> {
        self.participants
            .get(id)
            .ok_or_else(|| Error::ParticipantNotFound(id.clone()))
    }

    /// Check whether a participant is present
    pub fn contains(&self, id: &ParticipantId) -> bool {
        self.participants.contains_key(id)
    }

    /// The local participant, if registered
    pub fn local(&self) -> Option<&Participant> {
        self.participants.values().find(|p| p.local)
    }

    /// All participants ordered by ID
    pub fn list(&self) -> Vec<&Participant> {
        self.participants.values().collect()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_and_get() {
        let mut registry = ParticipantRegistry::new();
        registry.join(Participant::new("p1", "Alice"));

        let alice = registry.get(&"p1".into()).unwrap();
        assert_eq!(alice.name, "Alice");
        assert!(!alice.local);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_get_unknown_fails() {
        let registry = ParticipantRegistry::new();
        let err = registry.get(&"ghost".into()).unwrap_err();
        assert!(matches!(err, Error::ParticipantNotFound(id) if id.as_str() == "ghost"));
    }

    #[test]
    fn test_rejoin_replaces_record() {
        let mut registry = ParticipantRegistry::new();
        registry.join(Participant::new("p1", "Alice"));
        let previous = registry.join(Participant::new("p1", "Alice (phone)"));

        assert_eq!(previous.unwrap().name, "Alice");
        assert_eq!(registry.get(&"p1".into()).unwrap().name, "Alice (phone)");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_rename_and_leave() {
        let mut registry = ParticipantRegistry::new();
        registry.join(Participant::new("p1", "Alice"));

        registry.rename(&"p1".into(), "Alicia").unwrap();
        assert_eq!(registry.get(&"p1".into()).unwrap().name, "Alicia");

        let left = registry.leave(&"p1".into()).unwrap();
        assert_eq!(left.name, "Alicia");
        assert!(registry.is_empty());
        assert!(registry.leave(&"p1".into()).is_err());
        assert!(registry.rename(&"p1".into(), "x").is_err());
    }

    #[test]
    fn test_local_participant() {
        let mut registry = ParticipantRegistry::new();
        registry.join(Participant::new("p1", "Alice"));
        registry.join(Participant::local("me", "Bob"));

        assert_eq!(registry.local().unwrap().name, "Bob");
        let ids: Vec<&str> = registry.list().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["me", "p1"]);
    }

    #[test]
    fn test_participant_id_serializes_as_string() {
        let json = serde_json::to_string(&ParticipantId::new("p1")).unwrap();
        assert_eq!(json, "\"p1\"");
    }
}
