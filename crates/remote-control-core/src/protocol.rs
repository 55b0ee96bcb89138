//! Endpoint messages sent back to the participant who asked for control

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::participant::ParticipantId;

/// Message type tag shared by all remote control endpoint messages
pub const REMOTE_CONTROL_MESSAGE_TYPE: &str = "remote-control";

/// The local user's answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Grant,
    Deny,
}

/// Reply to a remote control permission request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionReply {
    #[serde(rename = "type")]
    pub message_type: String,
    pub action: String,
    #[serde(rename = "userId")]
    pub user_id: ParticipantId,
    pub permission: Permission,
}

impl PermissionReply {
    pub fn new(user_id: ParticipantId, permission: Permission) -> Self {
        Self {
            message_type: REMOTE_CONTROL_MESSAGE_TYPE.to_string(),
            action: "permissions".to_string(),
            user_id,
            permission,
        }
    }

    pub fn is_granted(&self) -> bool {
        self.permission == Permission::Grant
    }

    /// Encode for the endpoint channel
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
