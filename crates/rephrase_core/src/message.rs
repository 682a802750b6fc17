//! Message - Chat history message types
//!
//! History messages are supplied by the caller per request, ordered
//! chronologically, and are never modified by this crate.

use serde::{Deserialize, Serialize};

/// Who authored a history message.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    /// Sent by the user whose text is being rephrased.
    Me,
    /// Sent by the other party in the conversation.
    Other,
}

/// A single chat history message.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub role: MessageRole,
    pub text: String,
}

impl Message {
    pub fn new(role: MessageRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    /// Create a message authored by the rephrasing user.
    pub fn me(text: impl Into<String>) -> Self {
        Self::new(MessageRole::Me, text)
    }

    /// Create a message authored by the other party.
    pub fn other(text: impl Into<String>) -> Self {
        Self::new(MessageRole::Other, text)
    }
}
