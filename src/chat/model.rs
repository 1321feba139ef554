//! Chat wire and transcript types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One locally displayed chat message.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: Uuid,
    pub text: String,
    /// True for the athlete's messages, false for the coach's.
    pub from_user: bool,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    pub fn from_user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            from_user: true,
            sent_at: Utc::now(),
        }
    }

    pub fn from_coach(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            from_user: false,
            sent_at: Utc::now(),
        }
    }
}

/// One turn of history as the backend wants it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

impl ChatTurn {
    pub fn from_message(message: &Message) -> Self {
        Self {
            role: if message.from_user { "user" } else { "assistant" }.to_string(),
            content: message.text.clone(),
        }
    }
}

/// The backend's reply to a chat message.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    pub response: String,
    /// Names of the data tools the coach consulted for this answer.
    #[serde(default)]
    pub tools_used: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_maps_author_flag_to_role() {
        let user = Message::from_user("how do I pace the run?");
        let coach = Message::from_coach("start conservative");
        assert_eq!(ChatTurn::from_message(&user).role, "user");
        assert_eq!(ChatTurn::from_message(&coach).role, "assistant");
    }

    #[test]
    fn reply_decodes_without_tools_used() {
        let reply: ChatReply =
            serde_json::from_value(serde_json::json!({"response": "ride easy"})).unwrap();
        assert_eq!(reply.response, "ride easy");
        assert!(reply.tools_used.is_empty());
    }

    #[test]
    fn local_messages_get_fresh_ids() {
        let a = Message::from_user("one");
        let b = Message::from_user("one");
        assert_ne!(a.id, b.id);
    }
}
