//! The chat screen's transcript and send flow.

use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use crate::api::CoachApi;

use super::model::{ChatTurn, Message};

/// Greeting seeded locally when the chat opens. Never sent to the backend.
pub const GREETING_TEXT: &str =
    "Hey! I'm your ThryveIQ coach. Ask me anything about training, nutrition, \
     recovery, or race day.";

/// Shown as a coach message when a send fails for any reason.
pub const CONNECTION_FALLBACK_TEXT: &str =
    "Sorry, I'm having trouble connecting right now. Please try again in a moment.";

/// Append-only message sequence for one chat session.
///
/// The transcript remembers the id of the greeting it seeded so history
/// reconstruction can exclude it even though the id is freshly generated
/// for every transcript instance.
#[derive(Debug)]
pub struct Transcript {
    messages: Vec<Message>,
    greeting_id: Uuid,
}

impl Transcript {
    /// Start a transcript with the synthetic coach greeting.
    pub fn new() -> Self {
        let greeting = Message::from_coach(GREETING_TEXT);
        let greeting_id = greeting.id;
        Self {
            messages: vec![greeting],
            greeting_id,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// History for the backend: every message except the seeded greeting
    /// and except the not-yet-answered message at the tail.
    fn history_excluding_last(&self) -> Vec<ChatTurn> {
        let upto = self.messages.len().saturating_sub(1);
        self.messages[..upto]
            .iter()
            .filter(|m| m.id != self.greeting_id)
            .map(ChatTurn::from_message)
            .collect()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

/// Headless state for the chat screen.
pub struct ChatCoach {
    api: Arc<dyn CoachApi>,
    user_id: String,
    transcript: Transcript,
    input: String,
    sending: bool,
}

impl ChatCoach {
    pub fn new(api: Arc<dyn CoachApi>, user_id: impl Into<String>) -> Self {
        Self {
            api,
            user_id: user_id.into(),
            transcript: Transcript::new(),
            input: String::new(),
            sending: false,
        }
    }

    pub fn transcript(&self) -> &[Message] {
        self.transcript.messages()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Whether a send is in flight (the send control is disabled).
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Send the current input to the coach.
    ///
    /// Empty or whitespace-only input is a no-op, as is triggering a send
    /// while one is in flight — neither appends a message nor issues a
    /// request. A failed send appends exactly one coach message with
    /// [`CONNECTION_FALLBACK_TEXT`]; the loading flag clears either way.
    /// Returns whether a send actually happened.
    pub async fn send(&mut self) -> bool {
        let text = self.input.trim().to_string();
        if text.is_empty() || self.sending {
            return false;
        }

        self.transcript.push(Message::from_user(&text));
        self.input.clear();
        self.sending = true;

        let history = self.transcript.history_excluding_last();
        let result = self.api.send_chat(&text, &history, &self.user_id).await;
        match result {
            Ok(reply) => {
                self.transcript.push(Message::from_coach(reply.response));
            }
            Err(e) => {
                warn!("Chat send failed: {e}");
                self.transcript
                    .push(Message::from_coach(CONNECTION_FALLBACK_TEXT));
            }
        }
        self.sending = false;
        true
    }
}
