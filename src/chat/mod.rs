//! AI chat coach — local transcript plus the send flow.
//!
//! The transcript is append-only and lives only as long as the screen; the
//! backend holds no copy of it, so each send ships the relevant history
//! along with the new message.

pub mod coach;
pub mod model;

pub use coach::{CONNECTION_FALLBACK_TEXT, ChatCoach, GREETING_TEXT, Transcript};
pub use model::{ChatReply, ChatTurn, Message};
