//! ThryveIQ client core — headless screen state for the triathlon coaching
//! app.
//!
//! Rendering belongs to the UI layer; this crate owns what the screens
//! know: the onboarding draft and wizard, the weekly plan view, the chat
//! transcript, the race countdown, Strava linking, and the HTTP client for
//! the coaching backend.

pub mod api;
pub mod auth;
pub mod chat;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod onboarding;
pub mod plan;
pub mod profile;
pub mod strava;
