//! Authentication seam and the route-guard decision.
//!
//! Credential storage, token refresh, and the login screens all belong to
//! the external session provider; the client only needs "who is signed in"
//! and a way to sign out.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::profile::model::AthleteProfile;

/// The signed-in athlete's identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub email: String,
}

/// External session provider.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// The current session, if anyone is signed in.
    fn session(&self) -> Option<Session>;

    /// End the session.
    async fn sign_out(&self);
}

/// Fixed-session provider for the CLI harness and tests.
pub struct StaticSession {
    session: Mutex<Option<Session>>,
}

impl StaticSession {
    pub fn new(user_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            session: Mutex::new(Some(Session {
                user_id: user_id.into(),
                email: email.into(),
            })),
        }
    }
}

#[async_trait]
impl SessionProvider for StaticSession {
    fn session(&self) -> Option<Session> {
        self.session.lock().expect("session lock").clone()
    }

    async fn sign_out(&self) {
        self.session.lock().expect("session lock").take();
    }
}

/// Where the app should land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Onboarding,
    Home,
}

/// Decide the landing route from the session and the profile fetch result.
///
/// A missing profile means "needs onboarding", not an error; any other
/// profile-fetch failure also falls back to onboarding rather than an
/// alert — the guard never alerts.
pub fn resolve_route(
    session: Option<&Session>,
    profile: Option<&Result<AthleteProfile, ApiError>>,
) -> AppRoute {
    match session {
        None => AppRoute::Login,
        Some(_) => match profile {
            Some(Ok(_)) => AppRoute::Home,
            _ => AppRoute::Onboarding,
        },
    }
}
