//! Headless state for the profile tab.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::api::CoachApi;
use crate::auth::SessionProvider;
use crate::lifecycle::ScreenLifetime;
use crate::strava::StravaLink;

use super::countdown::Countdown;
use super::model::AthleteProfile;

/// Outcome of a profile fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileLoad {
    Loaded,
    /// No profile exists — send the athlete to onboarding, don't alert.
    NeedsOnboarding,
    Failed,
}

/// The profile screen: persisted profile, race countdown, Strava link,
/// sign-out.
pub struct ProfileScreen {
    api: Arc<dyn CoachApi>,
    sessions: Arc<dyn SessionProvider>,
    user_id: String,
    profile: Option<AthleteProfile>,
    error: Option<String>,
    strava: StravaLink,
    lifetime: ScreenLifetime,
}

impl ProfileScreen {
    pub fn new(
        api: Arc<dyn CoachApi>,
        sessions: Arc<dyn SessionProvider>,
        user_id: impl Into<String>,
    ) -> Self {
        let user_id = user_id.into();
        Self {
            strava: StravaLink::new(Arc::clone(&api), user_id.clone()),
            api,
            sessions,
            user_id,
            profile: None,
            error: None,
            lifetime: ScreenLifetime::new(),
        }
    }

    pub fn lifetime(&self) -> ScreenLifetime {
        self.lifetime.clone()
    }

    pub fn profile(&self) -> Option<&AthleteProfile> {
        self.profile.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn strava(&self) -> &StravaLink {
        &self.strava
    }

    pub fn strava_mut(&mut self) -> &mut StravaLink {
        &mut self.strava
    }

    /// Fetch the persisted profile.
    pub async fn load(&mut self) -> ProfileLoad {
        let token = self.lifetime.token();
        let result = self.api.get_profile(&self.user_id).await;
        if !token.is_live() {
            debug!("Discarding profile fetch that outlived its screen");
            return ProfileLoad::Failed;
        }
        match result {
            Ok(profile) => {
                self.profile = Some(profile);
                self.error = None;
                ProfileLoad::Loaded
            }
            Err(e) if e.is_not_found() => {
                self.profile = None;
                self.error = None;
                ProfileLoad::NeedsOnboarding
            }
            Err(e) => {
                warn!("Failed to fetch profile: {e}");
                self.error = Some("Couldn't load your profile. Pull to retry.".to_string());
                ProfileLoad::Failed
            }
        }
    }

    /// Days and weeks to race day, derived from the loaded profile.
    /// Recomputed on every call.
    pub fn countdown(&self, today: NaiveDate) -> Option<Countdown> {
        self.profile
            .as_ref()
            .map(|p| Countdown::to_race(p.race_date, today))
    }

    /// End the session via the external provider.
    pub async fn sign_out(&self) {
        self.sessions.sign_out().await;
    }
}
