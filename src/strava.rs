//! Strava account linking.
//!
//! The client owns only the thin edges of the OAuth flow: building the
//! authorization URL the embedded browser opens, and pulling the code out
//! of the redirect it comes back with. The token exchange and storage live
//! in the backend.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::api::CoachApi;

/// Strava's mobile authorization endpoint.
pub const AUTHORIZE_URL: &str = "https://www.strava.com/oauth/mobile/authorize";

/// Scopes the coaching backend needs to read activities.
pub const OAUTH_SCOPE: &str = "read,activity:read_all";

/// Build the authorization URL to open in the browser session.
pub fn authorize_url(client_id: &str, redirect_uri: &str) -> Url {
    // AUTHORIZE_URL is a well-formed constant
    let mut url = Url::parse(AUTHORIZE_URL).unwrap();
    url.query_pairs_mut()
        .append_pair("client_id", client_id)
        .append_pair("redirect_uri", redirect_uri)
        .append_pair("response_type", "code")
        .append_pair("approval_prompt", "auto")
        .append_pair("scope", OAUTH_SCOPE);
    url
}

/// Extract the authorization code from the redirect URL's query string.
///
/// Returns `None` when the redirect carries no code or reports an
/// `error=` (the athlete denied access).
pub fn code_from_redirect(redirect: &str) -> Option<String> {
    let url = Url::parse(redirect).ok()?;
    let mut code = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "error" => return None,
            "code" => code = Some(value.into_owned()),
            _ => {}
        }
    }
    code
}

/// Link state as the backend reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StravaStatus {
    pub connected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub athlete_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub athlete_id: Option<i64>,
}

impl StravaStatus {
    pub fn disconnected() -> Self {
        Self {
            connected: false,
            athlete_name: None,
            athlete_id: None,
        }
    }
}

impl Default for StravaStatus {
    fn default() -> Self {
        Self::disconnected()
    }
}

/// Headless state for the Strava link section of the profile screen.
pub struct StravaLink {
    api: Arc<dyn CoachApi>,
    user_id: String,
    status: StravaStatus,
    busy: bool,
    error: Option<String>,
}

impl StravaLink {
    pub fn new(api: Arc<dyn CoachApi>, user_id: impl Into<String>) -> Self {
        Self {
            api,
            user_id: user_id.into(),
            status: StravaStatus::disconnected(),
            busy: false,
            error: None,
        }
    }

    pub fn status(&self) -> &StravaStatus {
        &self.status
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Refresh the link status. Failures are swallowed: the section just
    /// shows "not connected" until a refresh succeeds.
    pub async fn refresh(&mut self) {
        match self.api.strava_status(&self.user_id).await {
            Ok(status) => self.status = status,
            Err(e) => {
                debug!("Strava status fetch failed, treating as disconnected: {e}");
                self.status = StravaStatus::disconnected();
            }
        }
    }

    /// Finish linking with the code extracted from the OAuth redirect.
    /// Returns whether the link is now connected.
    pub async fn complete_link(&mut self, code: &str) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        let result = self.api.strava_exchange(&self.user_id, code).await;
        self.busy = false;
        match result {
            Ok(status) => {
                self.status = status;
                self.error = None;
                self.status.connected
            }
            Err(e) => {
                warn!("Strava code exchange failed: {e}");
                self.error = Some("Couldn't connect Strava. Please try again.".to_string());
                false
            }
        }
    }

    /// Remove the link.
    pub async fn disconnect(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        let result = self.api.strava_disconnect(&self.user_id).await;
        self.busy = false;
        match result {
            Ok(()) => {
                self.status = StravaStatus::disconnected();
                self.error = None;
                true
            }
            Err(e) => {
                warn!("Strava disconnect failed: {e}");
                self.error = Some("Couldn't disconnect Strava. Please try again.".to_string());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorize_url_carries_the_oauth_parameters() {
        let url = authorize_url("12345", "thryve://oauth/strava");
        assert_eq!(url.host_str(), Some("www.strava.com"));

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("client_id".to_string(), "12345".to_string())));
        assert!(pairs.contains(&("redirect_uri".to_string(), "thryve://oauth/strava".to_string())));
        assert!(pairs.contains(&("response_type".to_string(), "code".to_string())));
        assert!(pairs.contains(&("scope".to_string(), OAUTH_SCOPE.to_string())));
    }

    #[test]
    fn code_is_extracted_from_the_redirect() {
        let code = code_from_redirect("thryve://oauth/strava?state=&code=abc123&scope=read");
        assert_eq!(code.as_deref(), Some("abc123"));
    }

    #[test]
    fn denied_redirect_yields_no_code() {
        assert!(code_from_redirect("thryve://oauth/strava?error=access_denied").is_none());
    }

    #[test]
    fn redirect_without_code_yields_none() {
        assert!(code_from_redirect("thryve://oauth/strava?state=xyz").is_none());
        assert!(code_from_redirect("not a url").is_none());
    }

    #[test]
    fn status_decodes_minimal_body() {
        let status: StravaStatus =
            serde_json::from_value(serde_json::json!({"connected": false})).unwrap();
        assert_eq!(status, StravaStatus::disconnected());
    }
}
