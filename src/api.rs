//! The coaching backend client.
//!
//! Every screen talks to the backend through the [`CoachApi`] trait so the
//! containers stay testable with in-memory fakes; [`HttpCoachApi`] is the
//! real thing over reqwest. Calls have no client-side timeout — suspension
//! happens only at these request boundaries and an unresponsive backend
//! stalls the relevant loading indicator, nothing else.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::chat::model::{ChatReply, ChatTurn};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::plan::model::{Plan, PlannedSession};
use crate::profile::model::{AthleteProfile, ProfileSubmission};
use crate::strava::StravaStatus;

/// Everything the client needs from the coaching backend.
#[async_trait]
pub trait CoachApi: Send + Sync {
    /// Fetch the athlete's persisted profile. 404 maps to
    /// [`ApiError::NotFound`] — the "needs onboarding" signal.
    async fn get_profile(&self, user_id: &str) -> Result<AthleteProfile, ApiError>;

    /// Create (or replace) the athlete's profile from a completed draft.
    async fn create_profile(
        &self,
        submission: &ProfileSubmission,
    ) -> Result<AthleteProfile, ApiError>;

    /// Fetch the current training plan. 404 maps to [`ApiError::NotFound`]
    /// — no plan has been generated yet.
    async fn current_plan(&self, user_id: &str) -> Result<Plan, ApiError>;

    /// Generate a fresh plan, replacing the current one.
    async fn generate_plan(&self, user_id: &str) -> Result<Plan, ApiError>;

    /// Fetch one week's sessions.
    async fn plan_week(&self, user_id: &str, week: u32) -> Result<Vec<PlannedSession>, ApiError>;

    /// Send a chat message with its history and get the coach's reply.
    async fn send_chat(
        &self,
        message: &str,
        history: &[ChatTurn],
        user_id: &str,
    ) -> Result<ChatReply, ApiError>;

    /// Current Strava link status.
    async fn strava_status(&self, user_id: &str) -> Result<StravaStatus, ApiError>;

    /// Exchange an OAuth authorization code for a Strava link.
    async fn strava_exchange(&self, user_id: &str, code: &str)
    -> Result<StravaStatus, ApiError>;

    /// Remove the Strava link.
    async fn strava_disconnect(&self, user_id: &str) -> Result<(), ApiError>;
}

/// HTTP implementation of [`CoachApi`].
pub struct HttpCoachApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCoachApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

fn request_error(operation: &str) -> impl FnOnce(reqwest::Error) -> ApiError + '_ {
    move |e| ApiError::Request {
        operation: operation.to_string(),
        reason: e.to_string(),
    }
}

/// Turn a response into `T`, mapping non-success statuses to
/// [`ApiError::Status`] with the body kept for logs. When `not_found_as`
/// is set, a 404 becomes [`ApiError::NotFound`] for that resource.
async fn read_json<T: DeserializeOwned>(
    operation: &str,
    not_found_as: Option<&str>,
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        if let Some(what) = not_found_as {
            return Err(ApiError::NotFound {
                what: what.to_string(),
            });
        }
    }
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            operation: operation.to_string(),
            status: status.as_u16(),
            body,
        });
    }
    response.json::<T>().await.map_err(|e| ApiError::Decode {
        operation: operation.to_string(),
        reason: e.to_string(),
    })
}

#[async_trait]
impl CoachApi for HttpCoachApi {
    async fn get_profile(&self, user_id: &str) -> Result<AthleteProfile, ApiError> {
        let response = self
            .client
            .get(self.api_url(&format!("/profiles/{user_id}")))
            .send()
            .await
            .map_err(request_error("get_profile"))?;
        read_json("get_profile", Some("profile"), response).await
    }

    async fn create_profile(
        &self,
        submission: &ProfileSubmission,
    ) -> Result<AthleteProfile, ApiError> {
        let response = self
            .client
            .post(self.api_url("/profiles"))
            .json(submission)
            .send()
            .await
            .map_err(request_error("create_profile"))?;
        read_json("create_profile", None, response).await
    }

    async fn current_plan(&self, user_id: &str) -> Result<Plan, ApiError> {
        let response = self
            .client
            .get(self.api_url("/plans/current"))
            .query(&[("user_id", user_id)])
            .send()
            .await
            .map_err(request_error("current_plan"))?;
        read_json("current_plan", Some("plan"), response).await
    }

    async fn generate_plan(&self, user_id: &str) -> Result<Plan, ApiError> {
        let response = self
            .client
            .post(self.api_url("/plans/generate"))
            .json(&serde_json::json!({ "user_id": user_id }))
            .send()
            .await
            .map_err(request_error("generate_plan"))?;
        read_json("generate_plan", None, response).await
    }

    async fn plan_week(&self, user_id: &str, week: u32) -> Result<Vec<PlannedSession>, ApiError> {
        let response = self
            .client
            .get(self.api_url(&format!("/plans/week/{week}")))
            .query(&[("user_id", user_id)])
            .send()
            .await
            .map_err(request_error("plan_week"))?;
        read_json("plan_week", Some("plan week"), response).await
    }

    async fn send_chat(
        &self,
        message: &str,
        history: &[ChatTurn],
        user_id: &str,
    ) -> Result<ChatReply, ApiError> {
        let response = self
            .client
            .post(self.api_url("/chat/message"))
            .json(&serde_json::json!({
                "message": message,
                "history": history,
                "user_id": user_id,
            }))
            .send()
            .await
            .map_err(request_error("send_chat"))?;
        read_json("send_chat", None, response).await
    }

    async fn strava_status(&self, user_id: &str) -> Result<StravaStatus, ApiError> {
        let response = self
            .client
            .get(self.api_url("/strava/status"))
            .query(&[("user_id", user_id)])
            .send()
            .await
            .map_err(request_error("strava_status"))?;
        read_json("strava_status", None, response).await
    }

    async fn strava_exchange(
        &self,
        user_id: &str,
        code: &str,
    ) -> Result<StravaStatus, ApiError> {
        let response = self
            .client
            .post(self.api_url("/strava/exchange"))
            .json(&serde_json::json!({ "user_id": user_id, "code": code }))
            .send()
            .await
            .map_err(request_error("strava_exchange"))?;
        read_json("strava_exchange", None, response).await
    }

    async fn strava_disconnect(&self, user_id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.api_url("/strava/disconnect"))
            .query(&[("user_id", user_id)])
            .send()
            .await
            .map_err(request_error("strava_disconnect"))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                operation: "strava_disconnect".to_string(),
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}
