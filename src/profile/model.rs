//! Athlete profile wire types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::onboarding::draft::{AthleteLevel, Discipline, OnboardingDraft};

/// The persisted athlete profile as the backend returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AthleteProfile {
    pub user_id: String,
    pub goal: AthleteLevel,
    pub race_date: NaiveDate,
    pub experience: AthleteLevel,
    pub current_background: String,
    pub weekly_hours: f64,
    pub days_available: u8,
    pub strongest_discipline: Discipline,
    pub weakest_discipline: Discipline,
    /// Training zones computed by the backend. The backend owns the shape,
    /// so the client keeps it opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zones: Option<serde_json::Value>,
}

/// A profile-creation request: the completed draft plus the athlete's id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSubmission {
    pub user_id: String,
    pub goal: AthleteLevel,
    pub race_date: NaiveDate,
    pub experience: AthleteLevel,
    pub current_background: String,
    pub weekly_hours: f64,
    pub days_available: u8,
    pub strongest_discipline: Discipline,
    pub weakest_discipline: Discipline,
}

impl ProfileSubmission {
    /// Build a submission from a draft, or `None` while any field is missing.
    pub fn from_draft(user_id: &str, draft: &OnboardingDraft) -> Option<Self> {
        Some(Self {
            user_id: user_id.to_string(),
            goal: draft.goal?,
            race_date: draft.race_date?,
            experience: draft.experience?,
            current_background: draft.current_background.clone()?,
            weekly_hours: draft.weekly_hours?,
            days_available: draft.days_available?,
            strongest_discipline: draft.strongest_discipline?,
            weakest_discipline: draft.weakest_discipline?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::draft::DraftPatch;

    fn complete_draft() -> OnboardingDraft {
        let mut draft = OnboardingDraft::default();
        draft.apply(DraftPatch {
            goal: Some(AthleteLevel::Competitive),
            race_date: NaiveDate::from_ymd_opt(2026, 10, 4),
            experience: Some(AthleteLevel::Recreational),
            current_background: Some("Two sprint triathlons last season".to_string()),
            weekly_hours: Some(9.0),
            days_available: Some(6),
            strongest_discipline: Some(Discipline::Run),
            weakest_discipline: Some(Discipline::Swim),
        });
        draft
    }

    #[test]
    fn from_draft_requires_every_field() {
        let mut draft = complete_draft();
        assert!(ProfileSubmission::from_draft("user-1", &draft).is_some());

        draft.weekly_hours = None;
        assert!(ProfileSubmission::from_draft("user-1", &draft).is_none());
    }

    #[test]
    fn submission_serializes_like_the_backend_expects() {
        let draft = complete_draft();
        let submission = ProfileSubmission::from_draft("user-1", &draft).unwrap();
        let json = serde_json::to_value(&submission).unwrap();

        assert_eq!(json["user_id"], "user-1");
        assert_eq!(json["goal"], "competitive");
        assert_eq!(json["race_date"], "2026-10-04");
        assert_eq!(json["strongest_discipline"], "run");
        assert_eq!(json["days_available"], 6);
    }

    #[test]
    fn profile_decodes_with_and_without_zones() {
        let body = serde_json::json!({
            "user_id": "user-1",
            "goal": "first_timer",
            "race_date": "2026-08-30",
            "experience": "first_timer",
            "current_background": "brand new",
            "weekly_hours": 4.5,
            "days_available": 3,
            "strongest_discipline": "bike",
            "weakest_discipline": "swim"
        });
        let profile: AthleteProfile = serde_json::from_value(body).unwrap();
        assert!(profile.zones.is_none());

        let body = serde_json::json!({
            "user_id": "user-1",
            "goal": "first_timer",
            "race_date": "2026-08-30",
            "experience": "first_timer",
            "current_background": "brand new",
            "weekly_hours": 4.5,
            "days_available": 3,
            "strongest_discipline": "bike",
            "weakest_discipline": "swim",
            "zones": {"run": {"zone 1": 120}}
        });
        let profile: AthleteProfile = serde_json::from_value(body).unwrap();
        assert!(profile.zones.is_some());
    }
}
