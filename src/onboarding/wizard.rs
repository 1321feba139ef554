//! OnboardingWizard — owns the draft and the step cursor, and performs the
//! terminal submission.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::api::CoachApi;
use crate::error::ApiError;
use crate::profile::model::{AthleteProfile, ProfileSubmission};

use super::draft::{DraftPatch, OnboardingDraft};
use super::steps::OnboardingStep;

/// Why a submission did not go through.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Draft is incomplete, first missing field: {step}")]
    Incomplete { step: OnboardingStep },

    #[error("A submission is already in flight")]
    InFlight,

    #[error("Profile creation failed: {0}")]
    Api(#[from] ApiError),
}

/// The wizard: exactly one draft, one visible step, one writer.
///
/// Moving back only changes which step is displayed — values already
/// entered stay in the draft and greet the user on return.
pub struct OnboardingWizard {
    draft: OnboardingDraft,
    step: OnboardingStep,
    submitting: bool,
}

impl OnboardingWizard {
    pub fn new() -> Self {
        Self {
            draft: OnboardingDraft::default(),
            step: OnboardingStep::first(),
            submitting: false,
        }
    }

    pub fn draft(&self) -> &OnboardingDraft {
        &self.draft
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Merge fields into the draft. The wizard itself never validates here;
    /// validation happens when the user tries to move forward.
    pub fn update(&mut self, patch: DraftPatch) {
        self.draft.apply(patch);
    }

    /// Whether the current step allows moving forward.
    pub fn can_advance(&self, today: NaiveDate) -> bool {
        self.step.is_satisfied(&self.draft, today)
    }

    /// Move to the next step if the current one is satisfied.
    /// Returns whether navigation happened.
    pub fn advance(&mut self, today: NaiveDate) -> bool {
        if !self.can_advance(today) {
            return false;
        }
        match self.step.next() {
            Some(next) => {
                debug!(from = %self.step, to = %next, "Onboarding step advanced");
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Move to the previous step. Field values are not rolled back.
    pub fn back(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                true
            }
            None => false,
        }
    }

    /// Submit the completed draft as a profile-creation request.
    ///
    /// One submission per user action: a second call while one is in
    /// flight is rejected without issuing a request. On success the draft
    /// is discarded (the backend's copy is now the durable one); on
    /// failure the draft stays intact for retry.
    pub async fn submit(
        &mut self,
        api: &dyn CoachApi,
        user_id: &str,
        today: NaiveDate,
    ) -> Result<AthleteProfile, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }
        if let Some(step) = OnboardingStep::first_blocking(&self.draft, today) {
            return Err(SubmitError::Incomplete { step });
        }
        // first_blocking already checked presence of every field
        let submission = ProfileSubmission::from_draft(user_id, &self.draft)
            .ok_or(SubmitError::Incomplete {
                step: OnboardingStep::first(),
            })?;

        self.submitting = true;
        let result = api.create_profile(&submission).await;
        self.submitting = false;

        match result {
            Ok(profile) => {
                self.reset();
                Ok(profile)
            }
            Err(e) => {
                warn!("Profile submission failed: {e}");
                Err(SubmitError::Api(e))
            }
        }
    }

    /// Clear the draft and return to the first step.
    pub fn reset(&mut self) {
        self.draft.reset();
        self.step = OnboardingStep::first();
        self.submitting = false;
    }
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self::new()
    }
}
