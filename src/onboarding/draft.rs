//! The onboarding draft — a partial athlete profile accumulated step by step.
//!
//! The draft performs no validation of its own; each wizard step decides
//! whether its fields are good enough to move on (see
//! [`super::steps::OnboardingStep`]). The draft lives only as long as the
//! wizard: it is never written to disk, and the one durable copy is whatever
//! the backend accepts at submission.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Where the athlete is at — used for both `goal` and `experience`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AthleteLevel {
    FirstTimer,
    Recreational,
    Competitive,
}

impl std::fmt::Display for AthleteLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::FirstTimer => "first_timer",
            Self::Recreational => "recreational",
            Self::Competitive => "competitive",
        };
        write!(f, "{s}")
    }
}

/// One of the three triathlon disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    Swim,
    Bike,
    Run,
}

impl std::fmt::Display for Discipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Swim => "swim",
            Self::Bike => "bike",
            Self::Run => "run",
        };
        write!(f, "{s}")
    }
}

/// Partial athlete profile, filled in field by field across the wizard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OnboardingDraft {
    pub goal: Option<AthleteLevel>,
    pub race_date: Option<NaiveDate>,
    pub experience: Option<AthleteLevel>,
    pub current_background: Option<String>,
    pub weekly_hours: Option<f64>,
    pub days_available: Option<u8>,
    pub strongest_discipline: Option<Discipline>,
    pub weakest_discipline: Option<Discipline>,
}

/// A partial set of draft fields to merge in.
///
/// Fields left `None` are untouched; fields set here overwrite whatever the
/// draft held before.
#[derive(Debug, Clone, Default)]
pub struct DraftPatch {
    pub goal: Option<AthleteLevel>,
    pub race_date: Option<NaiveDate>,
    pub experience: Option<AthleteLevel>,
    pub current_background: Option<String>,
    pub weekly_hours: Option<f64>,
    pub days_available: Option<u8>,
    pub strongest_discipline: Option<Discipline>,
    pub weakest_discipline: Option<Discipline>,
}

impl OnboardingDraft {
    /// Merge a patch into the draft. Later writes to a field win.
    pub fn apply(&mut self, patch: DraftPatch) {
        if let Some(goal) = patch.goal {
            self.goal = Some(goal);
        }
        if let Some(race_date) = patch.race_date {
            self.race_date = Some(race_date);
        }
        if let Some(experience) = patch.experience {
            self.experience = Some(experience);
        }
        if let Some(background) = patch.current_background {
            self.current_background = Some(background);
        }
        if let Some(hours) = patch.weekly_hours {
            self.weekly_hours = Some(hours);
        }
        if let Some(days) = patch.days_available {
            self.days_available = Some(days);
        }
        if let Some(strongest) = patch.strongest_discipline {
            self.strongest_discipline = Some(strongest);
        }
        if let Some(weakest) = patch.weakest_discipline {
            self.weakest_discipline = Some(weakest);
        }
    }

    /// Clear every field back to empty.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
