//! The wizard's step sequence and per-step validation.
//!
//! Steps progress linearly: Goal → RaceDate → Experience → Background →
//! WeeklyHours → DaysAvailable → Strongest → Weakest. Each step validates
//! only the field(s) it owns; nothing checks fields across steps.

use chrono::NaiveDate;

use super::draft::OnboardingDraft;

/// One step of the onboarding wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    Goal,
    RaceDate,
    Experience,
    Background,
    WeeklyHours,
    DaysAvailable,
    Strongest,
    Weakest,
}

impl OnboardingStep {
    /// Every step in wizard order.
    pub const ALL: [OnboardingStep; 8] = [
        Self::Goal,
        Self::RaceDate,
        Self::Experience,
        Self::Background,
        Self::WeeklyHours,
        Self::DaysAvailable,
        Self::Strongest,
        Self::Weakest,
    ];

    /// The first step of the wizard.
    pub fn first() -> Self {
        Self::Goal
    }

    /// Zero-based position in the sequence.
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// The next step, if any.
    pub fn next(&self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// The previous step, if any.
    pub fn previous(&self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Whether this is the terminal (submission) step.
    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    /// Whether the field(s) this step owns are present and valid, so the
    /// wizard may move forward.
    ///
    /// `today` is only consulted by [`OnboardingStep::RaceDate`], which
    /// requires a date strictly in the future.
    pub fn is_satisfied(&self, draft: &OnboardingDraft, today: NaiveDate) -> bool {
        match self {
            Self::Goal => draft.goal.is_some(),
            Self::RaceDate => draft.race_date.is_some_and(|d| d > today),
            Self::Experience => draft.experience.is_some(),
            Self::Background => draft
                .current_background
                .as_deref()
                .is_some_and(|s| !s.trim().is_empty()),
            Self::WeeklyHours => draft.weekly_hours.is_some_and(|h| h > 0.0),
            Self::DaysAvailable => draft.days_available.is_some_and(|d| (1..=7).contains(&d)),
            Self::Strongest => draft.strongest_discipline.is_some(),
            Self::Weakest => draft.weakest_discipline.is_some(),
        }
    }

    /// First step whose requirement the draft does not meet, if any.
    pub fn first_blocking(draft: &OnboardingDraft, today: NaiveDate) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|step| !step.is_satisfied(draft, today))
    }
}

impl std::fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Goal => "goal",
            Self::RaceDate => "race_date",
            Self::Experience => "experience",
            Self::Background => "current_background",
            Self::WeeklyHours => "weekly_hours",
            Self::DaysAvailable => "days_available",
            Self::Strongest => "strongest_discipline",
            Self::Weakest => "weakest_discipline",
        };
        write!(f, "{s}")
    }
}
