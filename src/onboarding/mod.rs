//! Onboarding wizard — the linear first-run flow that builds an athlete
//! profile.
//!
//! A draft record accumulates one field per step; each step gates forward
//! navigation on its own field(s) only. The last step submits the whole
//! draft to the backend, and the draft itself is never persisted — abandon
//! the wizard and it's gone.

pub mod draft;
pub mod steps;
pub mod wizard;

pub use draft::{AthleteLevel, Discipline, DraftPatch, OnboardingDraft};
pub use steps::OnboardingStep;
pub use wizard::{OnboardingWizard, SubmitError};
