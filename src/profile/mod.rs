//! Athlete profile — wire model, race countdown, and the profile tab state.

pub mod countdown;
pub mod model;
pub mod screen;

pub use countdown::{Countdown, days_until, weeks_until};
pub use model::{AthleteProfile, ProfileSubmission};
pub use screen::{ProfileLoad, ProfileScreen};
