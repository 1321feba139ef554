//! Training plan — wire model and weekly presentation.

pub mod model;
pub mod schedule;

pub use model::{Plan, PlanPhase, PlannedSession, Weekday};
pub use schedule::{DaySessions, PlanBoard, week_schedule};
