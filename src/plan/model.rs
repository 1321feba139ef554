//! Training plan wire types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::onboarding::draft::Discipline;

/// Canonical day ordering for plan display, Monday through Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Every day in display order.
    pub const ALL: [Weekday; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Parse a backend day name ("Monday", case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "monday" => Some(Self::Monday),
            "tuesday" => Some(Self::Tuesday),
            "wednesday" => Some(Self::Wednesday),
            "thursday" => Some(Self::Thursday),
            "friday" => Some(Self::Friday),
            "saturday" => Some(Self::Saturday),
            "sunday" => Some(Self::Sunday),
            _ => None,
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        };
        write!(f, "{s}")
    }
}

/// One scheduled training session, exactly as the backend produced it.
///
/// `day` stays a raw string so one session with an unexpected day name
/// cannot fail the whole plan decode; the weekly view parses it instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedSession {
    pub id: String,
    /// Week number, 1-based relative to plan start.
    pub week: u32,
    pub day: String,
    pub sport: Discipline,
    pub duration_minutes: u32,
    /// Training intensity zone code.
    pub zone: u8,
    /// Short human label for the zone.
    pub zone_label: String,
    pub description: String,
}

/// A named block of the plan (Base, Build, Peak, Taper).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanPhase {
    pub name: String,
    pub weeks: u32,
    pub start_week: u32,
    pub end_week: u32,
    pub focus: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

/// The full training plan for one athlete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
    pub weeks_until_race: u32,
    #[serde(default)]
    pub phases: Vec<PlanPhase>,
    pub sessions: Vec<PlannedSession>,
}

impl Plan {
    /// The phase whose week range contains `week`, if any.
    pub fn phase_for_week(&self, week: u32) -> Option<&PlanPhase> {
        self.phases
            .iter()
            .find(|p| p.start_week <= week && week <= p.end_week)
    }
}
