//! Week-by-week plan presentation.
//!
//! The weekly view is derived from the plan on every call and never mutated
//! in place: filter the sessions to the selected week, then group them in
//! canonical Monday–Sunday order, keeping the backend's relative order
//! within a day and omitting days with nothing scheduled.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::api::CoachApi;
use crate::lifecycle::ScreenLifetime;

use super::model::{Plan, PlanPhase, PlannedSession, Weekday};

/// One day's sessions within the selected week.
#[derive(Debug)]
pub struct DaySessions<'a> {
    pub day: Weekday,
    pub sessions: Vec<&'a PlannedSession>,
}

/// Group one week's sessions by day, Monday through Sunday.
///
/// Days with no sessions are omitted. A session whose day name doesn't
/// parse matches no canonical day and is left out of the view.
pub fn week_schedule(plan: &Plan, week: u32) -> Vec<DaySessions<'_>> {
    let in_week: Vec<&PlannedSession> =
        plan.sessions.iter().filter(|s| s.week == week).collect();

    for session in &in_week {
        if Weekday::parse(&session.day).is_none() {
            debug!(id = %session.id, day = %session.day, "Session has unrecognized day name");
        }
    }

    Weekday::ALL
        .into_iter()
        .filter_map(|day| {
            let sessions: Vec<&PlannedSession> = in_week
                .iter()
                .copied()
                .filter(|s| Weekday::parse(&s.day) == Some(day))
                .collect();
            if sessions.is_empty() {
                None
            } else {
                Some(DaySessions { day, sessions })
            }
        })
        .collect()
}

/// Headless state for the plan screen: the fetched plan, the selected week,
/// and the regeneration guard.
pub struct PlanBoard {
    api: Arc<dyn CoachApi>,
    user_id: String,
    plan: Option<Plan>,
    selected_week: u32,
    regenerating: bool,
    error: Option<String>,
    lifetime: ScreenLifetime,
}

impl PlanBoard {
    pub fn new(api: Arc<dyn CoachApi>, user_id: impl Into<String>) -> Self {
        Self {
            api,
            user_id: user_id.into(),
            plan: None,
            selected_week: 1,
            regenerating: false,
            error: None,
            lifetime: ScreenLifetime::new(),
        }
    }

    /// Handle to this board's lifetime; invalidate it when the screen goes
    /// away so late responses are discarded.
    pub fn lifetime(&self) -> ScreenLifetime {
        self.lifetime.clone()
    }

    pub fn plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    pub fn selected_week(&self) -> u32 {
        self.selected_week
    }

    pub fn is_regenerating(&self) -> bool {
        self.regenerating
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch the athlete's current plan.
    ///
    /// "No plan yet" (404) clears the board without recording an error; the
    /// screen offers generation instead.
    pub async fn load(&mut self) {
        let token = self.lifetime.token();
        let result = self.api.current_plan(&self.user_id).await;
        if !token.is_live() {
            debug!("Discarding plan fetch that outlived its screen");
            return;
        }
        match result {
            Ok(plan) => {
                self.selected_week = self.selected_week.clamp(1, plan.weeks_until_race.max(1));
                self.plan = Some(plan);
                self.error = None;
            }
            Err(e) if e.is_not_found() => {
                self.plan = None;
                self.error = None;
            }
            Err(e) => {
                warn!("Failed to fetch current plan: {e}");
                self.error = Some("Couldn't load your plan. Pull to retry.".to_string());
            }
        }
    }

    /// Select a week for display, clamped to the plan's range.
    pub fn select_week(&mut self, week: u32) {
        let max_week = self
            .plan
            .as_ref()
            .map(|p| p.weeks_until_race.max(1))
            .unwrap_or(1);
        self.selected_week = week.clamp(1, max_week);
    }

    /// Request a fresh plan from the backend.
    ///
    /// Only one regeneration may be in flight; a second trigger is rejected
    /// locally and issues no request. Returns whether a new plan was
    /// applied. On success the selected week resets to 1.
    pub async fn regenerate(&mut self) -> bool {
        if self.regenerating {
            return false;
        }
        self.regenerating = true;
        let token = self.lifetime.token();
        let result = self.api.generate_plan(&self.user_id).await;
        self.regenerating = false;
        if !token.is_live() {
            debug!("Discarding regeneration that outlived its screen");
            return false;
        }
        match result {
            Ok(plan) => {
                self.plan = Some(plan);
                self.selected_week = 1;
                self.error = None;
                true
            }
            Err(e) => {
                warn!("Plan regeneration failed: {e}");
                self.error = Some("Couldn't generate a new plan. Please try again.".to_string());
                false
            }
        }
    }

    /// The selected week's sessions grouped by day.
    pub fn schedule(&self) -> Vec<DaySessions<'_>> {
        self.plan
            .as_ref()
            .map(|p| week_schedule(p, self.selected_week))
            .unwrap_or_default()
    }

    /// The plan phase covering the selected week.
    pub fn phase(&self) -> Option<&PlanPhase> {
        self.plan
            .as_ref()
            .and_then(|p| p.phase_for_week(self.selected_week))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::draft::Discipline;

    fn session(id: &str, week: u32, day: &str) -> PlannedSession {
        PlannedSession {
            id: id.to_string(),
            week,
            day: day.to_string(),
            sport: Discipline::Run,
            duration_minutes: 40,
            zone: 2,
            zone_label: "Endurance".to_string(),
            description: "Steady effort.".to_string(),
        }
    }

    fn plan_with(sessions: Vec<PlannedSession>) -> Plan {
        Plan {
            id: "plan-1".to_string(),
            user_id: "user-1".to_string(),
            generated_at: None,
            weeks_until_race: 4,
            phases: Vec::new(),
            sessions,
        }
    }

    #[test]
    fn groups_by_day_and_omits_empty_days() {
        let plan = plan_with(vec![
            session("a", 1, "Monday"),
            session("b", 1, "Monday"),
            session("c", 2, "Tuesday"),
        ]);

        let week1 = week_schedule(&plan, 1);
        assert_eq!(week1.len(), 1);
        assert_eq!(week1[0].day, Weekday::Monday);
        let ids: Vec<&str> = week1[0].sessions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);

        let week2 = week_schedule(&plan, 2);
        assert_eq!(week2.len(), 1);
        assert_eq!(week2[0].day, Weekday::Tuesday);
        assert_eq!(week2[0].sessions[0].id, "c");
    }

    #[test]
    fn days_come_out_in_monday_first_order() {
        let plan = plan_with(vec![
            session("sun", 1, "Sunday"),
            session("wed", 1, "Wednesday"),
            session("mon", 1, "Monday"),
        ]);

        let days: Vec<Weekday> = week_schedule(&plan, 1).iter().map(|g| g.day).collect();
        assert_eq!(
            days,
            vec![Weekday::Monday, Weekday::Wednesday, Weekday::Sunday]
        );
    }

    #[test]
    fn in_day_order_is_the_backend_order() {
        let plan = plan_with(vec![
            session("first", 1, "Saturday"),
            session("second", 1, "Saturday"),
            session("third", 1, "Saturday"),
        ]);

        let groups = week_schedule(&plan, 1);
        let ids: Vec<&str> = groups[0].sessions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn unknown_day_names_are_left_out() {
        let plan = plan_with(vec![
            session("ok", 1, "Friday"),
            session("odd", 1, "Someday"),
        ]);

        let groups = week_schedule(&plan, 1);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].sessions[0].id, "ok");
    }

    #[test]
    fn empty_week_yields_an_empty_view() {
        let plan = plan_with(vec![session("a", 1, "Monday")]);
        assert!(week_schedule(&plan, 3).is_empty());
    }
}
