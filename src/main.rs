use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use thryve_client::api::{CoachApi, HttpCoachApi};
use thryve_client::auth::{AppRoute, SessionProvider, StaticSession, resolve_route};
use thryve_client::chat::ChatCoach;
use thryve_client::config::ClientConfig;
use thryve_client::onboarding::{
    AthleteLevel, Discipline, DraftPatch, OnboardingStep, OnboardingWizard,
};
use thryve_client::plan::PlanBoard;
use thryve_client::profile::{days_until, weeks_until};
use thryve_client::strava::{authorize_url, code_from_redirect};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ClientConfig::from_env()?;

    let user_id = std::env::var("THRYVE_USER_ID")
        .unwrap_or_else(|_| "00000000-0000-0000-0000-000000000001".to_string());
    let email =
        std::env::var("THRYVE_USER_EMAIL").unwrap_or_else(|_| "athlete@thryve.local".to_string());

    eprintln!("🏊🚴🏃 ThryveIQ client v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Backend: {}", config.base_url);
    eprintln!("   Athlete: {email} ({user_id})");
    eprintln!("   Chat with your coach, or use /plan /week N /regen /profile /strava /quit\n");

    let api: Arc<dyn CoachApi> = Arc::new(HttpCoachApi::new(&config));
    let sessions: Arc<dyn SessionProvider> = Arc::new(StaticSession::new(&user_id, &email));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let today = Local::now().date_naive();

    // Route guard: no profile yet means the wizard runs first.
    let session = sessions.session();
    let fetched = match &session {
        Some(s) => Some(api.get_profile(&s.user_id).await),
        None => None,
    };
    if resolve_route(session.as_ref(), fetched.as_ref()) == AppRoute::Onboarding {
        run_wizard(api.as_ref(), &user_id, today, &mut lines).await?;
    }

    let mut coach = ChatCoach::new(Arc::clone(&api), &user_id);
    let mut board = PlanBoard::new(Arc::clone(&api), &user_id);

    eprint!("> ");
    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();
        match line.as_str() {
            "" => {}
            "/quit" => break,
            "/plan" => {
                board.load().await;
                print_board(&board);
            }
            "/regen" => {
                eprintln!("Generating a fresh plan...");
                if board.regenerate().await {
                    print_board(&board);
                } else if let Some(err) = board.error() {
                    eprintln!("{err}");
                }
            }
            "/profile" => {
                show_profile(api.as_ref(), &user_id, today).await;
            }
            "/strava" => {
                link_strava(Arc::clone(&api), &user_id, &mut lines).await?;
            }
            cmd if cmd.starts_with("/week ") => {
                match cmd.trim_start_matches("/week ").trim().parse::<u32>() {
                    Ok(week) => {
                        board.select_week(week);
                        print_board(&board);
                    }
                    Err(_) => eprintln!("Usage: /week N"),
                }
            }
            text => {
                coach.set_input(text);
                if coach.send().await {
                    if let Some(reply) = coach.transcript().last() {
                        eprintln!("\ncoach: {}\n", reply.text);
                    }
                }
            }
        }
        eprint!("> ");
    }

    Ok(())
}

/// Walk the onboarding wizard on stdin, then submit.
async fn run_wizard(
    api: &dyn CoachApi,
    user_id: &str,
    today: NaiveDate,
    lines: &mut Lines<BufReader<Stdin>>,
) -> anyhow::Result<()> {
    eprintln!("Let's set up your athlete profile.\n");
    let mut wizard = OnboardingWizard::new();

    loop {
        let step = wizard.step();
        eprint!("{}: ", prompt_for(step));
        let Some(line) = lines.next_line().await? else {
            anyhow::bail!("stdin closed during onboarding");
        };
        let input = line.trim();

        if input == "/back" {
            wizard.back();
            continue;
        }
        wizard.update(patch_for(step, input));

        if !wizard.advance(today) {
            if wizard.step().is_last() && wizard.can_advance(today) {
                // Terminal step satisfied — submit.
                match wizard.submit(api, user_id, today).await {
                    Ok(profile) => {
                        eprintln!(
                            "\nProfile saved. {} days to race day, see you on the start line.\n",
                            days_until(profile.race_date, today)
                        );
                        return Ok(());
                    }
                    Err(e) => eprintln!("Submission failed ({e}). Fix the field and try again."),
                }
            } else {
                eprintln!("That doesn't look right — try again (or /back).");
            }
        }
    }
}

fn prompt_for(step: OnboardingStep) -> &'static str {
    match step {
        OnboardingStep::Goal => "Goal (first_timer / recreational / competitive)",
        OnboardingStep::RaceDate => "Race date (YYYY-MM-DD)",
        OnboardingStep::Experience => "Experience (first_timer / recreational / competitive)",
        OnboardingStep::Background => "Tell us about your training background",
        OnboardingStep::WeeklyHours => "Weekly training hours",
        OnboardingStep::DaysAvailable => "Days available per week (1-7)",
        OnboardingStep::Strongest => "Strongest discipline (swim / bike / run)",
        OnboardingStep::Weakest => "Weakest discipline (swim / bike / run)",
    }
}

fn patch_for(step: OnboardingStep, input: &str) -> DraftPatch {
    let mut patch = DraftPatch::default();
    match step {
        OnboardingStep::Goal => patch.goal = parse_level(input),
        OnboardingStep::RaceDate => patch.race_date = input.parse().ok(),
        OnboardingStep::Experience => patch.experience = parse_level(input),
        OnboardingStep::Background => {
            if !input.is_empty() {
                patch.current_background = Some(input.to_string());
            }
        }
        OnboardingStep::WeeklyHours => patch.weekly_hours = input.parse().ok(),
        OnboardingStep::DaysAvailable => patch.days_available = input.parse().ok(),
        OnboardingStep::Strongest => patch.strongest_discipline = parse_discipline(input),
        OnboardingStep::Weakest => patch.weakest_discipline = parse_discipline(input),
    }
    patch
}

fn parse_level(input: &str) -> Option<AthleteLevel> {
    match input.to_ascii_lowercase().as_str() {
        "first_timer" | "first" => Some(AthleteLevel::FirstTimer),
        "recreational" => Some(AthleteLevel::Recreational),
        "competitive" => Some(AthleteLevel::Competitive),
        _ => None,
    }
}

fn parse_discipline(input: &str) -> Option<Discipline> {
    match input.to_ascii_lowercase().as_str() {
        "swim" => Some(Discipline::Swim),
        "bike" => Some(Discipline::Bike),
        "run" => Some(Discipline::Run),
        _ => None,
    }
}

fn print_board(board: &PlanBoard) {
    let Some(plan) = board.plan() else {
        eprintln!("No plan yet — use /regen to generate one.");
        return;
    };
    eprintln!(
        "Week {}/{} {}",
        board.selected_week(),
        plan.weeks_until_race,
        board
            .phase()
            .map(|p| format!("— {} phase: {}", p.name, p.focus))
            .unwrap_or_default()
    );
    for group in board.schedule() {
        eprintln!("  {}", group.day);
        for s in group.sessions {
            eprintln!(
                "    {} {}min [{} — {}] {}",
                s.sport, s.duration_minutes, s.zone, s.zone_label, s.description
            );
        }
    }
}

async fn show_profile(api: &dyn CoachApi, user_id: &str, today: NaiveDate) {
    match api.get_profile(user_id).await {
        Ok(profile) => {
            eprintln!(
                "Goal: {} | Race: {} ({} days, {} weeks) | {}h over {} days/week",
                profile.goal,
                profile.race_date,
                days_until(profile.race_date, today),
                weeks_until(profile.race_date, today),
                profile.weekly_hours,
                profile.days_available,
            );
        }
        Err(e) => eprintln!("Couldn't load profile: {e}"),
    }
}

async fn link_strava(
    api: Arc<dyn CoachApi>,
    user_id: &str,
    lines: &mut Lines<BufReader<Stdin>>,
) -> anyhow::Result<()> {
    let mut link = thryve_client::strava::StravaLink::new(Arc::clone(&api), user_id);
    link.refresh().await;
    if link.status().connected {
        eprintln!(
            "Strava connected as {}. Type 'disconnect' to unlink, anything else to keep it.",
            link.status().athlete_name.as_deref().unwrap_or("athlete")
        );
        if let Some(line) = lines.next_line().await? {
            if line.trim() == "disconnect" && link.disconnect().await {
                eprintln!("Disconnected.");
            }
        }
        return Ok(());
    }

    let client_id = std::env::var("THRYVE_STRAVA_CLIENT_ID").unwrap_or_default();
    if client_id.is_empty() {
        eprintln!("Set THRYVE_STRAVA_CLIENT_ID to link Strava.");
        return Ok(());
    }
    eprintln!(
        "Open this URL, authorize, then paste the redirect URL:\n{}",
        authorize_url(&client_id, "thryve://oauth/strava")
    );
    if let Some(line) = lines.next_line().await? {
        match code_from_redirect(line.trim()) {
            Some(code) => {
                if link.complete_link(&code).await {
                    eprintln!(
                        "Connected as {}.",
                        link.status().athlete_name.as_deref().unwrap_or("athlete")
                    );
                } else if let Some(err) = link.error() {
                    eprintln!("{err}");
                }
            }
            None => eprintln!("No authorization code in that URL."),
        }
    }
    Ok(())
}
