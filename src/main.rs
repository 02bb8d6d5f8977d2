use clap::Parser;
use tracing::{debug, warn};

use calorie_tracker::cli::{Cli, Command};
use calorie_tracker::error::{Result, TrackerError};
use calorie_tracker::interface::{
    format_tracker, parse_entry, prompt_step, Session, Step, TerminalRenderer,
};
use calorie_tracker::logging::init_logging;
use calorie_tracker::{CalorieTracker, Config, Meal, Workout};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    init_logging(&config.log_level);

    let limit = cli.limit.unwrap_or(config.calorie_limit);
    debug!(limit, "starting tracker");
    let tracker = CalorieTracker::new(limit);

    match cli.command.unwrap_or_default() {
        Command::Session => cmd_session(tracker),
        Command::Tally {
            meals,
            workouts,
            json,
        } => cmd_tally(tracker, &meals, &workouts, json),
    }
}

/// Interactive loop: prompt, apply, re-render, until the user quits.
fn cmd_session(tracker: CalorieTracker) -> Result<()> {
    let mut session = Session::new(tracker, TerminalRenderer::new());

    loop {
        println!();
        match prompt_step(session.tracker()) {
            Ok(Step::Apply(action)) => session.apply(action),
            Ok(Step::Filter(query)) => {
                session.renderer_mut().set_filter(query);
                session.refresh();
            }
            Ok(Step::Skip) => {}
            Ok(Step::Quit) => break,
            Err(TrackerError::InvalidInput(msg)) => {
                warn!(%msg, "rejected input");
                println!("{}", msg);
            }
            Err(e) => return Err(e),
        }
    }

    let summary = session.tracker().summary();
    println!(
        "Goodbye. Net total for the session: {:.0} of {:.0} calories.",
        summary.total_calories, summary.calorie_limit
    );
    Ok(())
}

/// Build a ledger from command-line entries and print it once.
fn cmd_tally(
    mut tracker: CalorieTracker,
    meals: &[String],
    workouts: &[String],
    json: bool,
) -> Result<()> {
    for entry in meals {
        let (name, calories) = parse_entry(entry)?;
        tracker.add_meal(Meal::new(name, calories));
    }
    for entry in workouts {
        let (name, calories) = parse_entry(entry)?;
        tracker.add_workout(Workout::new(name, calories));
    }

    if json {
        let output = serde_json::json!({
            "summary": tracker.summary(),
            "meals": tracker.meals(),
            "workouts": tracker.workouts(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", format_tracker(&tracker, ""));
    }

    Ok(())
}
