use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::interface::parse_limit;

/// Calorie Tracker: log meals and workouts against a daily calorie limit.
#[derive(Parser, Debug)]
#[command(name = "calorie_tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a JSON config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Daily calorie limit (overrides config and environment).
    #[arg(short, long, global = true, allow_negative_numbers = true, value_parser = parse_limit_arg)]
    pub limit: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start an interactive tracking session.
    Session,

    /// Tally the given meals and workouts and print the result.
    Tally {
        /// A meal as NAME=CALORIES. Repeatable.
        #[arg(short, long = "meal", value_name = "NAME=CALORIES")]
        meals: Vec<String>,

        /// A workout as NAME=CALORIES. Repeatable.
        #[arg(short, long = "workout", value_name = "NAME=CALORIES")]
        workouts: Vec<String>,

        /// Print the summary as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Validate `--limit` the same way prompts and the environment are validated.
fn parse_limit_arg(s: &str) -> Result<f64, String> {
    parse_limit(s).map_err(|e| e.to_string())
}

impl Default for Command {
    fn default() -> Self {
        Command::Session
    }
}
