pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod tracker;

pub use config::Config;
pub use error::{Result, TrackerError};
pub use models::{ItemId, ItemKind, Meal, TrackedItem, Workout};
pub use tracker::{CalorieTracker, Summary};
