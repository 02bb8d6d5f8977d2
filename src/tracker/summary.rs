use serde::Serialize;

/// Point-in-time view of the ledger's derived values.
///
/// Renderers read this after each change instead of reaching into the ledger
/// for every number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Daily calorie limit.
    pub calorie_limit: f64,

    /// Net calories (consumed minus burned).
    pub total_calories: f64,

    /// Calories from all logged meals.
    pub calories_consumed: f64,

    /// Calories from all logged workouts.
    pub calories_burned: f64,

    /// Limit minus net calories.
    pub calories_remaining: f64,

    /// Progress toward the limit, in percent, within `0..=100`.
    pub progress_percent: f64,

    /// Whether remaining calories have reached zero or below.
    pub over_limit: bool,

    pub meal_count: usize,
    pub workout_count: usize,
}
