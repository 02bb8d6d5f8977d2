/// Daily calorie limit used when nothing else is configured.
pub const DEFAULT_CALORIE_LIMIT: f64 = 2000.0;

/// Upper bound of the progress indicator.
pub const PROGRESS_MAX: f64 = 100.0;

/// Lower bound of the progress indicator. A negative net total (more burned
/// than eaten) shows as an empty bar.
pub const PROGRESS_MIN: f64 = 0.0;

/// Progress reported when the limit is zero or negative.
pub const PROGRESS_AT_NON_POSITIVE_LIMIT: f64 = PROGRESS_MAX;

/// Resolution of the running total. Calories are tracked to the nearest
/// thousandth.
pub const MILLICALORIES_PER_CALORIE: i64 = 1000;
