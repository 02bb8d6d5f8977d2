use crate::error::{Result, TrackerError};

/// Validate an item name. Surrounding whitespace is dropped.
pub fn parse_name(input: &str) -> Result<String> {
    let name = input.trim();
    if name.is_empty() {
        return Err(TrackerError::InvalidInput("Name must not be empty".to_string()));
    }
    Ok(name.to_string())
}

/// Parse a calorie amount. Must be a finite number.
pub fn parse_calories(input: &str) -> Result<f64> {
    parse_number(input, "calories")
}

/// Parse a daily limit. Must be a finite number; zero and negatives pass.
pub fn parse_limit(input: &str) -> Result<f64> {
    parse_number(input, "limit")
}

/// Parse the `NAME=CALORIES` form used on the command line.
pub fn parse_entry(input: &str) -> Result<(String, f64)> {
    let (name, calories) = input.rsplit_once('=').ok_or_else(|| {
        TrackerError::InvalidInput(format!("Expected NAME=CALORIES, got '{}'", input))
    })?;
    Ok((parse_name(name)?, parse_calories(calories)?))
}

fn parse_number(input: &str, what: &str) -> Result<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::InvalidInput(format!("{} must not be empty", what)));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| TrackerError::InvalidInput(format!("Invalid {}: '{}'", what, trimmed)))?;

    if !value.is_finite() {
        return Err(TrackerError::InvalidInput(format!(
            "Invalid {}: '{}'",
            what, trimmed
        )));
    }

    Ok(value)
}
