use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Opaque identifier for a logged meal or workout.
///
/// Drawn from 64 random bits, so collisions within one session are not a
/// practical concern. Displayed as 16 lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    /// Generate a fresh random id.
    pub fn random() -> Self {
        Self(rand::random())
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        u64::from_str_radix(s.trim(), 16).map(Self)
    }
}

impl Serialize for ItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Which collection an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Meal,
    Workout,
}

impl ItemKind {
    /// Lowercase label used in prompts and log fields.
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Meal => "meal",
            ItemKind::Workout => "workout",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Shared shape of meals and workouts.
pub trait TrackedItem {
    fn id(&self) -> ItemId;
    fn name(&self) -> &str;
    fn calories(&self) -> f64;
}

/// A logged meal. Its calories count toward the daily total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meal {
    pub id: ItemId,
    pub name: String,
    pub calories: f64,
}

impl Meal {
    pub fn new(name: impl Into<String>, calories: f64) -> Self {
        Self {
            id: ItemId::random(),
            name: name.into(),
            calories,
        }
    }
}

/// A logged workout. Its calories are subtracted from the daily total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Workout {
    pub id: ItemId,
    pub name: String,
    pub calories: f64,
}

impl Workout {
    pub fn new(name: impl Into<String>, calories: f64) -> Self {
        Self {
            id: ItemId::random(),
            name: name.into(),
            calories,
        }
    }
}

impl TrackedItem for Meal {
    fn id(&self) -> ItemId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn calories(&self) -> f64 {
        self.calories
    }
}

impl TrackedItem for Workout {
    fn id(&self) -> ItemId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn calories(&self) -> f64 {
        self.calories
    }
}
