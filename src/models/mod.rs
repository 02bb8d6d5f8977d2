mod item;

pub use item::{ItemId, ItemKind, Meal, TrackedItem, Workout};
