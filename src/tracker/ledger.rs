use tracing::debug;

use crate::models::{ItemId, Meal, TrackedItem, Workout};
use crate::tracker::constants::*;
use crate::tracker::Summary;

/// In-memory ledger of the day's meals and workouts.
///
/// Holds the calorie limit, both item collections in insertion order, and a
/// running net total that is updated on every mutation rather than recomputed
/// from the collections. The running total is kept in whole millicalories so
/// that it always equals the sum of meal calories minus the sum of workout
/// calories exactly, fractions included.
///
/// The ledger never fails: callers hand it already validated values, and
/// removing an unknown id does nothing.
#[derive(Debug, Clone)]
pub struct CalorieTracker {
    calorie_limit: f64,
    total_millicalories: i64,
    meals: Vec<Meal>,
    workouts: Vec<Workout>,
}

impl Default for CalorieTracker {
    fn default() -> Self {
        Self::new(DEFAULT_CALORIE_LIMIT)
    }
}

impl CalorieTracker {
    /// Create an empty ledger with the given daily limit.
    pub fn new(calorie_limit: f64) -> Self {
        Self {
            calorie_limit,
            total_millicalories: 0,
            meals: Vec::new(),
            workouts: Vec::new(),
        }
    }

    /// Log a meal; its calories are added to the net total.
    pub fn add_meal(&mut self, meal: Meal) {
        self.total_millicalories += to_millicalories(meal.calories);
        debug!(id = %meal.id, name = %meal.name, calories = meal.calories, total = self.total_calories(), "meal added");
        self.meals.push(meal);
    }

    /// Log a workout; its calories are subtracted from the net total.
    pub fn add_workout(&mut self, workout: Workout) {
        self.total_millicalories -= to_millicalories(workout.calories);
        debug!(id = %workout.id, name = %workout.name, calories = workout.calories, total = self.total_calories(), "workout added");
        self.workouts.push(workout);
    }

    /// Remove the first meal with the given id and take its calories back off
    /// the total. Returns `None` without touching state if no meal matches.
    pub fn remove_meal(&mut self, id: ItemId) -> Option<Meal> {
        let Some(index) = self.meals.iter().position(|m| m.id == id) else {
            debug!(%id, "remove_meal: no such meal");
            return None;
        };
        let meal = self.meals.remove(index);
        self.total_millicalories -= to_millicalories(meal.calories);
        debug!(%id, name = %meal.name, total = self.total_calories(), "meal removed");
        Some(meal)
    }

    /// Remove the first workout with the given id and add its calories back
    /// to the total. Returns `None` without touching state if no workout matches.
    pub fn remove_workout(&mut self, id: ItemId) -> Option<Workout> {
        let Some(index) = self.workouts.iter().position(|w| w.id == id) else {
            debug!(%id, "remove_workout: no such workout");
            return None;
        };
        let workout = self.workouts.remove(index);
        self.total_millicalories += to_millicalories(workout.calories);
        debug!(%id, name = %workout.name, total = self.total_calories(), "workout removed");
        Some(workout)
    }

    /// Replace the daily limit. Any value is accepted, including zero and
    /// negative numbers.
    pub fn set_limit(&mut self, limit: f64) {
        debug!(old = self.calorie_limit, new = limit, "limit changed");
        self.calorie_limit = limit;
    }

    /// Clear both collections and zero the total. The limit is kept.
    pub fn reset(&mut self) {
        debug!(
            meals = self.meals.len(),
            workouts = self.workouts.len(),
            "ledger reset"
        );
        self.meals.clear();
        self.workouts.clear();
        self.total_millicalories = 0;
    }

    pub fn calorie_limit(&self) -> f64 {
        self.calorie_limit
    }

    /// Net calories: consumed minus burned.
    pub fn total_calories(&self) -> f64 {
        from_millicalories(self.total_millicalories)
    }

    /// Net total in millicalories, the unit the running total is kept in.
    pub fn total_millicalories(&self) -> i64 {
        self.total_millicalories
    }

    /// Sum of calories over all logged meals.
    pub fn calories_consumed(&self) -> f64 {
        from_millicalories(sum_millicalories(&self.meals))
    }

    /// Sum of calories over all logged workouts.
    pub fn calories_burned(&self) -> f64 {
        from_millicalories(sum_millicalories(&self.workouts))
    }

    /// Limit minus net total. Negative once the limit is exceeded.
    pub fn calories_remaining(&self) -> f64 {
        self.calorie_limit - self.total_calories()
    }

    /// Share of the limit used, in percent, clamped to `0..=100`.
    ///
    /// A zero or negative limit reports a full bar (100) instead of dividing
    /// by it. A negative net total reports an empty bar (0).
    pub fn progress_percent(&self) -> f64 {
        if self.calorie_limit <= 0.0 {
            return PROGRESS_AT_NON_POSITIVE_LIMIT;
        }
        let progress = self.total_calories() / self.calorie_limit * 100.0;
        progress.clamp(PROGRESS_MIN, PROGRESS_MAX)
    }

    /// True once nothing is left of the limit. Landing exactly on the limit
    /// counts as over.
    pub fn is_over_limit(&self) -> bool {
        self.calories_remaining() <= 0.0
    }

    /// Meals in the order they were logged.
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    /// Workouts in the order they were logged.
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn meal(&self, id: ItemId) -> Option<&Meal> {
        self.meals.iter().find(|m| m.id == id)
    }

    pub fn workout(&self, id: ItemId) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    /// True when no meals or workouts are logged.
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty() && self.workouts.is_empty()
    }

    /// Snapshot of every derived value, for renderers and JSON output.
    pub fn summary(&self) -> Summary {
        Summary {
            calorie_limit: self.calorie_limit,
            total_calories: self.total_calories(),
            calories_consumed: self.calories_consumed(),
            calories_burned: self.calories_burned(),
            calories_remaining: self.calories_remaining(),
            progress_percent: self.progress_percent(),
            over_limit: self.is_over_limit(),
            meal_count: self.meals.len(),
            workout_count: self.workouts.len(),
        }
    }
}

/// Convert calories to whole millicalories, rounding to the nearest one.
pub fn to_millicalories(calories: f64) -> i64 {
    (calories * MILLICALORIES_PER_CALORIE as f64).round() as i64
}

pub fn from_millicalories(millicalories: i64) -> f64 {
    millicalories as f64 / MILLICALORIES_PER_CALORIE as f64
}

fn sum_millicalories<T: TrackedItem>(items: &[T]) -> i64 {
    items.iter().map(|item| to_millicalories(item.calories())).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn near(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.001
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let tracker = CalorieTracker::default();
        assert!(tracker.is_empty());
        assert!(near(tracker.calorie_limit(), DEFAULT_CALORIE_LIMIT));
        assert!(near(tracker.total_calories(), 0.0));
        assert!(near(tracker.progress_percent(), 0.0));
        assert!(!tracker.is_over_limit());
    }

    #[test]
    fn test_add_meal_and_workout_move_total() {
        let mut tracker = CalorieTracker::new(2000.0);
        tracker.add_meal(Meal::new("Eggs", 300.0));
        assert!(near(tracker.total_calories(), 300.0));

        tracker.add_workout(Workout::new("Running", 200.0));
        assert!(near(tracker.total_calories(), 100.0));
        assert!(near(tracker.calories_consumed(), 300.0));
        assert!(near(tracker.calories_burned(), 200.0));
    }

    #[test]
    fn test_remove_meal_takes_calories_back() {
        let mut tracker = CalorieTracker::new(2000.0);
        let meal = Meal::new("Pasta", 700.0);
        let id = meal.id;
        tracker.add_meal(meal);

        let removed = tracker.remove_meal(id).unwrap();
        assert_eq!(removed.name, "Pasta");
        assert!(near(tracker.total_calories(), 0.0));
        assert!(tracker.meals().is_empty());
    }

    #[test]
    fn test_remove_workout_adds_calories_back() {
        let mut tracker = CalorieTracker::new(2000.0);
        tracker.add_meal(Meal::new("Pasta", 700.0));
        let workout = Workout::new("Swim", 400.0);
        let id = workout.id;
        tracker.add_workout(workout);
        assert!(near(tracker.total_calories(), 300.0));

        tracker.remove_workout(id);
        assert!(near(tracker.total_calories(), 700.0));
        assert!(tracker.workouts().is_empty());
    }

    #[test]
    fn test_fractional_calories_cancel_exactly() {
        let mut tracker = CalorieTracker::new(2000.0);
        let a = Meal::new("Snack", 0.1);
        let b = Meal::new("Snack", 0.2);
        let (a_id, b_id) = (a.id, b.id);
        tracker.add_meal(a);
        tracker.add_meal(b);
        assert_eq!(tracker.calories_consumed(), 0.3);

        tracker.remove_meal(a_id);
        tracker.remove_meal(b_id);
        assert!(tracker.is_empty());
        assert_eq!(tracker.total_calories(), 0.0);
        assert_eq!(tracker.total_millicalories(), 0);
    }

    #[test]
    fn test_millicalorie_conversion_rounds() {
        assert_eq!(to_millicalories(12.5), 12_500);
        assert_eq!(to_millicalories(0.1 + 0.2), 300);
        assert_eq!(to_millicalories(-40.0004), -40_000);
        assert_eq!(from_millicalories(1_500), 1.5);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut tracker = CalorieTracker::new(2000.0);
        tracker.add_meal(Meal::new("Eggs", 300.0));
        let stray = Workout::new("Yoga", 100.0);

        assert!(tracker.remove_meal(stray.id).is_none());
        assert!(tracker.remove_workout(stray.id).is_none());
        assert_eq!(tracker.meals().len(), 1);
        assert!(near(tracker.total_calories(), 300.0));
    }

    #[test]
    fn test_meal_id_does_not_remove_workout() {
        let mut tracker = CalorieTracker::new(2000.0);
        let meal = Meal::new("Eggs", 300.0);
        let meal_id = meal.id;
        tracker.add_meal(meal);
        tracker.add_workout(Workout::new("Run", 100.0));

        assert!(tracker.remove_workout(meal_id).is_none());
        assert_eq!(tracker.workouts().len(), 1);
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut tracker = CalorieTracker::new(2000.0);
        let first = Meal::new("Soup", 100.0);
        let mut second = Meal::new("Soup again", 250.0);
        second.id = first.id;
        let id = first.id;
        tracker.add_meal(first);
        tracker.add_meal(second);

        tracker.remove_meal(id);
        assert_eq!(tracker.meals().len(), 1);
        assert_eq!(tracker.meals()[0].name, "Soup again");
        assert!(near(tracker.total_calories(), 250.0));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut tracker = CalorieTracker::new(2000.0);
        for name in ["Breakfast", "Lunch", "Dinner"] {
            tracker.add_meal(Meal::new(name, 500.0));
        }
        let lunch = tracker.meals()[1].id;
        tracker.remove_meal(lunch);

        let names: Vec<&str> = tracker.meals().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Breakfast", "Dinner"]);
    }

    #[test]
    fn test_lookup_by_id() {
        let mut tracker = CalorieTracker::new(2000.0);
        let workout = Workout::new("Row", 320.0);
        let id = workout.id;
        tracker.add_workout(workout);

        assert_eq!(tracker.workout(id).map(|w| w.name.as_str()), Some("Row"));
        assert!(tracker.meal(id).is_none());
    }

    #[test]
    fn test_exactly_at_limit_is_over() {
        let mut tracker = CalorieTracker::new(500.0);
        tracker.add_meal(Meal::new("Burger", 500.0));
        assert!(near(tracker.calories_remaining(), 0.0));
        assert!(tracker.is_over_limit());
        assert!(near(tracker.progress_percent(), 100.0));
    }

    #[test]
    fn test_progress_clamps_above_limit() {
        let mut tracker = CalorieTracker::new(1000.0);
        tracker.add_meal(Meal::new("Feast", 2500.0));
        assert!(near(tracker.progress_percent(), 100.0));
        assert!(near(tracker.calories_remaining(), -1500.0));
    }

    #[test]
    fn test_progress_clamps_negative_total_to_zero() {
        let mut tracker = CalorieTracker::new(2000.0);
        tracker.add_workout(Workout::new("Marathon", 2600.0));
        assert!(near(tracker.progress_percent(), 0.0));
        assert!(!tracker.is_over_limit());
    }

    #[test]
    fn test_progress_with_zero_limit_is_full() {
        let tracker = CalorieTracker::new(0.0);
        assert!(near(tracker.progress_percent(), 100.0));
        assert!(tracker.is_over_limit());
    }

    #[test]
    fn test_progress_with_negative_limit_is_full() {
        let mut tracker = CalorieTracker::new(2000.0);
        tracker.set_limit(-10.0);
        assert!(near(tracker.progress_percent(), 100.0));
    }

    #[test]
    fn test_reset_keeps_limit() {
        let mut tracker = CalorieTracker::new(2000.0);
        tracker.set_limit(1800.0);
        tracker.add_meal(Meal::new("Eggs", 300.0));
        tracker.add_workout(Workout::new("Run", 200.0));

        tracker.reset();
        assert!(tracker.is_empty());
        assert!(near(tracker.total_calories(), 0.0));
        assert!(near(tracker.calorie_limit(), 1800.0));
    }

    #[test]
    fn test_summary_matches_accessors() {
        let mut tracker = CalorieTracker::new(2000.0);
        tracker.add_meal(Meal::new("Eggs", 300.0));
        tracker.add_workout(Workout::new("Run", 200.0));

        let summary = tracker.summary();
        assert!(near(summary.total_calories, tracker.total_calories()));
        assert!(near(summary.calories_remaining, 1900.0));
        assert!(near(summary.progress_percent, 5.0));
        assert_eq!(summary.meal_count, 1);
        assert_eq!(summary.workout_count, 1);
        assert!(!summary.over_limit);
    }
}
