use tracing::info;

use crate::models::{ItemId, Meal, Workout};
use crate::tracker::CalorieTracker;

/// A state change requested by the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddMeal(Meal),
    AddWorkout(Workout),
    RemoveMeal(ItemId),
    RemoveWorkout(ItemId),
    SetLimit(f64),
    Reset,
}

/// Anything that can show the tracker. Called after every applied action.
pub trait Renderer {
    fn render(&mut self, tracker: &CalorieTracker);
}

/// Owns one ledger and the renderer that displays it.
///
/// All mutations go through [`Session::apply`], which updates the ledger and
/// then re-renders exactly once. The ledger itself never renders.
pub struct Session<R: Renderer> {
    tracker: CalorieTracker,
    renderer: R,
}

impl<R: Renderer> Session<R> {
    /// Start a session and render its initial state.
    pub fn new(tracker: CalorieTracker, renderer: R) -> Self {
        let mut session = Self { tracker, renderer };
        session.renderer.render(&session.tracker);
        session
    }

    /// Apply an action to the ledger and re-render.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::AddMeal(meal) => {
                info!(name = %meal.name, calories = meal.calories, "add meal");
                self.tracker.add_meal(meal);
            }
            Action::AddWorkout(workout) => {
                info!(name = %workout.name, calories = workout.calories, "add workout");
                self.tracker.add_workout(workout);
            }
            Action::RemoveMeal(id) => {
                if let Some(meal) = self.tracker.remove_meal(id) {
                    info!(name = %meal.name, "remove meal");
                }
            }
            Action::RemoveWorkout(id) => {
                if let Some(workout) = self.tracker.remove_workout(id) {
                    info!(name = %workout.name, "remove workout");
                }
            }
            Action::SetLimit(limit) => {
                info!(limit, "set limit");
                self.tracker.set_limit(limit);
            }
            Action::Reset => {
                info!("reset");
                self.tracker.reset();
            }
        }

        self.renderer.render(&self.tracker);
    }

    /// Re-render without changing state, e.g. after the renderer's own
    /// settings changed.
    pub fn refresh(&mut self) {
        self.renderer.render(&self.tracker);
    }

    pub fn tracker(&self) -> &CalorieTracker {
        &self.tracker
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// End the session, handing back the ledger.
    pub fn into_tracker(self) -> CalorieTracker {
        self.tracker
    }
}
