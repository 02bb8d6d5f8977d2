use dialoguer::{Confirm, Input, Select};

use crate::error::Result;
use crate::interface::input::{parse_calories, parse_limit, parse_name};
use crate::interface::render::item_label;
use crate::interface::session::Action;
use crate::models::{ItemId, ItemKind, Meal, TrackedItem, Workout};
use crate::tracker::CalorieTracker;

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddMeal,
    AddWorkout,
    RemoveMeal,
    RemoveWorkout,
    SetLimit,
    Filter,
    Reset,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::AddMeal,
        MenuChoice::AddWorkout,
        MenuChoice::RemoveMeal,
        MenuChoice::RemoveWorkout,
        MenuChoice::SetLimit,
        MenuChoice::Filter,
        MenuChoice::Reset,
        MenuChoice::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddMeal => "Add meal",
            MenuChoice::AddWorkout => "Add workout",
            MenuChoice::RemoveMeal => "Remove meal",
            MenuChoice::RemoveWorkout => "Remove workout",
            MenuChoice::SetLimit => "Set daily limit",
            MenuChoice::Filter => "Filter items",
            MenuChoice::Reset => "Reset day",
            MenuChoice::Quit => "Quit",
        }
    }
}

/// What the session loop should do after one round of prompting.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Apply(Action),
    Filter(String),
    Skip,
    Quit,
}

/// Show the main menu.
pub fn prompt_menu() -> Result<MenuChoice> {
    let labels: Vec<&str> = MenuChoice::ALL.iter().map(MenuChoice::label).collect();
    let selection = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(MenuChoice::ALL.get(selection).copied().unwrap_or(MenuChoice::Quit))
}

/// Prompt for a name and calorie amount, re-asking until both are valid.
pub fn prompt_item(kind: ItemKind) -> Result<(String, f64)> {
    let name: String = Input::new()
        .with_prompt(format!("{} name", capitalize(kind.label())))
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            parse_name(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;

    let calories: String = Input::new()
        .with_prompt("Calories")
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            parse_calories(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;

    Ok((parse_name(&name)?, parse_calories(&calories)?))
}

/// Prompt for a new daily limit.
pub fn prompt_limit(current: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Daily calorie limit")
        .default(current.to_string())
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            parse_limit(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;

    parse_limit(&input)
}

/// Let the user pick one of `items`. Returns `None` on cancel or when the
/// list is empty.
pub fn prompt_pick<T: TrackedItem>(kind: ItemKind, items: &[T]) -> Result<Option<ItemId>> {
    if items.is_empty() {
        println!("No {}s logged.", kind.label());
        return Ok(None);
    }

    let mut options: Vec<String> = items.iter().map(item_label).collect();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt(format!("Which {} should be removed?", kind.label()))
        .items(&options)
        .default(0)
        .interact()?;

    Ok(items.get(selection).map(TrackedItem::id))
}

/// Prompt for a filter query. Empty clears the filter.
pub fn prompt_filter() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Filter by name (empty to clear)")
        .allow_empty(true)
        .interact_text()?;

    Ok(input.trim().to_string())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Run one round of the menu and turn the answers into a [`Step`].
pub fn prompt_step(tracker: &CalorieTracker) -> Result<Step> {
    let step = match prompt_menu()? {
        MenuChoice::AddMeal => {
            let (name, calories) = prompt_item(ItemKind::Meal)?;
            Step::Apply(Action::AddMeal(Meal::new(name, calories)))
        }
        MenuChoice::AddWorkout => {
            let (name, calories) = prompt_item(ItemKind::Workout)?;
            Step::Apply(Action::AddWorkout(Workout::new(name, calories)))
        }
        MenuChoice::RemoveMeal => match prompt_pick(ItemKind::Meal, tracker.meals())? {
            Some(id) => Step::Apply(Action::RemoveMeal(id)),
            None => Step::Skip,
        },
        MenuChoice::RemoveWorkout => match prompt_pick(ItemKind::Workout, tracker.workouts())? {
            Some(id) => Step::Apply(Action::RemoveWorkout(id)),
            None => Step::Skip,
        },
        MenuChoice::SetLimit => Step::Apply(Action::SetLimit(prompt_limit(tracker.calorie_limit())?)),
        MenuChoice::Filter => Step::Filter(prompt_filter()?),
        MenuChoice::Reset => {
            if prompt_yes_no("Clear all meals and workouts?", false)? {
                Step::Apply(Action::Reset)
            } else {
                Step::Skip
            }
        }
        MenuChoice::Quit => Step::Quit,
    };

    Ok(step)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
