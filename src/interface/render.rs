use std::fmt::Write;

use crate::interface::filter::filter_items;
use crate::interface::session::Renderer;
use crate::models::TrackedItem;
use crate::tracker::{CalorieTracker, Summary};

/// Width of the textual progress bar, in cells.
pub const PROGRESS_BAR_WIDTH: usize = 30;

/// Render the tally block: limit, totals, remaining and progress.
pub fn format_summary(summary: &Summary) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== Calorie Tracker ===");
    let _ = writeln!(out, "Daily limit: {:>8.0}", summary.calorie_limit);
    let _ = writeln!(out, "Net total:   {:>8.0}", summary.total_calories);
    let _ = writeln!(out, "Consumed:    {:>8.0}", summary.calories_consumed);
    let _ = writeln!(out, "Burned:      {:>8.0}", summary.calories_burned);
    let _ = writeln!(out, "Remaining:   {:>8.0}", summary.calories_remaining);
    let _ = writeln!(
        out,
        "{} {:>3.0}%",
        format_progress_bar(summary.progress_percent),
        summary.progress_percent
    );

    if summary.over_limit {
        let _ = writeln!(out, "!! Daily limit reached");
    }

    out
}

/// Draw a bar like `[#####.....]` for a percentage in `0..=100`.
pub fn format_progress_bar(percent: f64) -> String {
    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    let filled = (ratio * PROGRESS_BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        ".".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}

/// Render a numbered list of items with their calories and ids.
pub fn format_item_list<T: TrackedItem>(title: &str, items: &[&T]) -> String {
    if items.is_empty() {
        return format!("{}: (none)\n", title);
    }

    let mut out = String::new();
    let _ = writeln!(out, "--- {} ({}) ---", title, items.len());

    let max_name_len = items.iter().map(|i| i.name().len()).max().unwrap_or(10);
    for (i, item) in items.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {:<width$}  {:>6.0} cal  [{}]",
            i + 1,
            item.name(),
            item.calories(),
            item.id(),
            width = max_name_len
        );
    }

    out
}

/// One-line label used by pickers, e.g. `Eggs (300 cal)`.
pub fn item_label<T: TrackedItem>(item: &T) -> String {
    format!("{} ({:.0} cal)", item.name(), item.calories())
}

/// Render the full screen: tally plus both lists narrowed by `filter`.
pub fn format_tracker(tracker: &CalorieTracker, filter: &str) -> String {
    let meals = filter_items(tracker.meals(), filter);
    let workouts = filter_items(tracker.workouts(), filter);

    let mut out = format_summary(&tracker.summary());
    out.push('\n');
    if !filter.trim().is_empty() {
        let _ = writeln!(out, "Filter: '{}'", filter.trim());
    }
    out.push_str(&format_item_list("Meals", &meals));
    out.push_str(&format_item_list("Workouts", &workouts));
    out
}

/// Renderer that prints the tracker to stdout after every change.
#[derive(Debug, Default)]
pub struct TerminalRenderer {
    filter: String,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Narrow the printed lists to names matching `query`.
    pub fn set_filter(&mut self, query: impl Into<String>) {
        self.filter = query.into();
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, tracker: &CalorieTracker) {
        println!();
        print!("{}", format_tracker(tracker, &self.filter));
    }
}
