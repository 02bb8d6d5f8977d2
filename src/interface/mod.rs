pub mod filter;
pub mod input;
pub mod prompts;
pub mod render;
pub mod session;

pub use filter::filter_items;
pub use input::{parse_calories, parse_entry, parse_limit, parse_name};
pub use prompts::{prompt_step, prompt_yes_no, MenuChoice, Step};
pub use render::{format_summary, format_tracker, TerminalRenderer};
pub use session::{Action, Renderer, Session};
