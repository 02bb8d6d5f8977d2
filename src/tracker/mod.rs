pub mod constants;
mod ledger;
mod summary;

pub use constants::*;
pub use ledger::{from_millicalories, to_millicalories, CalorieTracker};
pub use summary::Summary;
