pub mod actions;
pub mod engine;
pub mod wipe;

pub use engine::{run_clean, CategoryOutcome, CleanMode, CleanOptions, CleanSummary};
