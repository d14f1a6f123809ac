//! Driver: loads the inputs of a run and replays every generated request.
mod inputs;
mod runner;
mod summary;

pub use runner::{RunPlan, run};
pub use summary::RunSummary;
