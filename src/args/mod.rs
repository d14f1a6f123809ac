//! CLI argument types.
mod cli;
mod types;


pub use cli::SnipeArgs;
pub use types::{BodyMode, ErrorPolicy, FillMode};
