//! Configuration loading and application.
mod apply;
mod loader;
mod run;
pub mod types;


pub use apply::apply_config;
pub use loader::{DEFAULT_CONFIG_FILES, load_config, load_config_file};
pub use run::{DEFAULT_TIMEOUT, RunConfig};
