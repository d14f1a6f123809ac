mod app;
mod config;
mod dispatch;
mod input;
mod parse;
mod substitute;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use dispatch::DispatchError;
pub use input::InputError;
pub use parse::{ParseError, RequestLineFault};
pub use substitute::SubstituteError;
pub use validation::ValidationError;
