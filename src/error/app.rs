use thiserror::Error;

use super::{
    ConfigError, DispatchError, InputError, ParseError, SubstituteError, ValidationError,
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Input error: {0}")]
    Input(#[from] InputError),
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Substitution error: {0}")]
    Substitute(#[from] SubstituteError),
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),
    #[error("Run aborted at {label}: {source}")]
    Aborted {
        label: String,
        #[source]
        source: Box<AppError>,
    },
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    #[must_use]
    pub fn validation<E>(error: E) -> Self
    where
        E: Into<ValidationError>,
    {
        error.into().into()
    }

    #[must_use]
    pub fn config<E>(error: E) -> Self
    where
        E: Into<ConfigError>,
    {
        error.into().into()
    }

    #[must_use]
    pub fn input<E>(error: E) -> Self
    where
        E: Into<InputError>,
    {
        error.into().into()
    }
}
