use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubstituteError {
    #[error("Fuzz marker must not be empty (set -f/--fuzz or provide in config).")]
    InvalidMarker,
}
