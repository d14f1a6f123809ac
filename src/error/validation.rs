use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing request template (set -r/--request or provide in config).")]
    MissingRequest,
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
