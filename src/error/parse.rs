use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RequestLineFault {
    #[error("expected exactly three space-separated parts")]
    PartCount,
    #[error("method is empty")]
    EmptyMethod,
    #[error("path is empty")]
    EmptyPath,
    #[error("protocol must look like HTTP/<major> or HTTP/<major>.<minor>")]
    InvalidVersion,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed request line '{line}': {fault}")]
    MalformedRequest {
        line: String,
        fault: RequestLineFault,
    },
    #[error("Malformed header on line {line_number}: '{line}'. Expected 'Name: Value'")]
    MalformedHeader { line_number: usize, line: String },
}

impl ParseError {
    /// The input line the parser rejected.
    #[must_use]
    pub fn line(&self) -> &str {
        match self {
            Self::MalformedRequest { line, .. } | Self::MalformedHeader { line, .. } => line,
        }
    }
}
