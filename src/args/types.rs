use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How one payload is spread across the marker occurrences of a template.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    /// One occurrence at a time, every other occurrence blanked.
    #[default]
    Sequential,
    /// Every occurrence receives the payload.
    Simultaneous,
}

impl FillMode {
    #[must_use]
    pub const fn from_simultaneous(simultaneous: bool) -> Self {
        if simultaneous {
            Self::Simultaneous
        } else {
            Self::Sequential
        }
    }
}

/// Which part of a raw request is taken as the body.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BodyMode {
    /// Everything after the blank line that ends the headers.
    #[default]
    Full,
    /// Only the final line of the input.
    LastLine,
}

/// What the runner does when a single variant fails to parse or dispatch.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Report the failure and move on to the next variant.
    #[default]
    Continue,
    /// Stop the run at the first failure.
    Abort,
}
