use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read request template '{path}': {source}")]
    ReadTemplate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read wordlist '{path}': {source}")]
    ReadWordlist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
