use std::path::Path;

use crate::error::{AppError, AppResult, InputError};

pub(crate) fn load_template(path: &Path) -> AppResult<String> {
    std::fs::read_to_string(path).map_err(|err| {
        AppError::input(InputError::ReadTemplate {
            path: path.to_path_buf(),
            source: err,
        })
    })
}

pub(crate) fn load_wordlist(path: &Path) -> AppResult<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::input(InputError::ReadWordlist {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    Ok(parse_wordlist(&content))
}

/// One payload per line. A final line break does not add an empty payload;
/// blank lines in the middle do.
pub(crate) fn parse_wordlist(content: &str) -> Vec<String> {
    content.lines().map(str::to_owned).collect()
}
