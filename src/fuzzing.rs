use std::path::{Path, PathBuf};

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::{BodyMode, FillMode, SnipeArgs};
use crate::config::types::ConfigFile;
use crate::config::{RunConfig, apply_config, load_config_file};
use crate::error::{AppError, AppResult, ConfigError, ParseError};
use crate::http::{Request, Variant, expand, parse, parse_with};

thread_local! {
    static BASE_MATCHES: ArgMatches = SnipeArgs::command().get_matches_from(["snipe"]);
}

/// Parses raw request text with the selected body mode.
///
/// # Errors
///
/// Returns an error when the request line or a header line is malformed.
pub fn parse_request_input(input: &str, last_line_body: bool) -> Result<Request, ParseError> {
    let body_mode = if last_line_body {
        BodyMode::LastLine
    } else {
        BodyMode::Full
    };
    parse_with(input, body_mode)
}

/// Serializes a parsed request and parses it again.
///
/// # Errors
///
/// Returns an error when the serialized form no longer parses.
pub fn reparse_request(request: &Request) -> Result<Request, ParseError> {
    parse(&request.to_raw())
}

/// Expands `template` with the given payloads and collects every variant.
///
/// # Errors
///
/// Returns an error when the marker is empty.
pub fn expand_input(
    template: &str,
    marker: &str,
    payloads: &[String],
    simultaneous: bool,
) -> AppResult<Vec<Variant>> {
    let mode = FillMode::from_simultaneous(simultaneous);
    Ok(expand(template, marker, payloads, mode)?.collect())
}

/// Parses TOML config and applies it to default arguments.
///
/// # Errors
///
/// Returns an error when the TOML does not parse or the arguments cannot be built.
pub fn apply_config_from_toml(input: &str) -> AppResult<RunConfig> {
    let config: ConfigFile = toml::from_str(input).map_err(|err| {
        AppError::config(ConfigError::ParseToml {
            path: PathBuf::from("<input>"),
            source: err,
        })
    })?;
    BASE_MATCHES.with(|matches| {
        let mut args = SnipeArgs::from_arg_matches(matches)?;
        apply_config(&mut args, matches, &config);
        Ok(RunConfig::from_args(&args))
    })
}

/// Loads a config file from disk.
///
/// # Errors
///
/// Returns an error when the config cannot be read or parsed.
pub fn load_config_file_input(path: &Path) -> AppResult<()> {
    load_config_file(path).map(|_| ())
}
