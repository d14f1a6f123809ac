use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::SnipeArgs;

use super::types::ConfigFile;

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

/// Applies configuration values to CLI arguments. Values given on the
/// command line always win.
pub fn apply_config(args: &mut SnipeArgs, matches: &ArgMatches, config: &ConfigFile) {
    if !is_cli(matches, "request")
        && let Some(request) = config.request.clone()
    {
        args.request = Some(request);
    }

    if !is_cli(matches, "timeout")
        && let Some(timeout) = config.timeout
    {
        args.timeout = timeout;
    }

    if !is_cli(matches, "proxy")
        && let Some(proxy) = config.proxy.clone()
    {
        args.proxy = Some(proxy);
    }

    if !is_cli(matches, "tls")
        && let Some(tls) = config.tls
    {
        args.tls = tls;
    }

    if !is_cli(matches, "fuzz")
        && let Some(fuzz) = config.fuzz.clone()
    {
        args.fuzz = Some(fuzz);
    }

    if !is_cli(matches, "wordlist")
        && let Some(wordlist) = config.wordlist.clone()
    {
        args.wordlist = Some(wordlist);
    }

    if !is_cli(matches, "simultaneous")
        && let Some(simultaneous) = config.simultaneous
    {
        args.simultaneous = simultaneous;
    }

    if !is_cli(matches, "body_mode")
        && let Some(body_mode) = config.body_mode
    {
        args.body_mode = body_mode;
    }

    if !is_cli(matches, "on_error")
        && let Some(on_error) = config.on_error
    {
        args.on_error = on_error;
    }

    if !is_cli(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    if !is_cli(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }
}
