use clap::{ArgAction, Parser};

use super::types::{BodyMode, ErrorPolicy};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Replay a raw HTTP request captured from an intercepting proxy, substituting wordlist payloads for a fuzz marker."
)]
pub struct SnipeArgs {
    /// Raw request template file (e.g. copied from Burp)
    #[arg(long = "request", short = 'r')]
    pub request: Option<String>,

    /// Timeout in seconds for each request (0 uses the 1s default)
    #[arg(long = "timeout", short = 't', default_value = "0")]
    pub timeout: u64,

    /// Proxy URL to route every request through
    #[arg(long = "proxy", short = 'P', alias = "proxy-url")]
    pub proxy: Option<String>,

    /// Use TLS (https://). Pass `-n false` to send plain http:// requests
    #[arg(long = "tls", short = 'n', default_value = "true", action = ArgAction::Set)]
    pub tls: bool,

    /// Marker string to replace in the raw request (e.g. FUZZ)
    #[arg(long = "fuzz", short = 'f')]
    pub fuzz: Option<String>,

    /// Payload wordlist, one payload per line
    #[arg(long = "wordlist", short = 'w')]
    pub wordlist: Option<String>,

    /// Insert each payload into every marker at once (default is one marker at a time)
    #[arg(long = "simultaneous", short = 'S')]
    pub simultaneous: bool,

    /// Body extraction: everything after the blank line, or only the last line
    #[arg(long = "body-mode", value_enum, default_value = "full")]
    pub body_mode: BodyMode,

    /// Keep going or stop when a single request fails
    #[arg(long = "on-error", value_enum, default_value = "continue")]
    pub on_error: ErrorPolicy,

    /// Enable verbose logging (sets log level to debug unless overridden by SNIPE_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable ANSI colors in log output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Path to config file (TOML/JSON). Defaults to ./snipe.toml or ./snipe.json if present.
    #[arg(long)]
    pub config: Option<String>,
}
