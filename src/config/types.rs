use serde::Deserialize;

use crate::args::{BodyMode, ErrorPolicy};

/// Optional settings read from `snipe.toml` / `snipe.json`.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub request: Option<String>,
    pub timeout: Option<u64>,
    #[serde(alias = "proxy_url")]
    pub proxy: Option<String>,
    pub tls: Option<bool>,
    pub fuzz: Option<String>,
    pub wordlist: Option<String>,
    pub simultaneous: Option<bool>,
    pub body_mode: Option<BodyMode>,
    pub on_error: Option<ErrorPolicy>,
    pub verbose: Option<bool>,
    pub no_color: Option<bool>,
}
