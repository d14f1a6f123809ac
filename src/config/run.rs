use std::time::Duration;

use crate::args::{BodyMode, ErrorPolicy, FillMode, SnipeArgs};

/// Timeout used when the configured value is 0.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Dispatch-time settings for one run. Built once, then only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// 0 selects [`DEFAULT_TIMEOUT`].
    pub timeout_secs: u64,
    pub proxy_url: Option<String>,
    pub use_tls: bool,
    pub fuzz_marker: String,
    pub fill_mode: FillMode,
    pub body_mode: BodyMode,
    pub error_policy: ErrorPolicy,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 0,
            proxy_url: None,
            use_tls: true,
            fuzz_marker: String::new(),
            fill_mode: FillMode::default(),
            body_mode: BodyMode::default(),
            error_policy: ErrorPolicy::default(),
        }
    }
}

impl RunConfig {
    #[must_use]
    pub fn from_args(args: &SnipeArgs) -> Self {
        Self {
            timeout_secs: args.timeout,
            proxy_url: args.proxy.clone(),
            use_tls: args.tls,
            fuzz_marker: args.fuzz.clone().unwrap_or_default(),
            fill_mode: FillMode::from_simultaneous(args.simultaneous),
            body_mode: args.body_mode,
            error_policy: args.on_error,
        }
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        if self.timeout_secs == 0 {
            DEFAULT_TIMEOUT
        } else {
            Duration::from_secs(self.timeout_secs)
        }
    }

    /// Proxy to route through; an empty string means a direct connection.
    #[must_use]
    pub fn proxy(&self) -> Option<&str> {
        self.proxy_url.as_deref().filter(|url| !url.is_empty())
    }
}
