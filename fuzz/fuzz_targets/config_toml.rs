#![no_main]

use libfuzzer_sys::fuzz_target;
use snipe::config::types::ConfigFile;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let parsed: Option<ConfigFile> = toml::from_str(input).ok();
        let applied = snipe::fuzzing::apply_config_from_toml(input);
        if let (Ok(config), Some(file)) = (applied, parsed) {
            if let Some(timeout) = file.timeout {
                debug_assert_eq!(config.timeout_secs, timeout);
            }
            if let Some(tls) = file.tls {
                debug_assert_eq!(config.use_tls, tls);
            }
            if file.proxy.as_deref() == Some("") {
                debug_assert!(config.proxy().is_none());
            }
        }
    }
});
