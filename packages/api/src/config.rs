//! Backend location overrides from the environment.
//!
//! Natively, `PULSE_BACKEND_URL` and `PULSE_BACKEND_TIMEOUT_SECS` (read from the
//! process environment or a `.env` file) take precedence over `pulse.toml`.
//! In the browser there is no environment and the config is returned as is.

use store::BackendConfig;

pub const BACKEND_URL_VAR: &str = "PULSE_BACKEND_URL";
pub const BACKEND_TIMEOUT_VAR: &str = "PULSE_BACKEND_TIMEOUT_SECS";

#[cfg(not(target_arch = "wasm32"))]
pub fn with_env_overrides(config: BackendConfig) -> BackendConfig {
    dotenvy::dotenv().ok();
    apply_overrides(config, |name| std::env::var(name).ok())
}

#[cfg(target_arch = "wasm32")]
pub fn with_env_overrides(config: BackendConfig) -> BackendConfig {
    config
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn apply_overrides(
    mut config: BackendConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> BackendConfig {
    if let Some(url) = lookup(BACKEND_URL_VAR).filter(|url| !url.trim().is_empty()) {
        config.base_url = url.trim().to_string();
    }
    if let Some(raw) = lookup(BACKEND_TIMEOUT_VAR) {
        match raw.trim().parse() {
            Ok(secs) => config.timeout_secs = secs,
            Err(_) => tracing::warn!("ignoring invalid {BACKEND_TIMEOUT_VAR}={raw:?}"),
        }
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_no_overrides() {
        let config = apply_overrides(BackendConfig::default(), lookup(&[]));
        assert_eq!(config, BackendConfig::default());
    }

    #[test]
    fn test_url_and_timeout_override() {
        let config = apply_overrides(
            BackendConfig::default(),
            lookup(&[
                (BACKEND_URL_VAR, " https://crm.example.com "),
                (BACKEND_TIMEOUT_VAR, "5"),
            ]),
        );
        assert_eq!(config.base_url, "https://crm.example.com");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_invalid_values_are_ignored() {
        let config = apply_overrides(
            BackendConfig::default(),
            lookup(&[(BACKEND_URL_VAR, "  "), (BACKEND_TIMEOUT_VAR, "soon")]),
        );
        assert_eq!(config, BackendConfig::default());
    }
}
