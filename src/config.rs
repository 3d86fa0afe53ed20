use std::env;

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Runtime configuration, loaded once at startup. The API key is optional
/// here: a missing key is reported when the API is invoked, not at load time.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_env_with(|key| env::var(key).ok())
    }

    fn from_env_with(mut get_var: impl FnMut(&str) -> Option<String>) -> Self {
        Self {
            api_key: get_var("GEMINI_API_KEY").filter(|key| !key.trim().is_empty()),
            base_url: get_var("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout_secs: parse_timeout_secs(get_var("GEMINI_TIMEOUT_SECS").as_deref()),
        }
    }
}

fn parse_timeout_secs(raw: Option<&str>) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{Config, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, parse_timeout_secs};

    fn config_from_pairs(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        Config::from_env_with(|key| vars.get(key).cloned())
    }

    #[test]
    fn from_env_uses_defaults_when_vars_are_missing() {
        let cfg = config_from_pairs(&[]);
        assert_eq!(cfg.api_key, None);
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn from_env_reads_configured_values() {
        let cfg = config_from_pairs(&[
            ("GEMINI_API_KEY", "test-key"),
            ("GEMINI_BASE_URL", "http://localhost:9999"),
            ("GEMINI_TIMEOUT_SECS", "15"),
        ]);

        assert_eq!(cfg.api_key.as_deref(), Some("test-key"));
        assert_eq!(cfg.base_url, "http://localhost:9999");
        assert_eq!(cfg.timeout_secs, 15);
    }

    #[test]
    fn from_env_treats_blank_api_key_as_absent() {
        let cfg = config_from_pairs(&[("GEMINI_API_KEY", "   ")]);
        assert_eq!(cfg.api_key, None);
    }

    #[test]
    fn parse_timeout_secs_uses_default_for_missing_or_invalid_values() {
        assert_eq!(parse_timeout_secs(None), DEFAULT_TIMEOUT_SECS);
        assert_eq!(parse_timeout_secs(Some("")), DEFAULT_TIMEOUT_SECS);
        assert_eq!(
            parse_timeout_secs(Some("not-a-number")),
            DEFAULT_TIMEOUT_SECS
        );
        assert_eq!(parse_timeout_secs(Some("0")), DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn parse_timeout_secs_accepts_positive_integer() {
        assert_eq!(parse_timeout_secs(Some("45")), 45);
        assert_eq!(parse_timeout_secs(Some("  90  ")), 90);
    }
}
