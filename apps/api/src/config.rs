use anyhow::{anyhow, Context, Result};

use crate::feedback::disclosure::DisclosurePolicy;
use crate::feedback::models::CategoryKind;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Section expanded when a compose request does not name one.
    pub default_open_section: CategoryKind,
    pub disclosure_policy: DisclosurePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            default_open_section: CategoryKind::ToneStyle,
            disclosure_policy: DisclosurePolicy::Single,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source. Unset keys take defaults.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let port = match var("PORT") {
            Some(p) => p
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => defaults.port,
        };

        let default_open_section = match var("DEFAULT_OPEN_SECTION") {
            Some(id) => CategoryKind::from_id(id.trim()).ok_or_else(|| {
                anyhow!("DEFAULT_OPEN_SECTION '{id}' is not a report section id")
            })?,
            None => defaults.default_open_section,
        };

        let disclosure_policy = match var("DISCLOSURE_POLICY") {
            Some(p) => p
                .parse::<DisclosurePolicy>()
                .map_err(|e| anyhow!(e))
                .context("DISCLOSURE_POLICY must be 'single' or 'multi'")?,
            None => defaults.disclosure_policy,
        };

        Ok(Config {
            port,
            rust_log: var("RUST_LOG").unwrap_or(defaults.rust_log),
            default_open_section,
            disclosure_policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.default_open_section, CategoryKind::ToneStyle);
        assert_eq!(config.disclosure_policy, DisclosurePolicy::Single);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "3000"),
            ("RUST_LOG", "debug"),
            ("DEFAULT_OPEN_SECTION", "skills"),
            ("DISCLOSURE_POLICY", "multi"),
        ])
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.rust_log, "debug");
        assert_eq!(config.default_open_section, CategoryKind::Skills);
        assert_eq!(config.disclosure_policy, DisclosurePolicy::Multi);
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(config_from(&[("PORT", "not-a-port")]).is_err());
    }

    #[test]
    fn test_unknown_open_section_rejected() {
        let err = config_from(&[("DEFAULT_OPEN_SECTION", "ats")]).unwrap_err();
        assert!(err.to_string().contains("ats"));
    }

    #[test]
    fn test_unknown_policy_rejected() {
        assert!(config_from(&[("DISCLOSURE_POLICY", "all")]).is_err());
    }
}
