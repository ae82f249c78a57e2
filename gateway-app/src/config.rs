//! Configuration loading from environment.

use std::env;

use anyhow::Context;
use gateway_stripe::DEFAULT_API_BASE;

const DEFAULT_PORT: u16 = 3000;

/// Application configuration, read once at startup.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    /// Missing keys do not stop startup; provider calls fail instead.
    pub stripe_secret_key: Option<String>,
    pub stripe_api_base: String,
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            stripe_secret_key: non_empty("STRIPE_SECRET_KEY"),
            stripe_api_base: non_empty("STRIPE_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            otlp_endpoint: non_empty("OTEL_EXPORTER_OTLP_ENDPOINT"),
        })
    }

    pub fn stripe_configured(&self) -> bool {
        self.stripe_secret_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.stripe_secret_key, None);
        assert_eq!(config.stripe_api_base, "https://api.stripe.com");
        assert!(!config.stripe_configured());
        assert!(config.otlp_endpoint.is_none());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = load(&[
            ("PORT", "8080"),
            ("STRIPE_SECRET_KEY", "sk_test_abc"),
            ("STRIPE_API_BASE", "http://localhost:12111"),
            ("OTEL_EXPORTER_OTLP_ENDPOINT", "http://localhost:4317"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.stripe_secret_key.as_deref(), Some("sk_test_abc"));
        assert_eq!(config.stripe_api_base, "http://localhost:12111");
        assert_eq!(config.otlp_endpoint.as_deref(), Some("http://localhost:4317"));
        assert!(config.stripe_configured());
    }

    #[test]
    fn test_empty_secret_key_is_missing() {
        let config = load(&[("STRIPE_SECRET_KEY", "")]).unwrap();
        assert!(!config.stripe_configured());
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        assert!(load(&[("PORT", "http")]).is_err());
        assert!(load(&[("PORT", "70000")]).is_err());
    }
}
