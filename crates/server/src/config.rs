// crates/server/src/config.rs
//! Server configuration from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use visigen_core::{AnalyzerConfig, ProviderKind};

/// Default port for the server.
pub const DEFAULT_PORT: u16 = 47900;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub analyzer: AnalyzerConfig,
    /// Keep finished analyses in memory, keyed by content hash.
    pub cache_enabled: bool,
    pub provider: ProviderKind,
    pub provider_endpoint: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            analyzer: AnalyzerConfig::default(),
            cache_enabled: true,
            provider: ProviderKind::RuleBased,
            provider_endpoint: None,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// - `VISIGEN_HOST` (default `127.0.0.1`)
    /// - `VISIGEN_PORT`, then `PORT` (default 47900)
    /// - `VISIGEN_MAX_CONTENT_CHARS`
    /// - `VISIGEN_CACHE` (`0` or `false` disables the analysis cache)
    /// - `VISIGEN_PROVIDER` (`rule-based` or `external`)
    /// - `VISIGEN_PROVIDER_ENDPOINT`
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = lookup("VISIGEN_HOST")
            .and_then(|h| h.parse().ok())
            .unwrap_or(defaults.host);
        let port = lookup("VISIGEN_PORT")
            .or_else(|| lookup("PORT"))
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let mut analyzer = defaults.analyzer;
        if let Some(max) = lookup("VISIGEN_MAX_CONTENT_CHARS").and_then(|v| v.parse().ok()) {
            analyzer = analyzer.with_max_content_chars(max);
        }

        let cache_enabled = lookup("VISIGEN_CACHE")
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false"))
            .unwrap_or(defaults.cache_enabled);

        let provider = match lookup("VISIGEN_PROVIDER").as_deref().map(str::trim) {
            Some("external") => ProviderKind::External,
            _ => ProviderKind::RuleBased,
        };

        Self {
            host,
            port,
            analyzer,
            cache_enabled,
            provider,
            provider_endpoint: lookup("VISIGEN_PROVIDER_ENDPOINT"),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.addr().to_string(), "127.0.0.1:47900");
        assert!(config.cache_enabled);
        assert_eq!(config.provider, ProviderKind::RuleBased);
        assert_eq!(config.analyzer, AnalyzerConfig::default());
    }

    #[test]
    fn test_port_precedence() {
        assert_eq!(config_from(&[("PORT", "8080")]).port, 8080);
        assert_eq!(
            config_from(&[("PORT", "8080"), ("VISIGEN_PORT", "9090")]).port,
            9090
        );
        assert_eq!(config_from(&[("VISIGEN_PORT", "not-a-port")]).port, DEFAULT_PORT);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("VISIGEN_HOST", "0.0.0.0"),
            ("VISIGEN_MAX_CONTENT_CHARS", "1000"),
            ("VISIGEN_CACHE", "false"),
            ("VISIGEN_PROVIDER", "external"),
            ("VISIGEN_PROVIDER_ENDPOINT", "http://llm.internal"),
        ]);
        assert_eq!(config.host.to_string(), "0.0.0.0");
        assert_eq!(config.analyzer.max_content_chars, 1000);
        assert!(!config.cache_enabled);
        assert_eq!(config.provider, ProviderKind::External);
        assert_eq!(config.provider_endpoint.as_deref(), Some("http://llm.internal"));
    }

    #[test]
    fn test_cache_flag_values() {
        assert!(!config_from(&[("VISIGEN_CACHE", "0")]).cache_enabled);
        assert!(config_from(&[("VISIGEN_CACHE", "1")]).cache_enabled);
        assert!(config_from(&[("VISIGEN_CACHE", "yes")]).cache_enabled);
    }
}
