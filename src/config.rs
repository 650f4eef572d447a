//! Runtime configuration loaded from environment variables.

use std::{env, str::FromStr, time::Duration};

/// Default catalog endpoint
pub const DEFAULT_CATALOG_BASE_URL: &str = "https://dummyjson.com";

/// Server configuration for the HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "0.0.0.0")
    /// - SERVICE_PORT: Port to bind (default: "8000")
    pub fn from_env() -> Self {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("SERVICE_PORT").unwrap_or_else(|_| "8000".to_string());

        Self { ip, port }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

/// Settings for the external product catalog
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    pub timeout: Duration,

    /// Number of products shown on the home page
    pub featured_limit: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            featured_limit: 8,
        }
    }
}

impl CatalogConfig {
    /// Load catalog configuration from environment variables
    ///
    /// Environment variables:
    /// - CATALOG_BASE_URL (default: "https://dummyjson.com")
    /// - CATALOG_TIMEOUT_SECS (default: 10)
    /// - FEATURED_LIMIT (default: 8)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let base_url = env::var("CATALOG_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);
        let timeout = parse_var::<u64>("CATALOG_TIMEOUT_SECS")
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);
        let featured_limit = parse_var("FEATURED_LIMIT").unwrap_or(defaults.featured_limit);

        Self {
            base_url,
            timeout,
            featured_limit,
        }
    }
}

/// Lifetime of in-memory session carts
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Carts untouched for this long are dropped
    pub idle_ttl: Duration,

    /// How often idle carts are looked for
    pub sweep_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_ttl: Duration::from_secs(2 * 60 * 60),
            sweep_interval: Duration::from_secs(60),
        }
    }
}

impl SessionConfig {
    /// Load session configuration from environment variables
    ///
    /// Environment variables:
    /// - CART_IDLE_TTL_SECS (default: 7200)
    /// - CART_SWEEP_INTERVAL_SECS (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            idle_ttl: parse_var::<u64>("CART_IDLE_TTL_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.idle_ttl),
            sweep_interval: parse_var::<u64>("CART_SWEEP_INTERVAL_SECS")
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.sweep_interval),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub sessions: SessionConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            catalog: CatalogConfig::from_env(),
            sessions: SessionConfig::from_env(),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("ignoring invalid value for {}: {:?}", name, raw);
            None
        }
    }
}
