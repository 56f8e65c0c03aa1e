//! HTTP listener settings

use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use super::error::ValidationError;

const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Where the forum API listens and how requests are bounded.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// IP address, or `localhost`
    pub host: String,

    pub port: u16,

    /// `production` switches logs to JSON and requires a long token key.
    pub environment: Environment,

    /// Fallback filter when `RUST_LOG` is unset
    pub log_level: String,

    pub request_timeout_secs: u64,

    /// Comma-separated browser origins. Empty allows any origin.
    pub cors_origins: String,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

impl ServerConfig {
    /// Resolves `host` and `port` without touching DNS.
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let ip = match self.host.as_str() {
            "localhost" => IpAddr::V4(Ipv4Addr::LOCALHOST),
            host => host.parse().map_err(|_| {
                ValidationError::invalid("server.host", format!("'{}' is not an IP address", host))
            })?,
        };
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }

    pub fn cors_origins_list(&self) -> Vec<String> {
        self.cors_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::invalid("server.port", "must be non-zero"));
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::invalid(
                "server.request_timeout_secs",
                format!("must be between 1 and {}", MAX_REQUEST_TIMEOUT_SECS),
            ));
        }
        self.socket_addr()?;
        if let Some(origin) = self
            .cors_origins_list()
            .into_iter()
            .find(|o| !o.starts_with("http://") && !o.starts_with("https://"))
        {
            return Err(ValidationError::invalid(
                "server.cors_origins",
                format!("'{}' needs an http:// or https:// scheme", origin),
            ));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            environment: Environment::Development,
            log_level: "info,forum_api=debug,sqlx=warn".to_string(),
            request_timeout_secs: 30,
            cors_origins: String::new(),
        }
    }
}
