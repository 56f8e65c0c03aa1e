//! Access token configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Minimum HS256 key length accepted in production.
const MIN_PRODUCTION_KEY_BYTES: usize = 32;

/// Access token settings. Tokens are HS256-signed by whichever service
/// issues them; this backend only verifies them.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared HS256 signing key
    pub access_token_key: Secret<String>,

    /// Access token lifetime in seconds
    #[serde(default = "default_access_token_age")]
    pub access_token_age_secs: u64,
}

impl AuthConfig {
    pub fn access_token_age(&self) -> Duration {
        Duration::from_secs(self.access_token_age_secs)
    }

    /// Production requires a key of at least 32 bytes.
    pub fn validate(&self, environment: Environment) -> Result<(), ValidationError> {
        let key = self.access_token_key.expose_secret();
        if key.is_empty() {
            return Err(ValidationError::Missing("auth.access_token_key"));
        }
        if environment.is_production() && key.len() < MIN_PRODUCTION_KEY_BYTES {
            return Err(ValidationError::invalid(
                "auth.access_token_key",
                format!("must be at least {} bytes in production", MIN_PRODUCTION_KEY_BYTES),
            ));
        }
        if self.access_token_age_secs == 0 {
            return Err(ValidationError::invalid("auth.access_token_age_secs", "must be positive"));
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_token_key: Secret::new(String::new()),
            access_token_age_secs: default_access_token_age(),
        }
    }
}

fn default_access_token_age() -> u64 {
    3000
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_key(key: &str) -> AuthConfig {
        AuthConfig {
            access_token_key: Secret::new(key.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_auth_config_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.access_token_age(), Duration::from_secs(3000));
    }

    #[test]
    fn test_validation_missing_key() {
        let config = AuthConfig::default();
        assert_eq!(
            config.validate(Environment::Development),
            Err(ValidationError::Missing("auth.access_token_key"))
        );
    }

    #[test]
    fn test_validation_production_requires_long_key() {
        let config = with_key("short-dev-key");
        assert!(config.validate(Environment::Development).is_ok());
        assert_eq!(
            config.validate(Environment::Production).unwrap_err().field(),
            "auth.access_token_key"
        );
        assert!(with_key(&"k".repeat(32)).validate(Environment::Production).is_ok());
    }

    #[test]
    fn test_validation_zero_age() {
        let config = AuthConfig { access_token_age_secs: 0, ..with_key("secret") };
        assert_eq!(
            config.validate(Environment::Development).unwrap_err().field(),
            "auth.access_token_age_secs"
        );
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let config = with_key("super-secret-signing-key");
        assert!(!format!("{:?}", config).contains("super-secret-signing-key"));
    }
}
