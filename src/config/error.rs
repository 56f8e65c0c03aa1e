//! Configuration errors

use thiserror::Error;

/// Startup failure while reading or checking settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

/// A setting that was read but cannot be used. `field` is the dotted
/// config path, e.g. `server.port` for `FORUM_API__SERVER__PORT`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{field} is invalid: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ValidationError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ValidationError::Invalid { field, reason: reason.into() }
    }

    /// The dotted path of the offending setting.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Missing(field) | ValidationError::Invalid { field, .. } => *field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_message_names_field_and_reason() {
        let err = ValidationError::invalid("server.port", "must be non-zero");
        assert_eq!(err.to_string(), "server.port is invalid: must be non-zero");
        assert_eq!(err.field(), "server.port");
    }

    #[test]
    fn config_error_wraps_validation_error() {
        let err: ConfigError = ValidationError::Missing("database.url").into();
        assert_eq!(err.to_string(), "invalid configuration: database.url must be set");
    }
}
