//! Core error types for Content Delivery RS
//!
//! Invalid builder input is never an error (mutators silently ignore it); these
//! variants cover programming errors and failures of the transport collaborator.

use thiserror::Error;

use crate::config::ConfigError;

/// Core error type for all content delivery operations
#[derive(Error, Debug)]
pub enum CdError {
    #[error("Empty filter group: a combined filter needs at least one item")]
    EmptyFilterGroup,

    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Standard Result type for content delivery operations
pub type CdResult<T> = Result<T, CdError>;

impl CdError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        CdError::Unauthorized {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        CdError::Transport(message.into())
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            CdError::EmptyFilterGroup => "empty_filter_group",
            CdError::Unauthorized { .. } => "unauthorized",
            CdError::Transport(_) => "transport_error",
            CdError::Decode(_) => "invalid_response",
            CdError::Config(_) => "configuration_error",
        }
    }

    /// Whether the error comes from the remote side rather than from the caller
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            CdError::Unauthorized { .. } | CdError::Transport(_) | CdError::Decode(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CdError::EmptyFilterGroup.error_code(), "empty_filter_group");
        assert_eq!(CdError::unauthorized("bad credentials").error_code(), "unauthorized");
        assert_eq!(CdError::transport("timeout").error_code(), "transport_error");
        assert_eq!(
            CdError::Config(ConfigError::MissingEnvVar("CD_API_URL".into())).error_code(),
            "configuration_error"
        );
    }

    #[test]
    fn test_error_display() {
        let err = CdError::unauthorized("bad credentials");
        assert_eq!(err.to_string(), "Unauthorized: bad credentials");

        let err = CdError::transport("connection reset");
        assert_eq!(err.to_string(), "Transport error: connection reset");
    }

    #[test]
    fn test_decode_error_from_serde() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: CdError = parse.unwrap_err().into();
        assert_eq!(err.error_code(), "invalid_response");
        assert!(err.is_remote());
        assert!(!CdError::EmptyFilterGroup.is_remote());
    }
}
