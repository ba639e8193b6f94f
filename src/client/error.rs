//! Error types for Record Service operations

/// Result type for Record Service operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while talking to the Record Service
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Connection, DNS or timeout failure.
    #[error("transport error during {operation}: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Malformed JSON in either direction.
    #[error("serialization error during {operation}: {source}")]
    Serialization {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Attempted rename to the user's current name. Fatal for a pipeline run.
    #[error("old and new names are the same: {name:?}")]
    Precondition { name: String },

    /// The service answered with something inconsistent with the request.
    #[error("protocol error during {operation}: {message}")]
    Protocol {
        operation: &'static str,
        message: String,
    },

    /// The run was cancelled before a step started.
    #[error("cancelled after {completed} completed step(s)")]
    Cancelled { completed: usize },
}

impl ClientError {
    pub(crate) fn transport(operation: &'static str, source: reqwest::Error) -> Self {
        ClientError::Transport { operation, source }
    }

    pub(crate) fn serialization(operation: &'static str, source: serde_json::Error) -> Self {
        ClientError::Serialization { operation, source }
    }

    pub(crate) fn protocol(operation: &'static str, message: impl Into<String>) -> Self {
        ClientError::Protocol {
            operation,
            message: message.into(),
        }
    }

    /// Precondition violations abort the whole run rather than a single step
    pub fn is_fatal(&self) -> bool {
        matches!(self, ClientError::Precondition { .. })
    }

    /// True when the request exceeded the configured timeout
    pub fn is_timeout(&self) -> bool {
        match self {
            ClientError::Transport { source, .. } => source.is_timeout(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_is_fatal() {
        let err = ClientError::Precondition {
            name: "Sam".to_string(),
        };
        assert!(err.is_fatal());
        assert!(!err.is_timeout());
        assert_eq!(err.to_string(), "old and new names are the same: \"Sam\"");
    }

    #[test]
    fn test_protocol_error_is_recoverable() {
        let err = ClientError::protocol("fetch user", "unexpected status 500");
        assert!(!err.is_fatal());
        assert_eq!(
            err.to_string(),
            "protocol error during fetch user: unexpected status 500"
        );
    }

    #[test]
    fn test_serialization_error_display() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ClientError::serialization("decode user", source);
        assert!(err.to_string().starts_with("serialization error during decode user"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
