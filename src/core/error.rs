//! Error types for the bridge and its sinks

pub type Result<T> = std::result::Result<T, BridgeError>;

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value's marshaling capability reported a failure.
    ///
    /// The dispatcher recovers from this locally by downgrading the field to
    /// an error-annotated string; it is never propagated out of a record.
    #[error("{0}")]
    Marshal(String),

    /// Sink error with the sink's name
    #[error("sink '{name}' failed: {message}")]
    Sink { name: String, message: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl BridgeError {
    /// Create a marshaling failure carrying the underlying message
    pub fn marshal(message: impl Into<String>) -> Self {
        BridgeError::Marshal(message.into())
    }

    /// Create a sink error
    pub fn sink(name: impl Into<String>, message: impl Into<String>) -> Self {
        BridgeError::Sink {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        BridgeError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = BridgeError::marshal("failure");
        assert!(matches!(err, BridgeError::Marshal(_)));

        let err = BridgeError::sink("file", "disk full");
        assert!(matches!(err, BridgeError::Sink { .. }));

        let err = BridgeError::config("FileSink", "empty path");
        assert!(matches!(err, BridgeError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_error_display() {
        // The marshal variant must display as the bare message so callers can
        // prefix it without double-wrapping.
        let err = BridgeError::marshal("failure");
        assert_eq!(err.to_string(), "failure");

        let err = BridgeError::sink("console", "stdout closed");
        assert_eq!(err.to_string(), "sink 'console' failed: stdout closed");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: BridgeError = io_err.into();
        assert!(matches!(err, BridgeError::Io(_)));
        assert!(err.to_string().contains("access denied"));
    }
}
