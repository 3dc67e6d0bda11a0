//! Error types for the language server.

use thiserror::Error;

/// Errors from the message framing layer.
#[derive(Debug, Error)]
pub enum RpcError {
    /// No blank line between headers and body
    #[error("unable to find separator in message")]
    MissingSeparator,

    /// Headers without a `Content-Length`
    #[error("missing Content-Length header")]
    MissingContentLength,

    /// `Content-Length` that is not a byte count
    #[error("invalid Content-Length header: {0:?}")]
    InvalidContentLength(String),

    /// Fewer body bytes than announced
    #[error("message body truncated: expected {expected} bytes, got {actual}")]
    Truncated {
        /// Announced length
        expected: usize,
        /// Bytes actually available
        actual: usize,
    },

    /// Body is not valid JSON, or a value could not be encoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Transport failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from reading a project descriptor.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// No `[application]` section
    #[error("no application section in project file")]
    MissingApplication,

    /// `[application]` without `config/name`
    #[error("no config/name in application section")]
    MissingName,

    /// The file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A URI that is not `scheme://` followed by an absolute path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid URI: {0}")]
pub struct UriError(pub String);

/// Errors raised while handling a protocol message.
#[derive(Debug, Error)]
pub enum LspError {
    /// Framing failure
    #[error(transparent)]
    Rpc(#[from] RpcError),

    /// Parameters did not match the method's shape
    #[error("invalid params for {method}: {source}")]
    InvalidParams {
        /// Method being handled
        method: String,
        /// Underlying decode failure
        #[source]
        source: serde_json::Error,
    },

    /// A request that the method requires is missing its id
    #[error("request {0} has no id")]
    MissingId(String),

    /// Encoding failure outside of framing
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Transport failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for framing operations.
pub type RpcResult<T> = std::result::Result<T, RpcError>;

/// Result type alias for project descriptor operations.
pub type ProjectResult<T> = std::result::Result<T, ProjectError>;

/// Result type alias for server operations.
pub type LspResult<T> = std::result::Result<T, LspError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_error_display() {
        let err = RpcError::Truncated {
            expected: 16,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "message body truncated: expected 16 bytes, got 3"
        );
        assert_eq!(
            RpcError::InvalidContentLength("abc".to_string()).to_string(),
            "invalid Content-Length header: \"abc\""
        );
    }

    #[test]
    fn test_rpc_error_is_transparent() {
        let err: LspError = RpcError::MissingSeparator.into();
        assert_eq!(err.to_string(), "unable to find separator in message");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ProjectError = io_err.into();
        assert!(matches!(err, ProjectError::Io(_)));
    }
}
