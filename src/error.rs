use crate::dispatch::Method;
use crate::protocol::JsonRpcError;

/// Failure reported by a [`Server`](crate::server::Server) operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServerError {
    #[error("unimplemented")]
    Unimplemented,
    #[error("request cancelled")]
    Cancelled,
    #[error("deadline exceeded")]
    DeadlineExceeded,
    #[error("{0}")]
    Failed(String),
}

impl ServerError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// Failure while dispatching one request.
///
/// Everything except [`DispatchError::EncodeResult`] is answered on the wire
/// with the generic error code; `EncodeResult` stops the listen loop.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("invalid params for {method}: {source}")]
    InvalidParams {
        method: Method,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported method: {0}")]
    UnsupportedMethod(String),
    #[error(transparent)]
    Handler(#[from] ServerError),
    #[error("cannot encode result of {method}: {source}")]
    EncodeResult {
        method: Method,
        #[source]
        source: serde_json::Error,
    },
}

impl From<&DispatchError> for JsonRpcError {
    fn from(err: &DispatchError) -> Self {
        JsonRpcError::new(err.to_string())
    }
}

/// Fatal failure of the listen loop.
#[derive(Debug, thiserror::Error)]
pub enum ListenError {
    #[error("read failed: {0}")]
    Read(#[source] std::io::Error),
    #[error("write failed: {0}")]
    Write(#[source] std::io::Error),
    #[error("cannot encode response: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Invalid server configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    Invalid { var: &'static str, value: String },
}
