use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Represents to a transport error, which aborts the conversation.
///
/// Anything the server writes back is a success at this layer. Errors reported by the server itself are [`RpcError`]s.
#[derive(Debug, Error)]
pub enum Error {
    /// The endpoint could not be resolved to a socket address.
    #[error("cannot resolve `{endpoint}`: {source}")]
    Resolve {
        endpoint: String,
        source: std::io::Error,
    },

    /// The connection could not be established.
    #[error("cannot connect to `{endpoint}`: {source}")]
    Connect {
        endpoint: String,
        source: std::io::Error,
    },

    /// Writing the request failed, e.g. the peer reset the connection.
    #[error("failed to write request: {0}")]
    Write(#[source] std::io::Error),

    /// Reading the response failed.
    #[error("failed to read response: {0}")]
    Read(#[source] std::io::Error),

    /// The peer closed the connection before responding.
    #[error("connection closed by peer")]
    ConnectionClosed,

    /// The response was not valid UTF-8 text.
    #[error("response is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// The request could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Represents to an error object returned by the API server.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message} (code {code})")]
pub struct RpcError {
    pub code: i64,

    #[serde(default)]
    pub message: String,
}
impl RpcError {
    /// The server failed to parse the request as JSON.
    pub const PARSE_ERROR: i64 = -32700;

    /// The request lacks `id`, `jsonrpc` or `method`.
    pub const INVALID_REQUEST: i64 = -32600;

    /// The requested method was not found.
    pub const METHOD_NOT_FOUND: i64 = -32601;

    /// The requested method's parameter requirements wasn't satisfied.
    pub const INVALID_PARAMS: i64 = -32603;

    /// The forwarding engine rejected the operation.
    pub const INTERNAL_ERROR: i64 = -32693;

    pub fn new<M: Into<String>>(code: i64, message: M) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Returns a short name of the error code, if it is one the l2fwd API server is known to send.
    pub fn kind(&self) -> Option<&'static str> {
        match self.code {
            Self::PARSE_ERROR => Some("ParseError"),
            Self::INVALID_REQUEST => Some("InvalidRequest"),
            Self::METHOD_NOT_FOUND => Some("MethodNotFound"),
            Self::INVALID_PARAMS => Some("InvalidParams"),
            Self::INTERNAL_ERROR => Some("InternalError"),
            _ => None,
        }
    }
}
