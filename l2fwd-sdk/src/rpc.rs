//! # JSON-RPC 2.0 over a raw TCP stream
//! Requests are written as plain JSON text, with no framing. The response to a request is whatever a single read of at most
//! [`MAX_RESPONSE_LEN`] bytes returns.

use crate::error::{Error, RpcError};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::fmt::Display;

/// Value of the `jsonrpc` member of every request.
pub const JSONRPC_VERSION: &str = "2.0";

/// Maximum number of bytes read as a response.
pub const MAX_RESPONSE_LEN: usize = 1024;

/// Representation of a JSON-RPC 2.0 request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}
impl Request {
    /// Creates a new [`Request`] without parameters.
    pub fn new<M: Into<String>>(id: u64, method: M) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.into(),
            id,
            method: method.into(),
            params: None,
        }
    }

    /// Attaches the given parameters to the request.
    pub fn with_params<P: Serialize>(mut self, params: P) -> Result<Self, Error> {
        self.params = Some(serde_json::to_value(params)?);
        Ok(self)
    }

    /// Extracts parameters from the request.
    pub fn extract_params<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_value(self.params.clone().unwrap_or_default())
    }

    /// Serializes the request to the text that goes on the wire.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Represents to a lenient view of the API server's response.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Ok(serde_json::Value),
    Err(RpcError),
}
impl Response {
    /// Parses the leading JSON object of a response, ignoring anything after it.
    ///
    /// The l2fwd API server appends the `id` member after the closing brace of successful responses, so the text is
    /// usually not a valid JSON document. Returns `None` if no object with either `result` or `error` could be found.
    pub fn parse_lenient(text: &str) -> Option<Self> {
        let raw = serde_json::Deserializer::from_str(text)
            .into_iter::<RawResponse>()
            .next()?
            .ok()?;
        match (raw.result, raw.error) {
            (_, Some(err)) => Some(Self::Err(err)),
            (Some(val), None) => Some(Self::Ok(val)),
            (None, None) => None,
        }
    }

    /// Converts from `Response` to a `Result`.
    pub fn into_result(self) -> Result<serde_json::Value, RpcError> {
        match self {
            Self::Ok(val) => Ok(val),
            Self::Err(err) => Err(err),
        }
    }
}

#[derive(Deserialize)]
struct RawResponse {
    #[serde(default)]
    result: Option<serde_json::Value>,

    #[serde(default)]
    error: Option<RpcError>,
}

/// One request written and one response read, as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub sent: String,
    pub received: String,
}
impl Exchange {
    /// Parses the received text leniently. See [`Response::parse_lenient`].
    pub fn response(&self) -> Option<Response> {
        Response::parse_lenient(&self.received)
    }
}
impl Display for Exchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Sent:     {}", self.sent)?;
        write!(f, "Received: {}", self.received)
    }
}
