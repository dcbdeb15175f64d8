//! # The l2fwd SDK
//! The l2fwd SDK provides interface to the JSON-RPC API server embedded in the l2fwd PCIe endpoint application, for example,
//! enabling forwarding or reconfiguring a forwarding pair.
//!
//! ## The Conversation Model
//! The API server speaks JSON-RPC 2.0 directly on a TCP stream, with no length prefix or delimiter. A client writes one
//! request object and reads one response with a single read of at most [`rpc::MAX_RESPONSE_LEN`] bytes. The response is
//! displayed as-is; parsing it is optional and lenient, see [`rpc::Response::parse_lenient`].

pub mod endpoint;
pub mod error;
pub mod files;
pub mod l2fwd;
pub mod prelude;
pub mod rpc;

#[cfg(feature = "blocking")]
pub mod blocking;

#[cfg(feature = "blocking")]
pub mod driver;

#[cfg(feature = "nonblocking")]
pub mod nonblocking;

pub use endpoint::Endpoint;
pub use error::Error;

use rpc::Request;
use std::sync::OnceLock;

/// Returns default endpoint of the l2fwd API server.
///
/// If environment `L2FWD_API_ADDR` was present and valid, returns the value of `L2FWD_API_ADDR`. Otherwise it returns
/// `localhost:8888`. A malformed `L2FWD_API_ADDR` is reported with a warning.
pub fn default_endpoint() -> &'static Endpoint {
    static ENDPOINT: OnceLock<Endpoint> = OnceLock::new();

    ENDPOINT.get_or_init(|| {
        let value = std::env::var("L2FWD_API_ADDR").ok();
        endpoint_from_env(value.as_deref())
    })
}

fn endpoint_from_env(value: Option<&str>) -> Endpoint {
    match value.map(str::parse::<Endpoint>) {
        Some(Ok(endpoint)) => endpoint,
        Some(Err(err)) => {
            tracing::warn!("ignoring `L2FWD_API_ADDR`: {err}");
            Endpoint::default()
        }
        None => Endpoint::default(),
    }
}

/// A trait that unifies `async` and `non-async` connections.
pub trait Connection {
    /// Return type of the [`Connection::call`] method.
    type Call<'a>
    where
        Self: 'a;

    /// Writes the request on the connection, then waits for a response.
    fn call<'a>(&'a mut self, request: &'a Request) -> Self::Call<'a>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_override() {
        assert_eq!(endpoint_from_env(None), Endpoint::default());
        assert_eq!(
            endpoint_from_env(Some("10.0.0.2:9000")),
            Endpoint::new("10.0.0.2", 9000)
        );
        assert_eq!(endpoint_from_env(Some("10.0.0.2")), Endpoint::default());
        assert_eq!(
            endpoint_from_env(Some("localhost:http")),
            Endpoint::default()
        );
    }
}
