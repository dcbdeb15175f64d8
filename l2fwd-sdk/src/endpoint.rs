//! Address of the l2fwd API server.

use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// Default host of the l2fwd API server.
pub const DEFAULT_HOST: &str = "localhost";

/// Default TCP port of the l2fwd API server.
pub const DEFAULT_PORT: u16 = 8888;

/// A TCP endpoint, as a host name (or address literal) and a port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}
impl Endpoint {
    /// Creates a new [`Endpoint`] instance.
    pub fn new<H: Into<String>>(host: H, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Returns a copy of the endpoint with each given part replaced.
    pub fn with_overrides(&self, host: Option<&str>, port: Option<u16>) -> Self {
        Self {
            host: host.map(String::from).unwrap_or_else(|| self.host.clone()),
            port: port.unwrap_or(self.port),
        }
    }

    /// Resolves the endpoint to a list of socket addresses.
    pub fn resolve(&self) -> std::io::Result<Vec<std::net::SocketAddr>> {
        std::net::ToSocketAddrs::to_socket_addrs(&(self.host.as_str(), self.port))
            .map(|addrs| addrs.collect())
    }
}
impl Default for Endpoint {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}
impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.host.contains(':') {
            true => write!(f, "[{}]:{}", self.host, self.port),
            false => write!(f, "{}:{}", self.host, self.port),
        }
    }
}
impl FromStr for Endpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (host, port) = s
            .rsplit_once(':')
            .ok_or_else(|| format!("missing port in `{s}`"))?;
        let host = host
            .strip_prefix('[')
            .and_then(|x| x.strip_suffix(']'))
            .unwrap_or(host);
        if host.is_empty() {
            return Err(format!("missing host in `{s}`"));
        }
        let port = port
            .parse()
            .map_err(|err| format!("invalid port in `{s}`: {err}"))?;

        Ok(Self::new(host, port))
    }
}
