//! Blocking connection to the l2fwd API server.

pub mod files;
pub mod l2fwd;

use crate::{
    Endpoint,
    error::Error,
    rpc::{Exchange, MAX_RESPONSE_LEN, Request},
};
use std::{
    io::{ErrorKind, Read, Write},
    net::{Shutdown, TcpStream},
    time::Duration,
};

/// A connection to the l2fwd API server.
///
/// The socket is closed when the connection is dropped, or explicitly by [`Connection::close`].
#[derive(Debug)]
pub struct Connection {
    stream: TcpStream,
    peer: String,
    next_id: u64,
}
impl Connection {
    /// Connects to the specified endpoint.
    pub fn connect(endpoint: &Endpoint) -> Result<Self, Error> {
        Self::connect_timeout(endpoint, None)
    }

    /// Connects to the specified endpoint. If `timeout` was present, it bounds connecting, and every following read and
    /// write. A zero timeout means no timeout.
    pub fn connect_timeout(endpoint: &Endpoint, timeout: Option<Duration>) -> Result<Self, Error> {
        let timeout = timeout.filter(|x| !x.is_zero());
        let addrs = endpoint.resolve().map_err(|source| Error::Resolve {
            endpoint: endpoint.to_string(),
            source,
        })?;

        let mut last_err = std::io::Error::from(ErrorKind::AddrNotAvailable);
        for addr in addrs {
            let result = match timeout {
                Some(x) => TcpStream::connect_timeout(&addr, x),
                None => TcpStream::connect(addr),
            };
            match result {
                Ok(stream) => {
                    stream.set_read_timeout(timeout).map_err(Error::Read)?;
                    stream.set_write_timeout(timeout).map_err(Error::Write)?;
                    tracing::debug!("connected to {endpoint} ({addr})");
                    return Ok(Self::new(stream, endpoint.to_string()));
                }
                Err(err) => {
                    tracing::debug!("cannot connect to {addr}: {err}");
                    last_err = err;
                }
            }
        }

        Err(Error::Connect {
            endpoint: endpoint.to_string(),
            source: last_err,
        })
    }

    /// Wraps an established stream.
    pub fn new(stream: TcpStream, peer: String) -> Self {
        Self {
            stream,
            peer,
            next_id: 1,
        }
    }

    /// Returns the endpoint this connection was opened to.
    pub fn peer(&self) -> &str {
        &self.peer
    }

    /// Writes the whole message to the connection.
    pub fn send_raw(&mut self, msg: &[u8]) -> Result<(), Error> {
        self.stream.write_all(msg).map_err(Error::Write)?;
        self.stream.flush().map_err(Error::Write)
    }

    /// Performs a single read of at most [`MAX_RESPONSE_LEN`] bytes.
    ///
    /// Returns [`Error::ConnectionClosed`] if the peer has closed the connection.
    pub fn recv_raw(&mut self) -> Result<Vec<u8>, Error> {
        let mut buf = vec![0u8; MAX_RESPONSE_LEN];
        let n = loop {
            match self.stream.read(&mut buf) {
                Ok(n) => break n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(Error::Read(err)),
            }
        };
        if n == 0 {
            return Err(Error::ConnectionClosed);
        }
        buf.truncate(n);
        Ok(buf)
    }

    /// Writes the request, then reads and decodes its response.
    pub fn call(&mut self, request: &Request) -> Result<Exchange, Error> {
        let sent = request.to_json()?;
        self.send_raw(sent.as_bytes())?;
        let received = String::from_utf8(self.recv_raw()?)?;
        tracing::debug!(id = request.id, method = %request.method, "{}", received.trim_end());

        Ok(Exchange { sent, received })
    }

    /// Builds a request to `method` with the next unused id of this connection.
    pub fn next_request(&mut self, method: &str) -> Request {
        let id = self.next_id;
        self.next_id += 1;
        Request::new(id, method)
    }

    /// Shuts the connection down and closes it.
    pub fn close(self) {
        match self.stream.shutdown(Shutdown::Both) {
            Ok(()) => tracing::debug!("closed connection to {}", self.peer),
            Err(err) if err.kind() == ErrorKind::NotConnected => (),
            Err(err) => tracing::warn!("failed to shut down connection to {}: {err}", self.peer),
        }
    }
}

impl crate::Connection for Connection {
    type Call<'a> = Result<Exchange, Error>;

    fn call<'a>(&'a mut self, request: &'a Request) -> Self::Call<'a> {
        self.call(request)
    }
}
