//! Asynchronous connection to the l2fwd API server, on top of `tokio`.

pub mod files;
pub mod l2fwd;

use crate::{
    Endpoint,
    error::Error,
    rpc::{Exchange, MAX_RESPONSE_LEN, Request},
};
use std::{future::Future, pin::Pin};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpStream,
};

/// A connection to the l2fwd API server.
#[derive(Debug)]
pub struct Connection {
    stream: TcpStream,
    peer: String,
    next_id: u64,
}
impl Connection {
    /// Connects to the specified endpoint.
    pub async fn connect(endpoint: &Endpoint) -> Result<Self, Error> {
        let stream = TcpStream::connect((endpoint.host.as_str(), endpoint.port))
            .await
            .map_err(|source| Error::Connect {
                endpoint: endpoint.to_string(),
                source,
            })?;
        tracing::debug!("connected to {endpoint}");

        Ok(Self {
            stream,
            peer: endpoint.to_string(),
            next_id: 1,
        })
    }

    /// Returns the endpoint this connection was opened to.
    pub fn peer(&self) -> &str {
        &self.peer
    }

    /// Writes the whole message to the connection.
    pub async fn send_raw(&mut self, msg: &[u8]) -> Result<(), Error> {
        self.stream.write_all(msg).await.map_err(Error::Write)?;
        self.stream.flush().await.map_err(Error::Write)
    }

    /// Performs a single read of at most [`MAX_RESPONSE_LEN`] bytes.
    pub async fn recv_raw(&mut self) -> Result<Vec<u8>, Error> {
        let mut buf = vec![0u8; MAX_RESPONSE_LEN];
        let n = self.stream.read(&mut buf).await.map_err(Error::Read)?;
        if n == 0 {
            return Err(Error::ConnectionClosed);
        }
        buf.truncate(n);
        Ok(buf)
    }

    /// Writes the request, then reads and decodes its response.
    pub async fn call(&mut self, request: &Request) -> Result<Exchange, Error> {
        let sent = request.to_json()?;
        self.send_raw(sent.as_bytes()).await?;
        let received = String::from_utf8(self.recv_raw().await?)?;
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
    pub async fn close(mut self) {
        if let Err(err) = self.stream.shutdown().await {
            tracing::debug!("failed to shut down connection to {}: {err}", self.peer);
        }
    }
}

impl crate::Connection for Connection {
    type Call<'a> = Pin<Box<dyn Future<Output = Result<Exchange, Error>> + Send + 'a>>;

    fn call<'a>(&'a mut self, request: &'a Request) -> Self::Call<'a> {
        Box::pin(self.call(request))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tokio::{net::TcpListener, task::JoinHandle};

    /// Spawns a mock server accepting one connection, answering each request with `reply` until the client closes.
    pub(crate) async fn mock_server(reply: &'static str) -> (Endpoint, JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = Endpoint::new("127.0.0.1", listener.local_addr().unwrap().port());
        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = stream.read(&mut buf).await.unwrap_or(0);
                if n == 0 {
                    return received;
                }
                received.push(String::from_utf8_lossy(&buf[..n]).into_owned());
                stream.write_all(reply.as_bytes()).await.unwrap();
            }
        });
        (endpoint, handle)
    }

    #[tokio::test]
    async fn call() {
        let (endpoint, server) = mock_server("{\"result\":\"ok\"}").await;
        let mut conn = Connection::connect(&endpoint).await.unwrap();
        let req = conn.next_request("mrvl_l2fwd_clear_fwd_table");
        let exchange = crate::Connection::call(&mut conn, &req).await.unwrap();
        assert_eq!(exchange.received, "{\"result\":\"ok\"}");
        conn.close().await;

        assert_eq!(server.await.unwrap(), vec![req.to_json().unwrap()]);
    }

    #[tokio::test]
    async fn connection_refused() {
        let port = TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let err = Connection::connect(&Endpoint::new("127.0.0.1", port))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Connect { .. }), "{err}");
    }
}
