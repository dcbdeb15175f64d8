use anyhow::anyhow;
use clap::Args;
use console::style;
use l2fwd_sdk::{
    Endpoint,
    blocking::Connection,
    rpc::{Exchange, Response},
};
use std::time::Duration;

/// Options shared by every subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Host of the l2fwd API server [default: localhost, or from `L2FWD_API_ADDR`]
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// TCP port of the l2fwd API server [default: 8888, or from `L2FWD_API_ADDR`]
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// Timeout of connecting, and of each read and write, in seconds
    #[arg(long, global = true, value_parser = parse_duration)]
    pub timeout: Option<Duration>,

    /// Log every exchange and connection event to standard error
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}
impl GlobalArgs {
    /// Returns the endpoint selected by the command line and the environment.
    pub fn endpoint(&self) -> Endpoint {
        l2fwd_sdk::default_endpoint().with_overrides(self.host.as_deref(), self.port)
    }

    /// Connects to the selected endpoint.
    pub fn connect(&self) -> anyhow::Result<Connection> {
        Ok(Connection::connect_timeout(&self.endpoint(), self.timeout)?)
    }
}

/// Parses a non-negative number of seconds, fractions allowed.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let secs: f64 = s.parse().map_err(|_| format!("invalid number of seconds `{s}`"))?;
    Duration::try_from_secs_f64(secs)
        .map_err(|err| format!("invalid number of seconds `{s}`: {err}"))
}

/// Prints an [`Exchange`] to standard output.
pub fn print_exchange(exchange: &Exchange) {
    println!("{}{}", style("Sent:     ").bold(), exchange.sent);
    println!("{}{}", style("Received: ").bold(), exchange.received);
}

/// Fails if the server answered the exchange with an error object.
///
/// A response that cannot be understood is only warned about, since the server's output is not guaranteed to be valid
/// JSON.
pub fn check_exchange(exchange: &Exchange) -> anyhow::Result<()> {
    match exchange.response() {
        Some(Response::Ok(val)) => {
            tracing::info!("server returned {val}");
            Ok(())
        }
        Some(Response::Err(err)) => match err.kind() {
            Some(kind) => Err(anyhow!("server returned error {kind}: {err}")),
            None => Err(anyhow!("server returned error: {err}")),
        },
        None => {
            tracing::warn!("unrecognized response from server");
            Ok(())
        }
    }
}

/// Sends a single request, prints the exchange, and checks it if requested.
pub fn call_once<F>(global: &GlobalArgs, check: bool, f: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut Connection) -> Result<Exchange, l2fwd_sdk::Error>,
{
    let mut conn = global.connect()?;
    let exchange = f(&mut conn);
    conn.close();
    let exchange = exchange?;
    print_exchange(&exchange);
    if check {
        check_exchange(&exchange)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations() {
        assert_eq!(parse_duration("5").unwrap(), Duration::from_secs(5));
        assert_eq!(parse_duration("0.5").unwrap(), Duration::from_millis(500));
        parse_duration("-1").unwrap_err();
        parse_duration("soon").unwrap_err();
    }

    #[test]
    fn check() {
        let exchange = |received: &str| Exchange {
            sent: String::new(),
            received: received.into(),
        };
        check_exchange(&exchange("{\"jsonrpc\": \"2.0\",\"result\": 0},\"id\": \"1\"}\n")).unwrap();
        check_exchange(&exchange("garbage")).unwrap();
        let err = check_exchange(&exchange(
            "{\"jsonrpc\": \"2.0\",\"error\": {\"code\": -32603, \"message\": \"Invalid param\"},\"id\": \"1\"}\n",
        ))
        .unwrap_err();
        assert!(err.to_string().contains("InvalidParams"), "{err}");
    }

    #[test]
    fn call_once_checked() {
        use l2fwd_sdk::blocking::l2fwd::ConnectionExt;
        use std::{
            io::{Read, Write},
            net::TcpListener,
        };

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let global = GlobalArgs {
            host: Some("127.0.0.1".into()),
            port: Some(listener.local_addr().unwrap().port()),
            timeout: Some(Duration::from_secs(5)),
            ..Default::default()
        };
        let server = std::thread::spawn(move || {
            for reply in [
                "{\"jsonrpc\": \"2.0\",\"result\": 0},\"id\": \"1\"}\n",
                "{\"jsonrpc\": \"2.0\",\"error\": {\"code\": -32693, \"message\": \"Internal error\"},\"id\": \"1\"}\n",
            ] {
                let (mut stream, _) = listener.accept().unwrap();
                let mut buf = [0u8; 1024];
                _ = stream.read(&mut buf).unwrap();
                stream.write_all(reply.as_bytes()).unwrap();
            }
        });

        call_once(&global, true, |conn| conn.clear_fwd_table()).unwrap();
        let err = call_once(&global, true, |conn| conn.clear_fwd_table()).unwrap_err();
        assert!(err.to_string().contains("InternalError"), "{err}");
        server.join().unwrap();
    }

    #[test]
    fn endpoint_overrides() {
        let global = GlobalArgs {
            host: Some("127.0.0.1".into()),
            port: Some(9000),
            ..Default::default()
        };
        assert_eq!(global.endpoint(), Endpoint::new("127.0.0.1", 9000));
    }
}
