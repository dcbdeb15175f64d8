//! # Sequential Driver
//! Runs a [`Plan`] over a blocking connection: every call is one write followed by one read, in plan order. The first
//! transport error aborts the remaining steps. The connection is consumed, and closed exactly once, whatever the outcome.

use crate::{
    Endpoint,
    blocking::Connection,
    error::Error,
    files::{Plan, plan::Action},
    rpc::Exchange,
};
use std::time::Duration;

/// Connects to `endpoint`, then runs `plan` over the new connection. See [`run`].
pub fn connect_and_run<F>(
    endpoint: &Endpoint,
    timeout: Option<Duration>,
    plan: &Plan,
    report: F,
) -> Result<(), Error>
where
    F: FnMut(&Exchange),
{
    run(Connection::connect_timeout(endpoint, timeout)?, plan, report)
}

/// Runs every step of `plan` over `conn`, calling `report` after each exchange.
///
/// Exchanges reported before a failure stay reported; nothing is retried.
pub fn run<F>(mut conn: Connection, plan: &Plan, mut report: F) -> Result<(), Error>
where
    F: FnMut(&Exchange),
{
    let result = run_steps(&mut conn, plan, &mut report);
    if let Err(err) = &result {
        tracing::debug!("aborting plan on {}: {err}", conn.peer());
    }
    conn.close();
    result
}

fn run_steps<F>(conn: &mut Connection, plan: &Plan, report: &mut F) -> Result<(), Error>
where
    F: FnMut(&Exchange),
{
    for action in plan.actions() {
        match action {
            Action::Call(request) => {
                let exchange = conn.call(&request)?;
                report(&exchange);
            }
            Action::Sleep(duration) => {
                tracing::debug!("sleeping for {duration:?}");
                std::thread::sleep(duration);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        blocking::tests::mock_server,
        l2fwd::{self, FwdPair},
        rpc::Request,
    };
    use std::{net::TcpListener, time::Instant};

    #[test]
    fn reconfigure() {
        let delay = Duration::from_millis(300);
        let (endpoint, server) = mock_server("{\"result\":\"ok\"}", usize::MAX);
        let conn = Connection::connect(&endpoint).unwrap();

        let plan = Plan::reconfigure(&FwdPair::default(), delay).unwrap();

        let mut reported = Vec::new();
        run(conn, &plan, |x| reported.push((Instant::now(), x.clone()))).unwrap();

        let (received, client_closed) = server.join().unwrap();
        assert!(client_closed);
        assert_eq!(received.len(), 4);
        assert_eq!(reported.len(), 4);
        for ((_, exchange), received) in reported.iter().zip(&received) {
            assert_eq!(&exchange.sent, received);
            assert_eq!(exchange.received, "{\"result\":\"ok\"}");
        }

        let requests: Vec<Request> = received
            .iter()
            .map(|x| serde_json::from_str(x).unwrap())
            .collect();
        let order: Vec<_> = requests.iter().map(|x| (x.id, &x.method[..])).collect();
        assert_eq!(
            order,
            vec![
                (1, l2fwd::SET_FWD_STATE),
                (2, l2fwd::DEL_FWD_PAIR),
                (3, l2fwd::ADD_FWD_PAIR),
                (4, l2fwd::SET_FWD_STATE),
            ]
        );

        assert!(reported[3].0 - reported[2].0 >= delay);
        assert!(reported[2].0 - reported[1].0 < delay);
    }

    #[test]
    fn default_delay() {
        let (endpoint, server) = mock_server("{\"result\":\"ok\"}", usize::MAX);
        let conn = Connection::connect(&endpoint).unwrap();

        let plan = Plan::reconfigure(&FwdPair::default(), Duration::from_secs(5)).unwrap();

        let mut stamps = Vec::new();
        run(conn, &plan, |_| stamps.push(Instant::now())).unwrap();

        server.join().unwrap();
        assert_eq!(stamps.len(), 4);
        assert!(stamps[3] - stamps[2] >= Duration::from_secs(5));
    }

    #[test]
    fn server_closes_midway() {
        let (endpoint, server) = mock_server("{\"result\":\"ok\"}", 2);
        let conn = Connection::connect(&endpoint).unwrap();

        let plan = Plan::reconfigure(&FwdPair::default(), Duration::ZERO).unwrap();

        let mut reported = 0;
        let err = run(conn, &plan, |_| reported += 1).unwrap_err();
        assert!(
            matches!(err, Error::ConnectionClosed | Error::Read(_) | Error::Write(_)),
            "{err}"
        );
        assert_eq!(reported, 2);

        let (received, _) = server.join().unwrap();
        assert_eq!(received.len(), 2);
    }

    #[test]
    fn connection_refused() {
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let plan = Plan::reconfigure(&FwdPair::default(), Duration::ZERO).unwrap();

        let mut reported = 0;
        let err = connect_and_run(
            &Endpoint::new("127.0.0.1", port),
            Some(Duration::from_secs(5)),
            &plan,
            |_| reported += 1,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Connect { .. }), "{err}");
        assert_eq!(reported, 0);
    }
}
