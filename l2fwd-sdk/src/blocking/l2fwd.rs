//! l2fwd API methods.

use crate::{
    error::Error,
    l2fwd::{self, FwdPair, FwdState, SetFwdState},
    rpc::Exchange,
};

pub trait ConnectionExt {
    /// Enables or disables forwarding.
    fn set_fwd_state(&mut self, state: FwdState) -> Result<Exchange, Error>;

    /// Adds a forwarding pair.
    fn add_fwd_pair(&mut self, pair: &FwdPair) -> Result<Exchange, Error>;

    /// Deletes a forwarding pair.
    fn del_fwd_pair(&mut self, pair: &FwdPair) -> Result<Exchange, Error>;

    /// Removes every forwarding pair.
    fn clear_fwd_table(&mut self) -> Result<Exchange, Error>;
}
impl ConnectionExt for super::Connection {
    fn set_fwd_state(&mut self, state: FwdState) -> Result<Exchange, Error> {
        let req = self
            .next_request(l2fwd::SET_FWD_STATE)
            .with_params(SetFwdState { state })?;
        self.call(&req)
    }

    fn add_fwd_pair(&mut self, pair: &FwdPair) -> Result<Exchange, Error> {
        let req = self.next_request(l2fwd::ADD_FWD_PAIR).with_params(pair)?;
        self.call(&req)
    }

    fn del_fwd_pair(&mut self, pair: &FwdPair) -> Result<Exchange, Error> {
        let req = self.next_request(l2fwd::DEL_FWD_PAIR).with_params(pair)?;
        self.call(&req)
    }

    fn clear_fwd_table(&mut self) -> Result<Exchange, Error> {
        let req = self.next_request(l2fwd::CLEAR_FWD_TABLE);
        self.call(&req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{blocking::Connection, blocking::tests::mock_server, rpc::Request};

    #[test]
    fn method_calls() {
        let (endpoint, server) =
            mock_server("{\"jsonrpc\": \"2.0\",\"result\": 0},\"id\": \"1\"}\n", 4);
        let mut conn = Connection::connect(&endpoint).unwrap();
        conn.set_fwd_state(FwdState::Disabled).unwrap();
        conn.del_fwd_pair(&FwdPair::default()).unwrap();
        conn.add_fwd_pair(&FwdPair::new("0000:01:00.0", "0000:02:00.0"))
            .unwrap();
        let last = conn.clear_fwd_table().unwrap();
        assert_eq!(last.received, "{\"jsonrpc\": \"2.0\",\"result\": 0},\"id\": \"1\"}\n");

        let (received, _) = server.join().unwrap();
        let received: Vec<Request> = received
            .iter()
            .map(|x| serde_json::from_str(x).unwrap())
            .collect();
        let methods: Vec<_> = received.iter().map(|x| (x.id, &x.method[..])).collect();
        assert_eq!(
            methods,
            vec![
                (1, l2fwd::SET_FWD_STATE),
                (2, l2fwd::DEL_FWD_PAIR),
                (3, l2fwd::ADD_FWD_PAIR),
                (4, l2fwd::CLEAR_FWD_TABLE),
            ]
        );
        assert_eq!(
            received[0].extract_params::<SetFwdState>().unwrap().state,
            FwdState::Disabled
        );
        assert_eq!(
            received[2].extract_params::<FwdPair>().unwrap(),
            FwdPair::new("0000:01:00.0", "0000:02:00.0")
        );
        assert_eq!(received[3].params, None);
    }
}
