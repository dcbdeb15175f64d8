//! l2fwd API methods.

use crate::{
    error::Error,
    l2fwd::{self, FwdPair, FwdState, SetFwdState},
    rpc::Exchange,
};
use std::future::Future;

pub trait ConnectionExt {
    /// Enables or disables forwarding.
    fn set_fwd_state(
        &mut self,
        state: FwdState,
    ) -> impl Future<Output = Result<Exchange, Error>> + Send;

    /// Adds a forwarding pair.
    fn add_fwd_pair(
        &mut self,
        pair: &FwdPair,
    ) -> impl Future<Output = Result<Exchange, Error>> + Send;

    /// Deletes a forwarding pair.
    fn del_fwd_pair(
        &mut self,
        pair: &FwdPair,
    ) -> impl Future<Output = Result<Exchange, Error>> + Send;

    /// Removes every forwarding pair.
    fn clear_fwd_table(&mut self) -> impl Future<Output = Result<Exchange, Error>> + Send;
}
impl ConnectionExt for super::Connection {
    async fn set_fwd_state(&mut self, state: FwdState) -> Result<Exchange, Error> {
        let req = self
            .next_request(l2fwd::SET_FWD_STATE)
            .with_params(SetFwdState { state })?;
        self.call(&req).await
    }

    async fn add_fwd_pair(&mut self, pair: &FwdPair) -> Result<Exchange, Error> {
        let req = self.next_request(l2fwd::ADD_FWD_PAIR).with_params(pair)?;
        self.call(&req).await
    }

    async fn del_fwd_pair(&mut self, pair: &FwdPair) -> Result<Exchange, Error> {
        let req = self.next_request(l2fwd::DEL_FWD_PAIR).with_params(pair)?;
        self.call(&req).await
    }

    async fn clear_fwd_table(&mut self) -> Result<Exchange, Error> {
        let req = self.next_request(l2fwd::CLEAR_FWD_TABLE);
        self.call(&req).await
    }
}
