//! The l2fwd SDK prelude

pub use crate::Connection;
pub use crate::Endpoint;
pub use crate::l2fwd::{FwdPair, FwdState, PciAddr};
pub use crate::rpc::{Exchange, Request, Response};

#[cfg(feature = "blocking")]
pub use crate::blocking::{files::PlanExt, l2fwd::ConnectionExt};

#[cfg(feature = "nonblocking")]
pub use crate::nonblocking::{
    files::PlanExt as AsyncPlanExt, l2fwd::ConnectionExt as AsyncConnectionExt,
};
