use crate::util::{self, GlobalArgs};
use clap::Parser;
use l2fwd_sdk::{blocking::l2fwd::ConnectionExt, l2fwd::FwdState};

/// Enable or disable forwarding
#[derive(Debug, Clone, Parser)]
#[command(about)]
pub struct Cmdline {
    /// New forwarding state: 0/off or 1/on
    state: FwdState,

    /// Fail if the server answers with an error
    #[arg(long)]
    check: bool,
}

/// Entrypoint of the `l2fwdctl set-fwd-state` subprogram.
pub fn main(cmdline: Cmdline, global: &GlobalArgs) -> anyhow::Result<()> {
    util::call_once(global, cmdline.check, |conn| {
        conn.set_fwd_state(cmdline.state)
    })
}
