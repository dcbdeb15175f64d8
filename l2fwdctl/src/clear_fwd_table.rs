use crate::util::{self, GlobalArgs};
use clap::Parser;
use l2fwd_sdk::blocking::l2fwd::ConnectionExt;

/// Remove every forwarding pair
#[derive(Debug, Clone, Parser)]
#[command(about)]
pub struct Cmdline {
    /// Fail if the server answers with an error
    #[arg(long)]
    check: bool,
}

/// Entrypoint of the `l2fwdctl clear-fwd-table` subprogram.
pub fn main(cmdline: Cmdline, global: &GlobalArgs) -> anyhow::Result<()> {
    util::call_once(global, cmdline.check, |conn| conn.clear_fwd_table())
}
