use crate::util::{self, GlobalArgs};
use clap::Parser;
use l2fwd_sdk::{
    blocking::l2fwd::ConnectionExt,
    l2fwd::{FwdPair, PciAddr},
};

/// Add or delete a forwarding pair
#[derive(Debug, Clone, Parser)]
#[command(about)]
pub struct Cmdline {
    /// First port, as a PCI address like `0002:12:00.1`
    port1: PciAddr,

    /// Second port, as a PCI address like `0002:02:00.0`
    port2: PciAddr,

    /// Fail if the server answers with an error
    #[arg(long)]
    check: bool,
}
impl Cmdline {
    fn pair(&self) -> FwdPair {
        (self.port1, self.port2).into()
    }
}

/// Entrypoint of the `l2fwdctl add-fwd-pair` subprogram.
pub fn add(cmdline: Cmdline, global: &GlobalArgs) -> anyhow::Result<()> {
    util::call_once(global, cmdline.check, |conn| {
        conn.add_fwd_pair(&cmdline.pair())
    })
}

/// Entrypoint of the `l2fwdctl del-fwd-pair` subprogram.
pub fn del(cmdline: Cmdline, global: &GlobalArgs) -> anyhow::Result<()> {
    util::call_once(global, cmdline.check, |conn| {
        conn.del_fwd_pair(&cmdline.pair())
    })
}
