use crate::util::{self, GlobalArgs};
use clap::Parser;
use l2fwd_sdk::{
    driver,
    files::Plan,
    l2fwd::{DEFAULT_PORT1, DEFAULT_PORT2, FwdPair, PciAddr},
};
use std::time::Duration;

/// Disable forwarding, re-create a forwarding pair, then enable forwarding again
#[derive(Debug, Clone, Parser)]
#[command(about)]
pub struct Cmdline {
    /// First port of the forwarding pair
    #[arg(long, default_value_t = DEFAULT_PORT1)]
    port1: PciAddr,

    /// Second port of the forwarding pair
    #[arg(long, default_value_t = DEFAULT_PORT2)]
    port2: PciAddr,

    /// Seconds to wait after adding the pair, before enabling forwarding
    #[arg(long, default_value = "5", value_parser = util::parse_duration)]
    delay: Duration,
}
impl Default for Cmdline {
    fn default() -> Self {
        Self {
            port1: DEFAULT_PORT1,
            port2: DEFAULT_PORT2,
            delay: Duration::from_secs(5),
        }
    }
}
impl Cmdline {
    fn plan(&self) -> Result<Plan, l2fwd_sdk::Error> {
        Plan::reconfigure(&FwdPair::from((self.port1, self.port2)), self.delay)
    }
}

/// Entrypoint of the `l2fwdctl reconfigure` subprogram.
pub fn main(cmdline: Cmdline, global: &GlobalArgs) -> anyhow::Result<()> {
    driver::connect_and_run(
        &global.endpoint(),
        global.timeout,
        &cmdline.plan()?,
        util::print_exchange,
    )?;
    Ok(())
}
