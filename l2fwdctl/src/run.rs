use crate::util::{self, GlobalArgs};
use clap::Parser;
use l2fwd_sdk::{blocking::files::PlanExt, driver, files::Plan};
use std::path::PathBuf;

/// Run the calls and sleeps of a plan file over one connection
#[derive(Debug, Clone, Parser)]
#[command(about)]
pub struct Cmdline {
    /// Path of the plan file
    path: PathBuf,
}

/// Entrypoint of the `l2fwdctl run` subprogram.
pub fn main(cmdline: Cmdline, global: &GlobalArgs) -> anyhow::Result<()> {
    let plan = Plan::read_from_blocking(&cmdline.path)
        .map_err(|err| anyhow::anyhow!("failed to read `{}`: {err}", cmdline.path.display()))?;
    driver::connect_and_run(&global.endpoint(), global.timeout, &plan, util::print_exchange)?;
    Ok(())
}
