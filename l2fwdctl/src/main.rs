//! # l2fwdctl
//! Command-line client of the l2fwd JSON-RPC API. Without a subcommand, it runs `reconfigure` with default settings.

mod clear_fwd_table;
mod fwd_pair;
mod logging;
mod raw_io;
mod reconfigure;
mod run;
mod set_fwd_state;
mod util;

use clap::{Parser, Subcommand};
use console::style;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cmdline {
    #[command(flatten)]
    global: util::GlobalArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Reconfigure(reconfigure::Cmdline),
    SetFwdState(set_fwd_state::Cmdline),
    AddFwdPair(fwd_pair::Cmdline),
    DelFwdPair(fwd_pair::Cmdline),
    ClearFwdTable(clear_fwd_table::Cmdline),
    RawIo(raw_io::Cmdline),
    Run(run::Cmdline),
}

fn main() {
    let cmdline = Cmdline::parse();
    logging::Builder::new()
        .quiet(cmdline.global.quiet)
        .verbose(cmdline.global.verbose)
        .color(console::colors_enabled_stderr())
        .init();

    let global = &cmdline.global;
    let command = cmdline
        .command
        .unwrap_or_else(|| Command::Reconfigure(Default::default()));
    let result = match command {
        Command::Reconfigure(cmdline) => reconfigure::main(cmdline, global),
        Command::SetFwdState(cmdline) => set_fwd_state::main(cmdline, global),
        Command::AddFwdPair(cmdline) => fwd_pair::add(cmdline, global),
        Command::DelFwdPair(cmdline) => fwd_pair::del(cmdline, global),
        Command::ClearFwdTable(cmdline) => clear_fwd_table::main(cmdline, global),
        Command::RawIo(cmdline) => raw_io::main(cmdline, global),
        Command::Run(cmdline) => run::main(cmdline, global),
    };
    if let Err(e) = result {
        eprintln!("{} {}", style("error:").red().bold(), e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cmdline() {
        Cmdline::command().debug_assert();
    }

    #[test]
    fn parse() {
        let cmdline = Cmdline::try_parse_from(["l2fwdctl"]).unwrap();
        assert!(cmdline.command.is_none());

        let cmdline =
            Cmdline::try_parse_from(["l2fwdctl", "set-fwd-state", "on", "--port", "9000", "-v"])
                .unwrap();
        assert_eq!(cmdline.global.port, Some(9000));
        assert!(cmdline.global.verbose);
        assert!(matches!(cmdline.command, Some(Command::SetFwdState(_))));

        assert!(matches!(
            Cmdline::try_parse_from(["l2fwdctl", "add-fwd-pair", "0002:12:00.1", "0002:02:00.0"])
                .unwrap()
                .command,
            Some(Command::AddFwdPair(_))
        ));

        Cmdline::try_parse_from(["l2fwdctl", "set-fwd-state", "2"]).unwrap_err();
        Cmdline::try_parse_from(["l2fwdctl", "del-fwd-pair", "0002:12:00.1"]).unwrap_err();
        Cmdline::try_parse_from(["l2fwdctl", "-v", "-q"]).unwrap_err();
    }
}
