use crate::util::GlobalArgs;
use clap::Parser;

/// Write text to the API server verbatim, and print what it answers
#[derive(Debug, Clone, Parser)]
#[command(about)]
pub struct Cmdline {
    /// Text to send, usually a JSON-RPC request object
    text: String,
}

/// Entrypoint of the `l2fwdctl raw-io` subprogram.
pub fn main(cmdline: Cmdline, global: &GlobalArgs) -> anyhow::Result<()> {
    let mut conn = global.connect()?;
    let result = conn
        .send_raw(cmdline.text.as_bytes())
        .and_then(|()| conn.recv_raw());
    conn.close();
    println!("{}", String::from_utf8_lossy(&result?));
    Ok(())
}
