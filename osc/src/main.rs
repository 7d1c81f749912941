mod commands;
mod logging;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use crate::logging::init_logging;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Debug, Parser)]
#[command(version, about)]
/// osc, inspect table columns, unique keys and scanned rows.
///
/// Parses column lists the same way schema inspection and row copying do,
/// which makes it handy for checking what a given column string resolves to.
pub struct Args {
    #[arg(long, env = "OSC_LOG_LEVEL", default_value = "info")]
    /// Set the log level.
    ///
    /// This can filter on various levels, for example `info,osc_sql=trace`
    /// will display all logs at `info` level severity and above, except for
    /// events emitted by the `osc_sql` crate which are shown down to `trace`.
    log_level: String,
    #[arg(long, env = "OSC_LOG_JSON")]
    /// Emit logs in JSON format rather than as plain text.
    log_json: bool,
    #[arg(long, env = "OSC_LOG_NO_ANSI")]
    /// Disable ANSI colour codes being present in the logs.
    log_no_ansi: bool,
    #[arg(long, global = true, env = "OSC_OUTPUT_JSON")]
    /// Print command output as JSON.
    json: bool,
    #[command(subcommand)]
    command: commands::Commands,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(&args).context("Init logging")?;

    debug!("osc v{}", env!("CARGO_PKG_VERSION"));

    let output = args.command.execute(args.json)?;
    println!("{output}");

    Ok(())
}
