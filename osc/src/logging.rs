use std::str::FromStr;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::Args;

/// Installs the global tracing subscriber.
pub fn init_logging(args: &Args) -> Result<()> {
    let filter = EnvFilter::from_str(&args.log_level).context("Parse log level")?;

    // stdout is reserved for command output so it can be piped.
    let builder = tracing_subscriber::fmt::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!args.log_no_ansi);

    if args.log_json {
        builder.json().init();
    } else {
        builder.compact().init();
    }

    Ok(())
}
