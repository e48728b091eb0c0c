//! Container environment reporter
//!
//! Prints a greeting banner and a fixed-order block of host facts to stdout,
//! then exits. Takes no arguments.

use std::io;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use envreport::{info, report};

fn main() -> Result<()> {
    // Diagnostics go to stderr; the report owns stdout.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let host = info::collect()?;
    report::write_report(&mut io::stdout().lock(), &host)?;

    Ok(())
}
