use std::io::Write;

use anyhow::Context;
use arith_demos::{ARRAY_VALUES, report::write_array_summary};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version)]
/// Prints the integers 1 through 10 and their sum.
struct Opts {}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let _opts = Opts::parse();
    info!("array demo starting with {} values", ARRAY_VALUES.len());

    let mut stdout = std::io::stdout().lock();
    write_array_summary(&mut stdout, &ARRAY_VALUES).context("array demo failed")?;
    stdout.flush()?;

    Ok(())
}
