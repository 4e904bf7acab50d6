use std::io::Write;

use anyhow::Context;
use arith_demos::{FIB_BOUND, report::write_fibonacci_sequence};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version)]
/// Prints the Fibonacci sequence up to 10, computed by naive recursion.
struct Opts {}

fn main() -> anyhow::Result<()> {
    // logs go to stderr so stdout carries only the sequence
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let _opts = Opts::parse();
    info!("fibonacci demo starting with bound {}", FIB_BOUND);

    let mut stdout = std::io::stdout().lock();
    write_fibonacci_sequence(&mut stdout, FIB_BOUND).context("fibonacci demo failed")?;
    stdout.flush()?;

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_without_arguments() {
        assert!(Opts::try_parse_from(["fibonacci"]).is_ok());
    }

    #[test]
    fn does_not_take_a_bound() {
        assert!(Opts::try_parse_from(["fibonacci", "--bound", "20"]).is_err());
    }
}
