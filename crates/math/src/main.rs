use std::io::Write;

use anyhow::Context;
use arith_demos::{MATH_X, MATH_Y, report::write_math_summary};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version)]
/// Prints the sum, product and factorial of 5 and 3.
struct Opts {}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let _opts = Opts::parse();
    info!("math demo starting with x = {}, y = {}", MATH_X, MATH_Y);

    let mut stdout = std::io::stdout().lock();
    write_math_summary(&mut stdout, MATH_X, MATH_Y).context("math demo failed")?;
    stdout.flush()?;

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_without_arguments() {
        assert!(Opts::try_parse_from(["math"]).is_ok());
    }

    #[test]
    fn operands_are_not_configurable() {
        assert!(Opts::try_parse_from(["math", "--x", "-4"]).is_err());
    }
}
