use anyhow::Result;
use clap::Parser;

use allowance::cli::{run, Cli};

fn main() -> Result<()> {
    allowance::logging::init_tracing();

    let cli = Cli::parse();
    let output = run(cli)?;
    print!("{}", output);

    Ok(())
}
