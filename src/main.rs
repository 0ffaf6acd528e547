use anyhow::Result;
use clap::Parser;
use declgrep::cli::{Cli, run};

fn main() -> Result<()> {
    declgrep::tracing::init();

    let cli = Cli::parse();
    let output = run(&cli)?;
    print!("{}", output);

    Ok(())
}
