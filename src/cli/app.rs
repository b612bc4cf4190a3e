//! Binary argument surface and entry point

use anyhow::Result;
use clap::Parser;

use super::output::{Output, OutputFormat};
use super::session::Session;

#[derive(Parser)]
#[command(name = "todo")]
#[command(author, version, about = "Interactive console todo manager")]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("Todo CLI starting");

    let mut session = Session::new(output);
    session.run(std::io::stdin().lock())?;

    Ok(())
}
