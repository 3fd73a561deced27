use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use printcal::{app, export, PageConfig};

/// Printable yearly calendar sheets with an interactive preview.
#[derive(Parser)]
#[command(name = "printcal", version, about)]
struct Cli {
    /// Where Ctrl+S writes the full-resolution page
    #[arg(short, long, default_value = export::DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    app::run(PageConfig::default(), cli.output)?;
    Ok(())
}
