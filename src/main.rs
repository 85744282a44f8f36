// src/main.rs
use color_eyre::eyre::{Result, eyre};

use en_scrape::cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    // eyre! keeps the boxed error's source chain for the report.
    cli::run().map_err(|e| eyre!(e))
}
