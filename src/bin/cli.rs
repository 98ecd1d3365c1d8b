// src/bin/cli.rs
use clap::Parser;
use job_scrape::{cli, logging};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = cli::Cli::parse();
    logging::init(args.verbose);
    cli::run(args)?;
    Ok(())
}
