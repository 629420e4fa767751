use anyhow::Result;
use clap::Parser;
use fenceplan::init_logging;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    init_logging(cli.log_format, level)?;

    tracing::debug!("fenceplan {} (built {})", fenceplan::VERSION, fenceplan::BUILD_DATE);

    match cli.command {
        Commands::Compute {
            plan,
            preset,
            json,
            strict,
        } => commands::compute::run(plan, preset, json, strict),
        Commands::Bom {
            plan,
            preset,
            csv,
            output,
        } => commands::bom::run(plan, preset, csv, output),
        Commands::Init { path, force } => commands::init::run(path, force),
    }
}
