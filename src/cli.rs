use clap::{Parser, Subcommand};
use fenceplan::{LogFormat, PerimeterPreset};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fenceplan")]
#[command(
    author,
    version,
    about = "Plan panel fences: layout per side, totals, and bill of materials"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Show debug logs (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the layout of every side and the perimeter totals
    Compute {
        /// Plan file (.toml or .json); defaults to the user plan
        #[arg(env = "FENCEPLAN_PLAN")]
        plan: Option<PathBuf>,

        /// Enable only the sides of a preset (front-only, front-right, front-left, all)
        #[arg(long)]
        preset: Option<PerimeterPreset>,

        /// Print the totals as JSON
        #[arg(long)]
        json: bool,

        /// Refuse plans with invalid parameters or misplaced openings
        #[arg(long)]
        strict: bool,
    },

    /// Print or write the bill of materials
    Bom {
        /// Plan file (.toml or .json); defaults to the user plan
        #[arg(env = "FENCEPLAN_PLAN")]
        plan: Option<PathBuf>,

        /// Enable only the sides of a preset (front-only, front-right, front-left, all)
        #[arg(long)]
        preset: Option<PerimeterPreset>,

        /// Semicolon-delimited output for spreadsheets
        #[arg(long)]
        csv: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a plan file with the default property
    Init {
        /// Destination (.toml or .json); defaults to the user plan
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}
