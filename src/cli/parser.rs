use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for spellpanel
/// CLI application to rebuild employment panels from fragmentary HR records
#[derive(Parser)]
#[command(
    name = "spellpanel",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reconstructs day-level employment panels and multi-spell survival datasets",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or multiple studies)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default study configuration file
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Validate the configuration file")]
        check: bool,
    },

    /// Reconstruct the daily panel and the survival dataset from input CSVs
    Build {
        /// Wide roster CSV with uid and join/leave date columns
        #[arg(long)]
        roster: String,

        /// Long attendance CSV with uid, date and status code columns
        #[arg(long)]
        attendance: String,

        /// Optional manual-correction table (uid, date, forced fields)
        #[arg(long)]
        overrides: Option<String>,

        /// Directory for the output tables
        #[arg(long = "out-dir", default_value = ".")]
        out_dir: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,
    },

    /// Per-worker tenure report at the configured reference date
    Tenure {
        #[arg(long)]
        roster: String,

        /// Write the report as JSON instead of printing it
        #[arg(long)]
        out: Option<String>,
    },
}
