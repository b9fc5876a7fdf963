use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "pagetoc")]
#[command(about = "Injects page table-of-contents lists into rendered HTML", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Source directory (defaults to ./)
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Destination directory (defaults to ./_site)
    #[arg(short, long, value_name = "DIR")]
    pub destination: Option<PathBuf>,

    /// Custom configuration file
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Process the site and write the result to the destination
    #[command(alias = "b")]
    Build {
        /// Custom configuration file
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Option<PathBuf>,

        /// Source directory (defaults to ./)
        #[arg(short, long, value_name = "DIR")]
        source: Option<PathBuf>,

        /// Destination directory (defaults to ./_site)
        #[arg(short, long, value_name = "DIR")]
        destination: Option<PathBuf>,
    },

    /// Report what a build would do without writing anything
    #[command(alias = "c")]
    Check {
        /// Custom configuration file
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Option<PathBuf>,

        /// Source directory (defaults to ./)
        #[arg(short, long, value_name = "DIR")]
        source: Option<PathBuf>,
    },

    /// Remove the destination directory without building
    Clean {},
}
