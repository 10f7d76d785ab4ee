//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

/// Pokedex catalog CLI
#[derive(Parser, Debug)]
#[command(name = "pokedex-catalog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the listing API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Override the page size
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output: debug logging including response bodies
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default log level for the subscriber
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a single listing page
    Page {
        /// Items to skip
        #[arg(long, default_value = "0")]
        offset: u32,
    },

    /// Load the catalog page by page
    Load {
        /// Stop after this many pages (default: until exhausted)
        #[arg(long)]
        pages: Option<u32>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}
