use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Paginated company listing")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one page of a company data file as the listing endpoint would
    Page {
        /// JSON array of companies
        #[arg(long)]
        data: PathBuf,

        /// Page number (1-based, default: 1)
        #[arg(long)]
        page: Option<u32>,

        /// Page size (default: 10)
        #[arg(long)]
        size: Option<u32>,
    },

    /// Run a listing session and print the loaded companies
    #[command(visible_alias = "b")]
    Browse {
        /// Serve pages from a JSON array of companies
        #[arg(long, conflicts_with = "endpoint")]
        data: Option<PathBuf>,

        /// Company listing endpoint (overrides config)
        #[arg(long)]
        endpoint: Option<String>,

        /// Companies per page (overrides config)
        #[arg(long)]
        size: Option<u32>,

        /// Delay before the first page, in milliseconds (overrides config)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Number of scrolls to the bottom of the list
        #[arg(long, default_value = "0")]
        scrolls: usize,

        /// Company IDs to select (comma-separated)
        #[arg(long, value_delimiter = ',')]
        select: Vec<u64>,

        /// Remove the selected companies
        #[arg(long)]
        delete: bool,

        /// Directory to persist the loaded companies to
        #[arg(long)]
        store: Option<PathBuf>,

        /// Render as a table instead of cards
        #[arg(long, conflicts_with = "json")]
        table: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set a configuration value
    Set {
        /// Key: endpoint, page_size, initial_delay_ms, max_in_flight, request_timeout_secs, store_dir
        key: String,

        /// Value to store
        value: String,
    },
}
