use std::path::PathBuf;

use balagh_core::Category;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "balagh")]
#[command(about = "Report public-space issues to City Hall from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// CLI profile name for backend configuration
    #[arg(long, global = true, value_name = "NAME")]
    pub profile: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a new report with a photo
    #[command(alias = "report")]
    Submit {
        /// Short title describing the issue
        #[arg(short, long)]
        title: String,
        /// Path to the JPEG photo of the issue
        #[arg(short, long, value_name = "PATH")]
        photo: PathBuf,
        /// Optional free-text details
        #[arg(short, long)]
        description: Option<String>,
        /// Category slug or Arabic label (defaults to roads)
        #[arg(short, long)]
        category: Option<Category>,
        /// Latitude of the issue
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,
        /// Longitude of the issue
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,
        /// Human-readable address for the coordinates
        #[arg(long, requires = "lat", conflicts_with = "geocode")]
        address: Option<String>,
        /// Resolve the address from the coordinates via OpenStreetMap
        #[arg(long, requires = "lat")]
        geocode: bool,
    },
    /// List all reports, newest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show map markers for reports with coordinates
    Map {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a single report
    Show {
        /// Report ID or unique ID prefix
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List report categories
    Categories,
    /// Configure CLI backend profiles
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Initialize or update profile config
    Init {
        /// Profile name to initialize
        #[arg(long, value_name = "NAME")]
        profile: Option<String>,
        /// Supabase project URL
        #[arg(long, value_name = "URL")]
        supabase_url: Option<String>,
        /// Supabase anon/public key
        #[arg(long, value_name = "KEY")]
        supabase_anon_key: Option<String>,
        /// Reports table name
        #[arg(long, value_name = "TABLE")]
        reports_table: Option<String>,
        /// Storage bucket for report photos
        #[arg(long, value_name = "BUCKET")]
        storage_bucket: Option<String>,
        /// Keep current active profile instead of activating this one
        #[arg(long)]
        no_activate: bool,
    },
    /// Print the resolved backend configuration
    Show {
        /// Profile name to show
        #[arg(long, value_name = "NAME")]
        profile: Option<String>,
    },
}
