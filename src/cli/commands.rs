//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Collect the complete Steam store app list into a JSON file
///
/// The API key is read from the STEAM_API_KEY environment variable.
#[derive(Parser, Debug, Default)]
#[command(name = "steam-applist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output file (default: data/apps.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Settings file (YAML)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Pretty-print the output JSON
    #[arg(long)]
    pub pretty: bool,

    /// Apps requested per page (max_results)
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Steam Web API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
