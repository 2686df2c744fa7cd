//! Command-line arguments for the currency CLI.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a JSON rates document (`dataAsOf` plus `conversions`).
    #[clap(long)]
    pub path: String,

    /// Source currency code, matched exactly.
    #[clap(long)]
    pub from: String,

    /// Target currency code, matched exactly.
    #[clap(long)]
    pub to: String,

    /// Amount in the source currency to convert.
    #[clap(long)]
    pub amount: Option<f64>,
}
