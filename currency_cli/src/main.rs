//! Currency CLI — loads a rates document from a file and converts between two
//! currencies using the stored factor.
//!
//! Usage example (CLI):
//! ```bash
//! currency_cli --path ./rates.json --from USD --to GBP --amount 12.5
//! ```
//!
//! The rates file is a JSON object with a `dataAsOf` date (`YYYY-MM-DD`) and a
//! `conversions` map of source code to target code to rate. A blank or malformed
//! date is reported but tolerated. Only stored pairs resolve; inverse and
//! transitive rates are never synthesized.
#![warn(missing_docs)]
mod args;
mod loader;

use crate::args::Args;
use crate::loader::{load_rates, normalize_path};
use clap::Parser;
use currency_common::{RatesError, Result};
use log::error;

fn main() -> Result<(), RatesError> {
    init_logger();
    let args = Args::parse();

    let rates = load_rates(&normalize_path(&args.path))?;

    let rate = match rates.get_rate(&args.from, &args.to) {
        Ok(rate) => rate,
        Err(e) => {
            error!("Lookup failed: {}", e);
            return Err(e.into());
        }
    };

    match args.amount {
        Some(amount) => println!(
            "{} {} = {} {} (rate {})",
            amount,
            args.from,
            amount * rate,
            args.to,
            rate
        ),
        None => println!("{} -> {}: {}", args.from, args.to, rate),
    }
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
