//! Loading a rates document from disk.
use currency_common::{Rates, RatesError, Result};
use log::{debug, info, warn};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
pub fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

/// Read and decode the rates document at `path`.
///
/// An unknown `dataAsOf` is logged but does not fail the load.
pub fn load_rates(path: &Path) -> Result<Rates> {
    if !path.is_file() {
        return Err(RatesError::Format(format!(
            "rates file not found: {}",
            path.display()
        )));
    }

    debug!("Reading rates from {}", path.display());
    let file = File::open(path)?;
    let rates = Rates::from_reader(BufReader::new(file))?;

    match rates.data_as_of() {
        Some(date) => info!("Loaded rates as of {}", date.format("%Y-%m-%d")),
        None => warn!("Rates in {} carry no valid as-of date", path.display()),
    }
    Ok(rates)
}
