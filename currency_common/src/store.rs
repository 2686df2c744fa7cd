//! Publication point for the current rate table.
//!
//! Tables are immutable; refreshing the feed means building a new `Rates` and
//! swapping the reference. `RateStore` does the swap through `ArcSwap`, so a
//! reader holding a snapshot keeps seeing that table in full while newer ones
//! are published.

use std::sync::Arc;

use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use crate::error::LookupError;
use crate::rates::Rates;
use crate::result::Result;

/// A table together with the time it was published.
#[derive(Debug, Default)]
struct Published {
    rates: Arc<Rates>,
    published_at: Option<DateTime<Utc>>,
}

/// Holds the most recently published rate table.
#[derive(Debug, Default)]
pub struct RateStore(ArcSwap<Published>);

impl RateStore {
    /// Create a store serving `rates` from the start.
    pub fn new(rates: Rates) -> Self {
        let store = RateStore::default();
        store.publish(rates);
        store
    }

    /// Snapshot of the current table. Never blocks writers.
    pub fn current(&self) -> Arc<Rates> {
        Arc::clone(&self.0.load().rates)
    }

    /// Wall-clock time of the last successful publish.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.0.load().published_at
    }

    /// Replace the current table.
    pub fn publish(&self, rates: Rates) -> Arc<Rates> {
        match rates.data_as_of() {
            Some(date) => info!("Publishing rates as of {}", date.format("%Y-%m-%d")),
            None => warn!("Publishing rates with an unknown as-of date"),
        }
        let rates = Arc::new(rates);
        self.0.store(Arc::new(Published {
            rates: Arc::clone(&rates),
            published_at: Some(Utc::now()),
        }));
        rates
    }

    /// Parse a rates document and publish it.
    ///
    /// On a parse failure the previous table stays in place and the error is
    /// returned to the caller.
    pub fn refresh_from_json(&self, json: &[u8]) -> Result<Arc<Rates>> {
        debug!("Refreshing rates from {} bytes", json.len());
        match Rates::parse(json) {
            Ok(rates) => Ok(self.publish(rates)),
            Err(e) => {
                warn!("Keeping previous rates, refresh failed: {}", e);
                Err(e)
            }
        }
    }

    /// Look up a rate in the current table.
    pub fn get_rate(&self, from: &str, to: &str) -> Result<f64, LookupError> {
        self.0.load().rates.get_rate(from, to)
    }
}
