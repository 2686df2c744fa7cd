//! Common lookup interface for rate sources.
//!
//! Hosts hold a `dyn Conversions` so that a feed-backed [`Rates`] table and the
//! feed-less [`ConstantRates`] can be swapped without touching call sites.

use crate::error::LookupError;
use crate::rates::{ConversionTable, Rates};

/// A source of currency conversion factors.
pub trait Conversions: Send + Sync {
    /// Factor converting an amount in `from` into `to`.
    fn get_rate(&self, from: &str, to: &str) -> Result<f64, LookupError>;

    /// Full conversion table, if the source has one.
    fn get_rates(&self) -> Option<&ConversionTable>;
}

impl Conversions for Rates {
    fn get_rate(&self, from: &str, to: &str) -> Result<f64, LookupError> {
        Rates::get_rate(self, from, to)
    }

    fn get_rates(&self) -> Option<&ConversionTable> {
        self.conversions()
    }
}

/// Rate source used when no feed is configured.
///
/// Only identity conversions succeed; every other pair is unknown.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantRates;

impl ConstantRates {
    /// Create a new constant rate source.
    pub fn new() -> Self {
        ConstantRates
    }
}

impl Conversions for ConstantRates {
    fn get_rate(&self, from: &str, to: &str) -> Result<f64, LookupError> {
        if from == to {
            return Ok(1.0);
        }
        Err(LookupError::UnknownTarget {
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    fn get_rates(&self) -> Option<&ConversionTable> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn constant_rates_identity_only() {
        let rates = ConstantRates::new();

        assert_eq!(rates.get_rate("USD", "USD"), Ok(1.0));
        assert_eq!(rates.get_rate("", ""), Ok(1.0));
        assert_eq!(
            rates.get_rate("USD", "EUR"),
            Err(LookupError::UnknownTarget {
                from: "USD".to_string(),
                to: "EUR".to_string()
            })
        );
        assert!(rates.get_rate("USD", "usd").is_err());
        assert!(rates.get_rates().is_none());
    }

    #[test]
    fn rates_behind_trait_object() {
        let table: ConversionTable =
            HashMap::from([("USD".to_string(), HashMap::from([("EUR".to_string(), 0.86)]))]);
        let sources: Vec<Box<dyn Conversions>> = vec![
            Box::new(Rates::new(None, Some(table.clone()))),
            Box::new(ConstantRates),
        ];

        assert_eq!(sources[0].get_rate("USD", "EUR"), Ok(0.86));
        assert_eq!(sources[0].get_rates(), Some(&table));
        assert!(sources[0].get_rate("EUR", "EUR").is_err());
        assert!(sources[1].get_rate("USD", "EUR").is_err());
        assert_eq!(sources[1].get_rate("EUR", "EUR"), Ok(1.0));
    }
}
