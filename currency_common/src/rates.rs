//! Currency rate table and its JSON encoding.
//!
//! A `Rates` value is an immutable snapshot of pairwise conversion factors tagged
//! with the calendar date the snapshot was produced. It is decoded from documents
//! shaped like:
//!
//! ```json
//! {"dataAsOf":"2018-09-12","conversions":{"USD":{"GBP":0.7662523901}}}
//! ```
//!
//! Decoding is split in two phases: the document is first read into its raw wire
//! shape, then the date is converted. Structural JSON errors fail the decode, but
//! a blank or malformed `dataAsOf` only downgrades the date to "unknown".

use std::collections::HashMap;
use std::fmt;
use std::io::Read;

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::LookupError;
use crate::result::Result;

/// Wire format of `dataAsOf`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Source currency code -> (target currency code -> rate).
pub type ConversionTable = HashMap<String, HashMap<String, f64>>;

/// Immutable snapshot of conversion rates.
///
/// The zero value (`Rates::default()`) has an unknown date and no conversions;
/// every lookup against it fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRates", into = "RawRates")]
pub struct Rates {
    data_as_of: Option<DateTime<Utc>>,
    conversions: Option<ConversionTable>,
}

/// Rates document exactly as it appears on the wire.
#[derive(Debug, Default, Serialize)]
struct RawRates {
    #[serde(rename = "dataAsOf")]
    data_as_of: Option<String>,
    conversions: Option<ConversionTable>,
}

// Hand-written so that a repeated key overwrites the earlier value instead of
// failing the document, and a `null` target map reads as an empty one.
impl<'de> Deserialize<'de> for RawRates {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct RawRatesVisitor;

        impl<'de> Visitor<'de> for RawRatesVisitor {
            type Value = RawRates;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a rates document")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<RawRates, A::Error> {
                let mut raw = RawRates::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "dataAsOf" => raw.data_as_of = map.next_value()?,
                        "conversions" => {
                            let table: Option<HashMap<String, Option<HashMap<String, f64>>>> =
                                map.next_value()?;
                            raw.conversions = table.map(|table| {
                                table
                                    .into_iter()
                                    .map(|(from, targets)| (from, targets.unwrap_or_default()))
                                    .collect()
                            });
                        }
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                Ok(raw)
            }
        }

        deserializer.deserialize_map(RawRatesVisitor)
    }
}

impl From<RawRates> for Rates {
    fn from(raw: RawRates) -> Self {
        Rates {
            data_as_of: raw.data_as_of.as_deref().and_then(parse_date),
            conversions: raw.conversions,
        }
    }
}

impl From<Rates> for RawRates {
    fn from(rates: Rates) -> Self {
        RawRates {
            data_as_of: Some(
                rates
                    .data_as_of
                    .map(|date| date.format(DATE_FORMAT).to_string())
                    .unwrap_or_default(),
            ),
            conversions: rates.conversions,
        }
    }
}

/// Parse a `YYYY-MM-DD` date at midnight UTC. Anything else is an unknown date.
fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let bytes = raw.as_bytes();
    if bytes.len() != 10 {
        return None;
    }
    let shaped = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()?
        .and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc())
}

impl Rates {
    /// Build a table from an as-of date and a conversion map.
    ///
    /// The map is adopted as is. `None` conversions are legal and make every
    /// lookup fail with [`LookupError::RatesNil`].
    pub fn new(data_as_of: Option<DateTime<Utc>>, conversions: Option<ConversionTable>) -> Self {
        Rates {
            data_as_of,
            conversions,
        }
    }

    /// Decode a table from a JSON document.
    pub fn parse(json: &[u8]) -> Result<Self> {
        let rates = serde_json::from_slice(json)?;
        Ok(rates)
    }

    /// Decode a table from a reader yielding a JSON document.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let rates = serde_json::from_reader(reader)?;
        Ok(rates)
    }

    /// Date the snapshot was produced, `None` when unknown.
    pub fn data_as_of(&self) -> Option<DateTime<Utc>> {
        self.data_as_of
    }

    /// Stored conversions, `None` when the table is nil.
    pub fn conversions(&self) -> Option<&ConversionTable> {
        self.conversions.as_ref()
    }

    /// Look up the stored factor converting `from` into `to`.
    ///
    /// Codes are matched exactly; nothing is inferred from the inverse pair or
    /// from intermediate currencies, and `A -> A` is only found if stored.
    pub fn get_rate(&self, from: &str, to: &str) -> Result<f64, LookupError> {
        let conversions = self.conversions.as_ref().ok_or(LookupError::RatesNil)?;
        let targets = conversions
            .get(from)
            .ok_or_else(|| LookupError::UnknownSource {
                from: from.to_string(),
            })?;
        targets
            .get(to)
            .copied()
            .ok_or_else(|| LookupError::UnknownTarget {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    /// Same as [`Rates::get_rate`] but yields `0.0` on any miss.
    ///
    /// A zero here never means a real conversion; callers that need to tell a
    /// miss apart must use `get_rate`.
    pub fn rate_or_zero(&self, from: &str, to: &str) -> f64 {
        self.get_rate(from, to).unwrap_or(0.0)
    }
}
