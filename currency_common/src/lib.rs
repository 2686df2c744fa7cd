//!
//! Currency conversion rate table shared by hosts that normalize monetary amounts.
//!
//! This crate aggregates:
//! - `error` — `RatesError` and the narrower `LookupError`.
//! - `result` — handy `Result<T, RatesError>` alias.
//! - `rates` — the immutable `Rates` table and its JSON decoding.
//! - `conversions` — the `Conversions` lookup trait and `ConstantRates`.
//! - `store` — `RateStore`, an atomically swapped holder for the current table.
#![warn(missing_docs)]
pub mod conversions;
pub mod error;
pub mod rates;
pub mod result;
pub mod store;

pub use conversions::{ConstantRates, Conversions};
pub use error::{LookupError, RatesError};
pub use rates::{ConversionTable, Rates};
pub use result::Result;
pub use store::RateStore;
