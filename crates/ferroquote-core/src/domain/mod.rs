//! # Domain Models
//!
//! Canonical domain types for ferroquote price data.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Validated ticker |
//! | [`RawDailyBar`] | Provider-native daily row, adjusted close included |
//! | [`PriceRecord`] | One row of a [`PriceTable`] (Open, Low, Close, High, Volume) |
//! | [`PriceTable`] | Date-indexed daily series for one symbol |
//!
//! Dates are plain [`time::Date`] values in the exchange's local calendar;
//! the [`date`] module holds the `YYYY-MM-DD` helpers.

pub mod date;
mod price;
mod symbol;

pub use price::{PriceRecord, PriceTable, RawDailyBar};
pub use symbol::Symbol;
