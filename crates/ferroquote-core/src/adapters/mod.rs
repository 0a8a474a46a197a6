//! Provider adapters.

pub mod yahoo;

pub use yahoo::YahooAdapter;
