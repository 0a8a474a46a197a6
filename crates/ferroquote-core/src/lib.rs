//! # ferroquote Core
//!
//! Daily price retrieval and return calculations for ferroquote.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Provider adapters (Yahoo Finance) |
//! | [`config`] | Transport configuration with environment overrides |
//! | [`data_source`] | Price source trait, requests, and errors |
//! | [`domain`] | Symbol, price record, and price table types |
//! | [`error`] | Validation errors |
//! | [`fetch`] | Download and normalize a price table |
//! | [`http_client`] | Blocking HTTP transport abstraction |
//! | [`returns`] | Simple/log returns and cumulative compounding |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ferroquote_core::{
//!     compute_returns, DownloadRequest, FetchConfig, ReturnMode, StockFetcher,
//! };
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = StockFetcher::yahoo(&FetchConfig::from_env()?)?;
//!     let prices = fetcher.download(&DownloadRequest::default())?;
//!
//!     let returns = compute_returns(&prices, ReturnMode::Simple);
//!     println!("{} returns for {}", returns.len(), prices.symbol);
//!     Ok(())
//! }
//! ```
//!
//! ## Flow
//!
//! ```text
//! DownloadRequest ──▶ StockFetcher ──▶ PriceSource (YahooAdapter)
//!                                          │
//!                                          ▼
//!                                   Vec<RawDailyBar>
//!                                          │  drop Adj Close, reorder
//!                                          ▼
//!                                      PriceTable ──▶ compute_returns ──▶ cumulative
//! ```

pub mod adapters;
pub mod config;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod http_client;
pub mod returns;

pub use adapters::YahooAdapter;

pub use config::FetchConfig;

pub use data_source::{
    DownloadRequest, HistoryRequest, PriceSource, SourceError, SourceErrorKind,
};

pub use domain::{PriceRecord, PriceTable, RawDailyBar, Symbol};

pub use error::ValidationError;

pub use fetch::{download_stock, StockFetcher};

pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient,
};

pub use returns::{
    compute_returns, cumulative_returns, CumulativeReturnSeries, ReturnMode, ReturnSeries,
};
