//! # ferroquote Charts
//!
//! Candlestick and cumulative-return charts over a [`ferroquote_core::PriceTable`].
//!
//! Every chart can be drawn to a static SVG with `plotters` or exported as a
//! Plotly figure document; [`ChartSurface`] picks which.
//!
//! ```rust,no_run
//! use ferroquote_charts::{plot_candlestick, plot_cumulative_returns, ChartSurface};
//! use ferroquote_core::{DownloadRequest, FetchConfig, ReturnMode, StockFetcher};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let prices = StockFetcher::yahoo(&FetchConfig::from_env()?)?
//!         .download(&DownloadRequest::default())?;
//!
//!     plot_candlestick(&prices, "AAPL", "$", &ChartSurface::from_path("aapl.svg")?)?;
//!
//!     let surface = ChartSurface::from_path("aapl-cumulative.json")?;
//!     plot_cumulative_returns(&prices, "AAPL", ReturnMode::Simple, true, &surface)?;
//!     Ok(())
//! }
//! ```

mod axis;
pub mod candlestick;
pub mod cumulative;
pub mod error;
pub mod plotly;
pub mod surface;

pub use candlestick::{plot_candlestick, CandlestickChart, DEFAULT_CURRENCY};
pub use cumulative::{plot_cumulative_returns, CumulativeReturnsPlot};
pub use error::ChartError;
pub use plotly::PlotlyFigure;
pub use surface::ChartSurface;
