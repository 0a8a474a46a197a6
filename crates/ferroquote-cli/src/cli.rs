//! CLI argument definitions for ferroquote.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `download` | Fetch daily OHLCV rows |
//! | `returns` | Simple or log returns, optionally compounded |
//! | `candlestick` | Draw a daily candlestick chart |
//! | `cumulative` | Draw cumulative returns as a line plot |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table, csv) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--timeout-ms` | env or `10000` | Request timeout in ms |
//! | `--base-url` | env or Yahoo | Provider base URL |
//!
//! # Examples
//!
//! ```bash
//! ferroquote download AAPL --start 2024-01-01 --end 2024-03-31 --format table
//! ferroquote returns MSFT --log --cumulative --format csv
//! ferroquote candlestick AAPL --out aapl.svg
//! ferroquote cumulative AAPL --out aapl-cumulative.json
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Daily stock prices, returns, and charts from Yahoo Finance.
#[derive(Debug, Parser)]
#[command(name = "ferroquote", author, version, about)]
pub struct Cli {
    /// Output format for tabular results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Request timeout in milliseconds (overrides FERROQUOTE_TIMEOUT_MS).
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Provider base URL (overrides FERROQUOTE_BASE_URL).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single JSON document.
    Json,
    /// Aligned columns for terminal display.
    Table,
    /// Comma-separated values with a header row.
    Csv,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch daily Open, Low, Close, High, Volume rows.
    ///
    ///   ferroquote download AAPL
    ///   ferroquote download MSFT --start 2020-01-01 --end 2020-12-31 --format csv
    Download(DownloadArgs),

    /// Compute returns of the close price.
    ///
    ///   ferroquote returns AAPL
    ///   ferroquote returns AAPL --log --cumulative
    Returns(ReturnsArgs),

    /// Draw a daily candlestick chart to an .svg or Plotly .json file.
    Candlestick(CandlestickArgs),

    /// Draw cumulative returns to an .svg or Plotly .json file.
    Cumulative(CumulativeArgs),
}

/// Symbol and date range shared by every command.
#[derive(Debug, Args)]
pub struct RangeArgs {
    /// Market symbols; only the first one is downloaded.
    #[arg(num_args = 1.., default_value = "AAPL")]
    pub symbols: Vec<String>,

    /// First day to fetch (YYYY-MM-DD).
    #[arg(long, default_value = "2000-01-01")]
    pub start: String,

    /// Last day to fetch, inclusive (YYYY-MM-DD).
    #[arg(long, default_value = "2019-12-31")]
    pub end: String,
}

#[derive(Debug, Args)]
pub struct DownloadArgs {
    #[command(flatten)]
    pub range: RangeArgs,
}

#[derive(Debug, Args)]
pub struct ReturnsArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Use log returns instead of simple returns.
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Compound the returns from the first day.
    #[arg(long, default_value_t = false)]
    pub cumulative: bool,
}

#[derive(Debug, Args)]
pub struct CandlestickArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Currency symbol for the y-axis title.
    #[arg(long, default_value = "$")]
    pub currency: String,

    /// Output file; the extension picks SVG or Plotly JSON.
    #[arg(long)]
    pub out: PathBuf,
}

#[derive(Debug, Args)]
pub struct CumulativeArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Use log returns instead of simple returns.
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Output file; the extension picks SVG or Plotly JSON.
    #[arg(long)]
    pub out: PathBuf,
}
