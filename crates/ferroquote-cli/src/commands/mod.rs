mod candlestick;
mod cumulative;
mod download;
mod returns;

use ferroquote_charts::ChartSurface;
use ferroquote_core::domain::date::parse_date;
use ferroquote_core::{
    DownloadRequest, FetchConfig, PriceSource, PriceTable, StockFetcher, Symbol,
};

use crate::cli::{Cli, Command, RangeArgs};
use crate::error::CliError;
use crate::output::{Cell, Report};

pub fn run(cli: &Cli) -> Result<Report, CliError> {
    let fetcher = StockFetcher::yahoo(&fetch_config(cli)?)?;
    run_with(cli, &fetcher)
}

/// Dispatch `cli.command` against an already-built fetcher.
pub fn run_with<S: PriceSource>(cli: &Cli, fetcher: &StockFetcher<S>) -> Result<Report, CliError> {
    match &cli.command {
        Command::Download(args) => download::run(args, fetcher),
        Command::Returns(args) => returns::run(args, fetcher),
        Command::Candlestick(args) => candlestick::run(args, fetcher),
        Command::Cumulative(args) => cumulative::run(args, fetcher),
    }
}

/// Environment configuration with command-line overrides applied on top.
fn fetch_config(cli: &Cli) -> Result<FetchConfig, CliError> {
    let mut config = FetchConfig::from_env()?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.as_str())?;
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config = config.with_timeout_ms(timeout_ms)?;
    }
    Ok(config)
}

fn download_request(range: &RangeArgs) -> Result<DownloadRequest, CliError> {
    let symbols = range
        .symbols
        .iter()
        .map(|raw| Symbol::parse(raw))
        .collect::<Result<Vec<_>, _>>()?;
    let start = parse_date(&range.start)?;
    let end = parse_date(&range.end)?;
    Ok(DownloadRequest::new(symbols, start, end)?)
}

/// Single-row summary of a chart written to disk.
fn chart_report(table: &PriceTable, surface: &ChartSurface) -> Report {
    let mut report = Report::new(vec!["Symbol", "Rows", "Output"]);
    report.push(vec![
        Cell::Text(table.symbol.to_string()),
        Cell::Int(table.len() as u64),
        Cell::Text(surface.path().display().to_string()),
    ]);
    report
}
