use ferroquote_charts::{plot_candlestick, ChartSurface};
use ferroquote_core::{PriceSource, StockFetcher};

use crate::cli::CandlestickArgs;
use crate::error::CliError;
use crate::output::Report;

use super::{chart_report, download_request};

pub fn run<S: PriceSource>(
    args: &CandlestickArgs,
    fetcher: &StockFetcher<S>,
) -> Result<Report, CliError> {
    let surface = ChartSurface::from_path(&args.out)?;
    let table = fetcher.download(&download_request(&args.range)?)?;

    plot_candlestick(&table, table.symbol.as_str(), &args.currency, &surface)?;
    Ok(chart_report(&table, &surface))
}
