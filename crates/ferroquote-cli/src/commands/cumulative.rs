use ferroquote_charts::{plot_cumulative_returns, ChartSurface};
use ferroquote_core::{PriceSource, ReturnMode, StockFetcher};

use crate::cli::CumulativeArgs;
use crate::error::CliError;
use crate::output::Report;

use super::{chart_report, download_request};

pub fn run<S: PriceSource>(
    args: &CumulativeArgs,
    fetcher: &StockFetcher<S>,
) -> Result<Report, CliError> {
    let surface = ChartSurface::from_path(&args.out)?;
    let table = fetcher.download(&download_request(&args.range)?)?;
    let mode = ReturnMode::from_log_flag(args.log);

    plot_cumulative_returns(&table, table.symbol.as_str(), mode, true, &surface)?;
    Ok(chart_report(&table, &surface))
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, Command};
    use crate::commands::testing::StaticSource;

    #[test]
    fn writes_plotly_figure_to_out_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("aapl.json");
        let cli = Cli::parse_from([
            "ferroquote",
            "cumulative",
            "AAPL",
            "--out",
            out.to_str().expect("utf8 path"),
        ]);
        let Command::Cumulative(args) = &cli.command else {
            panic!("expected cumulative");
        };

        run(args, &StockFetcher::new(StaticSource)).expect("chart");

        let figure: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).expect("json written"))
                .expect("valid json");
        assert_eq!(
            figure["layout"]["title"]["text"],
            "<b>AAPL - Daily Cummulative Returns</b>"
        );
        assert_eq!(figure["data"][0]["y"][0], 2.0);
    }
}
