use ferroquote_core::{compute_returns, PriceSource, ReturnMode, StockFetcher};
use time::Date;

use crate::cli::ReturnsArgs;
use crate::error::CliError;
use crate::output::{Cell, Report};

use super::download_request;

pub fn run<S: PriceSource>(
    args: &ReturnsArgs,
    fetcher: &StockFetcher<S>,
) -> Result<Report, CliError> {
    let table = fetcher.download(&download_request(&args.range)?)?;
    let returns = compute_returns(&table, ReturnMode::from_log_flag(args.log));

    if args.cumulative {
        let cumulative = returns.cumulative();
        Ok(series_report("Cumulative Return", cumulative.iter()))
    } else {
        Ok(series_report("Return", returns.iter()))
    }
}

fn series_report(column: &'static str, points: impl Iterator<Item = (Date, f64)>) -> Report {
    let mut report = Report::new(vec!["Date", column]);
    for (date, value) in points {
        report.push(vec![Cell::Date(date), Cell::Float(value)]);
    }
    report
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, Command};
    use crate::commands::testing::StaticSource;

    fn report(argv: &[&str]) -> Report {
        let cli = Cli::parse_from(argv);
        let Command::Returns(args) = &cli.command else {
            panic!("expected returns");
        };
        run(args, &StockFetcher::new(StaticSource)).expect("report")
    }

    fn values(report: &Report) -> Vec<f64> {
        report
            .rows
            .iter()
            .map(|row| match row[1] {
                Cell::Float(value) => value,
                ref other => panic!("unexpected cell {other:?}"),
            })
            .collect()
    }

    #[test]
    fn simple_returns_start_at_one() {
        let report = report(&["ferroquote", "returns", "AAPL"]);
        assert_eq!(report.headers, vec!["Date", "Return"]);

        let values = values(&report);
        assert_eq!(values[0], 1.0);
        assert!((values[1] - 0.1).abs() < 1e-12);
        assert!((values[2] + 0.1).abs() < 1e-12);
    }

    #[test]
    fn cumulative_flag_compounds() {
        let values = values(&report(&["ferroquote", "returns", "AAPL", "--cumulative"]));
        assert!((values[0] - 2.0).abs() < 1e-12);
        assert!((values[1] - 2.2).abs() < 1e-12);
        assert!((values[2] - 1.98).abs() < 1e-12);
    }

    #[test]
    fn log_flag_uses_log_returns() {
        let values = values(&report(&["ferroquote", "returns", "AAPL", "--log"]));
        assert_eq!(values[0], f64::NEG_INFINITY);
        assert!((values[1] - (100.0_f64 / 110.0).ln()).abs() < 1e-12);
    }
}
