use ferroquote_core::{PriceSource, PriceTable, StockFetcher};

use crate::cli::DownloadArgs;
use crate::error::CliError;
use crate::output::{Cell, Report};

use super::download_request;

pub fn run<S: PriceSource>(
    args: &DownloadArgs,
    fetcher: &StockFetcher<S>,
) -> Result<Report, CliError> {
    let table = fetcher.download(&download_request(&args.range)?)?;
    Ok(price_report(&table))
}

fn price_report(table: &PriceTable) -> Report {
    let mut headers = vec!["Date"];
    headers.extend(table.columns());

    let mut report = Report::new(headers);
    for record in &table.records {
        report.push(vec![
            Cell::Date(record.date),
            Cell::Float(record.open),
            Cell::Float(record.low),
            Cell::Float(record.close),
            Cell::Float(record.high),
            Cell::Int(record.volume),
        ]);
    }
    report
}
