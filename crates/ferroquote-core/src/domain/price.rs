use serde::{Deserialize, Serialize};
use time::Date;

use crate::Symbol;

/// Daily bar exactly as the provider delivers it, adjusted close included.
///
/// Fields follow the provider's native column order
/// (Adj Close, Close, High, Low, Open, Volume).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawDailyBar {
    pub date: Date,
    pub adj_close: Option<f64>,
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub open: f64,
    pub volume: u64,
}

/// One trading day in a [`PriceTable`].
///
/// Field order is the table's column order: Open, Low, Close, High, Volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    #[serde(rename = "Date", with = "crate::domain::date::iso")]
    pub date: Date,
    #[serde(rename = "Open")]
    pub open: f64,
    #[serde(rename = "Low")]
    pub low: f64,
    #[serde(rename = "Close")]
    pub close: f64,
    #[serde(rename = "High")]
    pub high: f64,
    #[serde(rename = "Volume")]
    pub volume: u64,
}

impl From<RawDailyBar> for PriceRecord {
    fn from(raw: RawDailyBar) -> Self {
        Self {
            date: raw.date,
            open: raw.open,
            low: raw.low,
            close: raw.close,
            high: raw.high,
            volume: raw.volume,
        }
    }
}

/// Date-indexed daily price series for a single symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    pub symbol: Symbol,
    pub records: Vec<PriceRecord>,
}

impl PriceTable {
    /// Column names in output order.
    pub const COLUMNS: [&'static str; 5] = ["Open", "Low", "Close", "High", "Volume"];

    pub fn new(symbol: Symbol, records: Vec<PriceRecord>) -> Self {
        Self { symbol, records }
    }

    /// Flatten provider rows into the table layout, dropping adjusted close.
    pub fn from_raw(symbol: Symbol, rows: Vec<RawDailyBar>) -> Self {
        Self::new(symbol, rows.into_iter().map(PriceRecord::from).collect())
    }

    pub fn columns(&self) -> &'static [&'static str] {
        &Self::COLUMNS
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn dates(&self) -> Vec<Date> {
        self.records.iter().map(|record| record.date).collect()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.records.iter().map(|record| record.close).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn raw(date: Date, close: f64) -> RawDailyBar {
        RawDailyBar {
            date,
            adj_close: Some(close * 0.98),
            close,
            high: close + 1.0,
            low: close - 1.0,
            open: close - 0.5,
            volume: 1_000,
        }
    }

    #[test]
    fn from_raw_keeps_order_and_drops_adjusted_close() {
        let symbol = Symbol::parse("AAPL").expect("symbol");
        let table = PriceTable::from_raw(
            symbol,
            vec![raw(date!(2024 - 01 - 02), 10.0), raw(date!(2024 - 01 - 03), 11.0)],
        );

        assert_eq!(table.len(), 2);
        assert_eq!(table.closes(), vec![10.0, 11.0]);
        assert_eq!(
            table.records[0],
            PriceRecord {
                date: date!(2024 - 01 - 02),
                open: 9.5,
                low: 9.0,
                close: 10.0,
                high: 11.0,
                volume: 1_000,
            }
        );
    }

    #[test]
    fn serialized_record_uses_column_order_without_adjusted_close() {
        let record = PriceRecord::from(raw(date!(2024 - 01 - 02), 10.0));
        let json = serde_json::to_string(&record).expect("serialize");

        assert_eq!(
            json,
            r#"{"Date":"2024-01-02","Open":9.5,"Low":9.0,"Close":10.0,"High":11.0,"Volume":1000}"#
        );
        assert!(!json.contains("Adj"));
    }
}
