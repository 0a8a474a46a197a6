//! Period-over-period returns and their cumulative compounding.
//!
//! Two conventions are kept exactly as downstream consumers expect them:
//!
//! - simple returns start with a sentinel of `1.0`, not `0.0` or `NaN`;
//! - log returns are `ln(previous / current)`, the inverse of the textbook
//!   `ln(current / previous)`, and the first entry is `ln(0 / close[0])`.
//!
//! Nothing is validated: zero or missing closes surface as `inf`, `-1` or
//! `NaN` in the output rather than as errors.

use time::Date;

use crate::PriceTable;

/// Which return formula to apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReturnMode {
    #[default]
    Simple,
    Log,
}

impl ReturnMode {
    pub const fn from_log_flag(log: bool) -> Self {
        if log {
            Self::Log
        } else {
            Self::Simple
        }
    }
}

/// Return values aligned one-to-one with a price table's dates.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnSeries {
    pub dates: Vec<Date>,
    pub values: Vec<f64>,
    pub mode: ReturnMode,
}

/// Running product of `(1 + r)` over a [`ReturnSeries`].
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeReturnSeries {
    pub dates: Vec<Date>,
    pub values: Vec<f64>,
    pub mode: ReturnMode,
}

macro_rules! dated_series {
    ($ty:ty) => {
        impl $ty {
            pub fn len(&self) -> usize {
                self.values.len()
            }

            pub fn is_empty(&self) -> bool {
                self.values.is_empty()
            }

            pub fn iter(&self) -> impl Iterator<Item = (Date, f64)> + '_ {
                self.dates.iter().copied().zip(self.values.iter().copied())
            }
        }
    };
}

dated_series!(ReturnSeries);
dated_series!(CumulativeReturnSeries);

impl ReturnSeries {
    /// Compound the series from the first period to the last.
    pub fn cumulative(&self) -> CumulativeReturnSeries {
        let values = self
            .values
            .iter()
            .scan(1.0_f64, |acc, r| {
                *acc *= 1.0 + r;
                Some(*acc)
            })
            .collect();

        CumulativeReturnSeries {
            dates: self.dates.clone(),
            values,
            mode: self.mode,
        }
    }
}

/// Returns of the table's close prices.
pub fn compute_returns(data: &PriceTable, mode: ReturnMode) -> ReturnSeries {
    let closes = data.closes();
    let values = match mode {
        ReturnMode::Simple => simple_returns(&closes),
        ReturnMode::Log => log_returns(&closes),
    };

    ReturnSeries {
        dates: data.dates(),
        values,
        mode,
    }
}

/// [`compute_returns`] followed by [`ReturnSeries::cumulative`].
pub fn cumulative_returns(data: &PriceTable, mode: ReturnMode) -> CumulativeReturnSeries {
    compute_returns(data, mode).cumulative()
}

fn simple_returns(closes: &[f64]) -> Vec<f64> {
    let mut values = Vec::with_capacity(closes.len());
    if closes.is_empty() {
        return values;
    }

    values.push(1.0);
    values.extend(closes.windows(2).map(|pair| pair[1] / pair[0] - 1.0));
    values
}

fn log_returns(closes: &[f64]) -> Vec<f64> {
    let lagged = std::iter::once(0.0).chain(closes.iter().copied());
    lagged
        .zip(closes.iter().copied())
        .map(|(previous, current)| (previous / current).ln())
        .collect()
}
