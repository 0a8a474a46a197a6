//! Property checks for return and cumulative-return calculations.

use ferroquote_core::{compute_returns, cumulative_returns, ReturnMode};
use ferroquote_tests::table_from_closes;

const EPS: f64 = 1e-9;

fn close_series() -> Vec<Vec<f64>> {
    vec![
        vec![100.0],
        vec![100.0, 110.0, 99.0],
        vec![10.0, 10.5, 10.25, 11.0, 9.75, 12.0],
        vec![250.0, 250.0, 250.0],
        (1..=50).map(|i| 100.0 + f64::from(i).sin() * 5.0).collect(),
    ]
}

#[test]
fn both_modes_preserve_length() {
    for closes in close_series() {
        let table = table_from_closes("AAPL", &closes);
        for mode in [ReturnMode::Simple, ReturnMode::Log] {
            assert_eq!(compute_returns(&table, mode).len(), closes.len());
            assert_eq!(cumulative_returns(&table, mode).len(), closes.len());
        }
    }
}

#[test]
fn simple_returns_start_at_one_then_follow_close_ratio() {
    for closes in close_series() {
        let returns = compute_returns(&table_from_closes("AAPL", &closes), ReturnMode::Simple);

        assert_eq!(returns.values[0], 1.0);
        for i in 1..closes.len() {
            let expected = closes[i] / closes[i - 1] - 1.0;
            assert!((returns.values[i] - expected).abs() < EPS);
        }
    }
}

#[test]
fn log_returns_are_previous_over_current() {
    for closes in close_series() {
        let returns = compute_returns(&table_from_closes("AAPL", &closes), ReturnMode::Log);

        assert_eq!(returns.values[0], f64::NEG_INFINITY);
        for i in 1..closes.len() {
            let expected = (closes[i - 1] / closes[i]).ln();
            assert!((returns.values[i] - expected).abs() < EPS);
        }
    }
}

#[test]
fn cumulative_is_running_product_of_one_plus_return() {
    for closes in close_series() {
        let table = table_from_closes("AAPL", &closes);
        let returns = compute_returns(&table, ReturnMode::Simple);
        let cumulative = cumulative_returns(&table, ReturnMode::Simple);

        let mut product = 1.0;
        for (r, c) in returns.values.iter().zip(&cumulative.values) {
            product *= 1.0 + r;
            assert!((c - product).abs() < EPS);
        }
    }
}

#[test]
fn simple_cumulative_tracks_price_relative_to_first_close_doubled() {
    // The leading sentinel of 1 doubles every cumulative value.
    let closes = [100.0, 110.0, 99.0, 120.0];
    let cumulative = cumulative_returns(&table_from_closes("AAPL", &closes), ReturnMode::Simple);

    for (value, close) in cumulative.values.iter().zip(closes) {
        assert!((value - 2.0 * close / closes[0]).abs() < EPS);
    }
}

#[test]
fn worked_example_matches() {
    let table = table_from_closes("AAPL", &[100.0, 110.0, 99.0]);

    let returns = compute_returns(&table, ReturnMode::Simple);
    let cumulative = returns.cumulative();

    for (actual, expected) in returns.values.iter().zip([1.0, 0.1, -0.1]) {
        assert!((actual - expected).abs() < EPS);
    }
    for (actual, expected) in cumulative.values.iter().zip([2.0, 2.2, 1.98]) {
        assert!((actual - expected).abs() < EPS);
    }
}

#[test]
fn zero_close_degrades_to_non_finite_values_without_panicking() {
    let table = table_from_closes("AAPL", &[100.0, 0.0, 50.0]);

    let simple = compute_returns(&table, ReturnMode::Simple);
    assert_eq!(simple.values[1], -1.0);
    assert!(simple.values[2].is_infinite());

    let log = compute_returns(&table, ReturnMode::Log);
    assert!(log.values[1].is_infinite());

    let cumulative = cumulative_returns(&table, ReturnMode::Simple);
    assert_eq!(cumulative.values[1], 0.0);
    assert!(cumulative.values[2].is_nan());
}

#[test]
fn series_dates_match_table_dates() {
    let table = table_from_closes("AAPL", &[1.0, 2.0, 3.0]);
    let cumulative = cumulative_returns(&table, ReturnMode::Log);
    assert_eq!(cumulative.dates, table.dates());
}
