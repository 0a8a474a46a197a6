use std::ops::Range;

use ferroquote_core::domain::date::format_date;
use time::Date;

/// X range placing bar `i` at `i as f64` with half a slot of padding.
pub(crate) fn slot_range(len: usize) -> Range<f64> {
    -0.5..(len.max(1) as f64 - 0.5)
}

/// Date under slot `x`, blank between or beyond bars.
pub(crate) fn date_label(dates: &[Date], x: f64) -> String {
    let rounded = x.round();
    if rounded < 0.0 || (rounded - x).abs() > 1e-6 {
        return String::new();
    }
    dates
        .get(rounded as usize)
        .map(|date| format_date(*date))
        .unwrap_or_default()
}

/// Padded bounds of the finite values; `0..1` when there are none.
pub(crate) fn value_bounds(values: impl IntoIterator<Item = f64>) -> Range<f64> {
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if !min.is_finite() {
        return 0.0..1.0;
    }

    let span = max - min;
    let pad = if span > 0.0 {
        span * 0.05
    } else {
        min.abs().max(1.0) * 0.05
    };
    (min - pad)..(max + pad)
}

pub(crate) fn date_strings(dates: &[Date]) -> Vec<String> {
    dates.iter().copied().map(format_date).collect()
}
