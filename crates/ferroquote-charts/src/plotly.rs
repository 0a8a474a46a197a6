//! Plotly figure documents.
//!
//! Only the subset of the plotly.js schema our two charts use. Non-finite
//! values serialize as `null`, which plotly.js renders as a gap.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotlyFigure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Candlestick {
        x: Vec<String>,
        open: Vec<f64>,
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
    },
    Scatter {
        x: Vec<String>,
        y: Vec<f64>,
        mode: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

impl Title {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            x: None,
            y: None,
            font: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Font {
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rangeslider: Option<RangeSlider>,
}

impl Axis {
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: Title::text(text),
            rangeslider: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeSlider {
    pub visible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scatter_trace_is_tagged_and_nulls_non_finite_values() {
        let trace = Trace::Scatter {
            x: vec![String::from("2024-01-02"), String::from("2024-01-03")],
            y: vec![f64::NEG_INFINITY, 1.5],
            mode: "lines",
        };

        assert_eq!(
            serde_json::to_value(&trace).expect("serialize"),
            json!({
                "type": "scatter",
                "x": ["2024-01-02", "2024-01-03"],
                "y": [null, 1.5],
                "mode": "lines"
            })
        );
    }

    #[test]
    fn plain_axis_omits_optional_fields() {
        assert_eq!(
            serde_json::to_value(Axis::titled("")).expect("serialize"),
            json!({ "title": { "text": "" } })
        );
    }
}
