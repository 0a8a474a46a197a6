use ferroquote_core::{cumulative_returns, CumulativeReturnSeries, PriceTable, ReturnMode};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontStyle;
use tracing::debug;

use crate::axis::{date_label, date_strings, slot_range, value_bounds};
use crate::plotly::{Axis, Layout, PlotlyFigure, Title, Trace};
use crate::surface::{write_plotly, write_svg};
use crate::{ChartError, ChartSurface};

pub const CUMULATIVE_WIDTH: u32 = 640;
pub const CUMULATIVE_HEIGHT: u32 = 480;

const TITLE_FONT_SIZE: f64 = 20.0;

/// Line plot of cumulative returns, built but not yet displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeReturnsPlot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub width: u32,
    pub height: u32,
    series: CumulativeReturnSeries,
}

impl CumulativeReturnsPlot {
    pub fn new(series: CumulativeReturnSeries, tick: &str) -> Self {
        Self {
            title: format!("{tick} - Daily Cummulative Returns"),
            x_label: String::new(),
            y_label: String::from("Cummulative returns"),
            width: CUMULATIVE_WIDTH,
            height: CUMULATIVE_HEIGHT,
            series,
        }
    }

    pub fn from_prices(data: &PriceTable, tick: &str, mode: ReturnMode) -> Self {
        Self::new(cumulative_returns(data, mode), tick)
    }

    pub fn series(&self) -> &CumulativeReturnSeries {
        &self.series
    }

    pub fn render(&self, surface: &ChartSurface) -> Result<(), ChartError> {
        match surface {
            ChartSurface::SvgFile(path) => write_svg(path, &self.render_to_svg_string()?),
            ChartSurface::PlotlyJson(path) => write_plotly(path, &self.to_plotly_figure()),
        }
    }

    pub fn render_to_svg_string(&self) -> Result<String, ChartError> {
        let mut svg = String::new();
        {
            let root =
                SVGBackend::with_string(&mut svg, (self.width, self.height)).into_drawing_area();
            self.draw(root)?;
        }
        Ok(svg)
    }

    pub fn to_plotly_figure(&self) -> PlotlyFigure {
        PlotlyFigure {
            data: vec![Trace::Scatter {
                x: date_strings(&self.series.dates),
                y: self.series.values.clone(),
                mode: "lines",
            }],
            layout: Layout {
                title: Title::text(format!("<b>{}</b>", self.title)),
                xaxis: Axis::titled(self.x_label.clone()),
                yaxis: Axis::titled(self.y_label.clone()),
                width: self.width,
                height: self.height,
            },
        }
    }

    fn draw<DB: DrawingBackend>(&self, root: DrawingArea<DB, Shift>) -> Result<(), ChartError> {
        root.fill(&WHITE).map_err(ChartError::drawing)?;

        let title_font = FontDesc::new(FontFamily::SansSerif, TITLE_FONT_SIZE, FontStyle::Bold);
        let dates = &self.series.dates;

        let mut chart = ChartBuilder::on(&root)
            .caption(self.title.as_str(), title_font)
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(
                slot_range(self.series.len()),
                value_bounds(self.series.values.iter().copied()),
            )
            .map_err(ChartError::drawing)?;

        chart
            .configure_mesh()
            .x_desc(self.x_label.as_str())
            .y_desc(self.y_label.as_str())
            .x_labels(5)
            .x_label_formatter(&|x: &f64| date_label(dates, *x))
            .draw()
            .map_err(ChartError::drawing)?;

        for run in finite_runs(&self.series.values) {
            chart
                .draw_series(LineSeries::new(run, &BLUE))
                .map_err(ChartError::drawing)?;
        }

        root.present().map_err(ChartError::drawing)?;
        Ok(())
    }
}

/// Split the series into contiguous `(slot, value)` runs of finite values.
fn finite_runs(values: &[f64]) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();

    for (i, &value) in values.iter().enumerate() {
        if value.is_finite() {
            current.push((i as f64, value));
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Compute cumulative returns for `data` and plot them.
///
/// With `show` the plot is rendered on `surface` and `None` is returned.
/// Otherwise nothing is drawn and the plot is handed back to the caller.
pub fn plot_cumulative_returns(
    data: &PriceTable,
    tick: &str,
    mode: ReturnMode,
    show: bool,
    surface: &ChartSurface,
) -> Result<Option<CumulativeReturnsPlot>, ChartError> {
    let plot = CumulativeReturnsPlot::from_prices(data, tick, mode);
    debug!(tick, points = plot.series.len(), show, "built cumulative returns plot");

    if show {
        plot.render(surface)?;
        Ok(None)
    } else {
        Ok(Some(plot))
    }
}
