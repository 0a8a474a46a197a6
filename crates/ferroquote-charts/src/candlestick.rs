use ferroquote_core::{PriceRecord, PriceTable};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontStyle;
use time::Date;

use crate::axis::{date_label, date_strings, slot_range, value_bounds};
use crate::plotly::{Axis, Font, Layout, PlotlyFigure, RangeSlider, Title, Trace};
use crate::surface::{write_plotly, write_svg};
use crate::{ChartError, ChartSurface};

pub const CANDLESTICK_WIDTH: u32 = 800;
pub const CANDLESTICK_HEIGHT: u32 = 400;
pub const TITLE_FONT_SIZE: u32 = 30;
pub const DEFAULT_CURRENCY: &str = "$";

// Approximate pixel width left for candles once label areas are taken.
const PLOT_AREA_PX: f64 = 700.0;

/// Daily candlestick figure for a price table.
#[derive(Debug, Clone, PartialEq)]
pub struct CandlestickChart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub width: u32,
    pub height: u32,
    pub range_slider_visible: bool,
    dates: Vec<Date>,
    records: Vec<PriceRecord>,
}

impl CandlestickChart {
    pub fn new(data: &PriceTable, tick: &str, currency: &str) -> Self {
        Self {
            title: format!("{tick} - Daily"),
            x_title: String::from("Time"),
            y_title: format!("Price per share in {currency}"),
            width: CANDLESTICK_WIDTH,
            height: CANDLESTICK_HEIGHT,
            range_slider_visible: false,
            dates: data.dates(),
            records: data.records.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
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
        let column =
            |pick: fn(&PriceRecord) -> f64| -> Vec<f64> { self.records.iter().map(pick).collect() };

        PlotlyFigure {
            data: vec![Trace::Candlestick {
                x: date_strings(&self.dates),
                open: column(|r| r.open),
                high: column(|r| r.high),
                low: column(|r| r.low),
                close: column(|r| r.close),
            }],
            layout: Layout {
                title: Title {
                    text: self.title.clone(),
                    x: Some(0.5),
                    y: Some(0.9),
                    font: Some(Font {
                        size: TITLE_FONT_SIZE,
                    }),
                },
                xaxis: Axis {
                    title: Title::text(self.x_title.clone()),
                    rangeslider: Some(RangeSlider {
                        visible: self.range_slider_visible,
                    }),
                },
                yaxis: Axis::titled(self.y_title.clone()),
                width: self.width,
                height: self.height,
            },
        }
    }

    fn draw<DB: DrawingBackend>(&self, root: DrawingArea<DB, Shift>) -> Result<(), ChartError> {
        root.fill(&WHITE).map_err(ChartError::drawing)?;

        let title_font = FontDesc::new(
            FontFamily::SansSerif,
            f64::from(TITLE_FONT_SIZE),
            FontStyle::Normal,
        );
        let y_range = value_bounds(self.records.iter().flat_map(|r| [r.low, r.high]));

        let mut chart = ChartBuilder::on(&root)
            .caption(self.title.as_str(), title_font)
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(slot_range(self.records.len()), y_range)
            .map_err(ChartError::drawing)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(self.x_title.as_str())
            .y_desc(self.y_title.as_str())
            .x_labels(6)
            .x_label_formatter(&|x: &f64| date_label(&self.dates, *x))
            .draw()
            .map_err(ChartError::drawing)?;

        let candle_px = candle_width(self.records.len());
        chart
            .draw_series(self.records.iter().enumerate().map(|(i, r)| {
                CandleStick::new(
                    i as f64,
                    r.open,
                    r.high,
                    r.low,
                    r.close,
                    GREEN.filled(),
                    RED.filled(),
                    candle_px,
                )
            }))
            .map_err(ChartError::drawing)?;

        root.present().map_err(ChartError::drawing)?;
        Ok(())
    }
}

fn candle_width(len: usize) -> u32 {
    if len == 0 {
        return 1;
    }
    (PLOT_AREA_PX / len as f64 * 0.7).clamp(1.0, 15.0) as u32
}

/// Draw `data` as a daily candlestick chart on `surface`.
pub fn plot_candlestick(
    data: &PriceTable,
    tick: &str,
    currency: &str,
    surface: &ChartSurface,
) -> Result<(), ChartError> {
    CandlestickChart::new(data, tick, currency).render(surface)
}
