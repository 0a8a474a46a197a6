//! End-to-end chart rendering: download through a fake provider, then draw.

use ferroquote_charts::{
    plot_candlestick, plot_cumulative_returns, CandlestickChart, ChartError, ChartSurface,
    DEFAULT_CURRENCY,
};
use ferroquote_core::{HttpResponse, ReturnMode};
use ferroquote_tests::{
    download_request, table_from_closes, yahoo_fetcher, RecordingHttpClient, CHART_BODY,
};
use time::macros::date;

#[test]
fn downloaded_prices_render_as_candlestick_svg() {
    let client = RecordingHttpClient::responding(Ok(HttpResponse::ok_json(CHART_BODY)));
    let table = yahoo_fetcher(client)
        .download(&download_request(
            &["AAPL"],
            date!(2024 - 01 - 02),
            date!(2024 - 01 - 04),
        ))
        .expect("download succeeds");

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("aapl.svg");
    plot_candlestick(
        &table,
        "AAPL",
        DEFAULT_CURRENCY,
        &ChartSurface::from_path(&path).expect("svg surface"),
    )
    .expect("chart renders");

    let svg = std::fs::read_to_string(&path).expect("svg written");
    assert!(svg.contains("AAPL - Daily"));
    assert!(svg.contains("Price per share in $"));
    assert!(svg.contains("Time"));
}

#[test]
fn candlestick_plotly_figure_has_daily_layout() {
    let table = table_from_closes("MSFT", &[370.0, 372.5, 368.0, 375.25]);

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("msft.json");
    plot_candlestick(
        &table,
        "MSFT",
        "$",
        &ChartSurface::from_path(&path).expect("json surface"),
    )
    .expect("chart renders");

    let figure: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("json written"))
            .expect("valid json");
    let layout = &figure["layout"];
    assert_eq!(layout["title"]["text"], "MSFT - Daily");
    assert_eq!(layout["xaxis"]["title"]["text"], "Time");
    assert_eq!(layout["yaxis"]["title"]["text"], "Price per share in $");
    assert_eq!(layout["xaxis"]["rangeslider"]["visible"], false);
    assert_eq!(layout["width"], 800);
    assert_eq!(layout["height"], 400);

    let trace = &figure["data"][0];
    assert_eq!(trace["type"], "candlestick");
    assert_eq!(trace["close"][3], 375.25);
    assert_eq!(trace["x"][0], "2024-01-02");
}

#[test]
fn cumulative_plot_is_returned_when_not_shown() {
    let table = table_from_closes("AAPL", &[100.0, 110.0, 99.0]);
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cumulative.svg");
    let surface = ChartSurface::from_path(&path).expect("svg surface");

    let plot = plot_cumulative_returns(&table, "AAPL", ReturnMode::Simple, false, &surface)
        .expect("plot builds")
        .expect("plot handed back");

    assert!(!path.exists(), "nothing is drawn until the caller renders");
    assert_eq!(plot.title, "AAPL - Daily Cummulative Returns");
    assert_eq!(plot.y_label, "Cummulative returns");
    assert_eq!(plot.x_label, "");

    plot.render(&surface).expect("deferred render");
    let svg = std::fs::read_to_string(&path).expect("svg written");
    assert!(svg.contains("AAPL - Daily Cummulative Returns"));
}

#[test]
fn cumulative_plot_is_drawn_when_shown() {
    let table = table_from_closes("AAPL", &[100.0, 110.0, 99.0]);
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cumulative.json");

    let returned = plot_cumulative_returns(
        &table,
        "AAPL",
        ReturnMode::Simple,
        true,
        &ChartSurface::from_path(&path).expect("json surface"),
    )
    .expect("plot renders");
    assert!(returned.is_none());

    let figure: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("json written"))
            .expect("valid json");
    assert_eq!(
        figure["layout"]["title"]["text"],
        "<b>AAPL - Daily Cummulative Returns</b>"
    );
    let y = figure["data"][0]["y"].as_array().expect("y values");
    let expected = [2.0, 2.2, 1.98];
    for (value, want) in y.iter().zip(expected) {
        let value = value.as_f64().expect("finite value");
        assert!((value - want).abs() < 1e-9);
    }
}

#[test]
fn log_cumulative_figure_encodes_non_finite_points_as_null() {
    let table = table_from_closes("AAPL", &[100.0, 110.0]);
    let plot = plot_cumulative_returns(
        &table,
        "AAPL",
        ReturnMode::Log,
        false,
        &ChartSurface::PlotlyJson("unused.json".into()),
    )
    .expect("plot builds")
    .expect("plot handed back");

    let figure = serde_json::to_value(plot.to_plotly_figure()).expect("serialize");
    assert!(figure["data"][0]["y"][0].is_null());
}

#[test]
fn unsupported_output_extension_is_rejected() {
    let err = ChartSurface::from_path("chart.bmp").expect_err("bmp is not supported");
    assert!(matches!(err, ChartError::UnsupportedSurface { .. }));
}

#[test]
fn candlestick_chart_can_be_inspected_before_rendering() {
    let table = table_from_closes("SAP", &[120.0, 121.0]);
    let chart = CandlestickChart::new(&table, "SAP", "€");

    assert_eq!(chart.len(), 2);
    assert_eq!(chart.y_title, "Price per share in €");
    assert!(chart
        .render_to_svg_string()
        .expect("svg renders")
        .contains("SAP - Daily"));
}
