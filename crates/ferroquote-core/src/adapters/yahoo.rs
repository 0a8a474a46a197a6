use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::FetchConfig;
use crate::data_source::{HistoryRequest, PriceSource, SourceError};
use crate::domain::date::{exchange_date, midnight_utc_timestamp};
use crate::http_client::{HttpAuth, HttpClient, HttpRequest, ReqwestHttpClient};
use crate::RawDailyBar;

/// Yahoo Finance daily history adapter (`/v8/finance/chart`).
#[derive(Clone)]
pub struct YahooAdapter {
    http_client: Arc<dyn HttpClient>,
    auth: HttpAuth,
    base_url: String,
    timeout_ms: u64,
}

impl YahooAdapter {
    /// Adapter over a real `reqwest` transport built from `config`.
    pub fn from_config(config: &FetchConfig) -> Result<Self, SourceError> {
        let client = ReqwestHttpClient::new(config)
            .map_err(|e| SourceError::internal(format!("yahoo client setup failed: {e}")))?;
        Ok(Self::with_http_client(Arc::new(client), config))
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>, config: &FetchConfig) -> Self {
        Self {
            http_client,
            auth: config.auth.clone(),
            base_url: config.base_url.clone(),
            timeout_ms: config.timeout_ms,
        }
    }

    /// Chart endpoint for the closed range `[start, end]`.
    pub fn history_url(&self, req: &HistoryRequest) -> String {
        // period2 is exclusive upstream, so ask for midnight after `end`.
        let period1 = midnight_utc_timestamp(req.start);
        let period2 = midnight_utc_timestamp(req.end.next_day().unwrap_or(req.end));
        format!(
            "{}/v8/finance/chart/{}?period1={}&period2={}&interval=1d&events=history&includeAdjustedClose=true",
            self.base_url,
            urlencoding::encode(req.symbol.as_str()),
            period1,
            period2,
        )
    }
}

impl PriceSource for YahooAdapter {
    fn name(&self) -> &'static str {
        "yahoo"
    }

    fn daily_history(&self, req: &HistoryRequest) -> Result<Vec<RawDailyBar>, SourceError> {
        let endpoint = self.history_url(req);
        debug!(url = %endpoint, "requesting yahoo chart");

        let request = HttpRequest::get(&endpoint)
            .with_header("referer", "https://finance.yahoo.com/")
            .with_auth(&self.auth)
            .with_timeout_ms(self.timeout_ms);

        let response = self.http_client.execute(request).map_err(|e| {
            SourceError::unavailable(format!("yahoo transport error: {}", e.message()))
        })?;

        // Yahoo reports unknown symbols as a 404 carrying a JSON error body.
        if let Ok(envelope) = serde_json::from_str::<YahooChartResponse>(&response.body) {
            if let Some(error) = envelope.chart.error {
                return Err(error.into_source_error());
            }
            if response.is_success() {
                let rows = parse_chart(envelope.chart.result)?;
                debug!(symbol = %req.symbol, rows = rows.len(), "parsed yahoo chart");
                return Ok(rows);
            }
        }

        if response.status == 404 {
            return Err(SourceError::not_found(format!(
                "yahoo has no chart for {}",
                req.symbol
            )));
        }

        if !response.is_success() {
            return Err(SourceError::unavailable(format!(
                "yahoo returned status {}",
                response.status
            )));
        }

        Err(SourceError::internal("failed to parse yahoo chart response"))
    }
}

fn parse_chart(result: Option<Vec<YahooChartResult>>) -> Result<Vec<RawDailyBar>, SourceError> {
    let result = result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| SourceError::internal("no chart data in response"))?;

    let Some(timestamps) = result.timestamp else {
        return Ok(Vec::new());
    };

    let quote = result
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| SourceError::internal("no quote data in chart response"))?;
    let adj_close = result
        .indicators
        .adjclose
        .and_then(|series| series.into_iter().next())
        .map(|series| series.adjclose)
        .unwrap_or_default();
    let gmtoffset = result.meta.and_then(|meta| meta.gmtoffset).unwrap_or(0);

    let mut rows = Vec::with_capacity(timestamps.len());
    for (i, &ts) in timestamps.iter().enumerate() {
        let date = exchange_date(ts, gmtoffset)
            .ok_or_else(|| SourceError::internal(format!("invalid timestamp: {ts}")))?;

        let (Some(open), Some(high), Some(low), Some(close)) = (
            value_at(&quote.open, i),
            value_at(&quote.high, i),
            value_at(&quote.low, i),
            value_at(&quote.close, i),
        ) else {
            warn!(%date, "skipping yahoo row with missing prices");
            continue;
        };

        rows.push(RawDailyBar {
            date,
            adj_close: value_at(&adj_close, i),
            close,
            high,
            low,
            open,
            volume: value_at(&quote.volume, i).unwrap_or(0),
        });
    }

    Ok(rows)
}

fn value_at<T: Copy>(values: &[Option<T>], index: usize) -> Option<T> {
    values.get(index).copied().flatten()
}

#[derive(Debug, Deserialize)]
struct YahooChartResponse {
    chart: YahooChartData,
}

#[derive(Debug, Deserialize)]
struct YahooChartData {
    #[serde(default)]
    result: Option<Vec<YahooChartResult>>,
    #[serde(default)]
    error: Option<YahooChartError>,
}

#[derive(Debug, Deserialize)]
struct YahooChartError {
    code: String,
    #[serde(default)]
    description: Option<String>,
}

impl YahooChartError {
    fn into_source_error(self) -> SourceError {
        let message = match self.description {
            Some(description) if !description.is_empty() => description,
            _ => self.code.clone(),
        };
        if self.code.eq_ignore_ascii_case("Not Found") {
            SourceError::not_found(message)
        } else {
            SourceError::unavailable(format!("yahoo chart API error ({}): {message}", self.code))
        }
    }
}

#[derive(Debug, Deserialize)]
struct YahooChartResult {
    #[serde(default)]
    meta: Option<YahooChartMeta>,
    #[serde(default)]
    timestamp: Option<Vec<i64>>,
    indicators: YahooChartIndicators,
}

#[derive(Debug, Deserialize)]
struct YahooChartMeta {
    #[serde(default)]
    gmtoffset: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct YahooChartIndicators {
    quote: Vec<YahooChartQuote>,
    #[serde(default)]
    adjclose: Option<Vec<YahooAdjClose>>,
}

#[derive(Debug, Deserialize)]
struct YahooChartQuote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<u64>>,
}

#[derive(Debug, Deserialize)]
struct YahooAdjClose {
    #[serde(default)]
    adjclose: Vec<Option<f64>>,
}
