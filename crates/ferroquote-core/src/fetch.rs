//! Download daily prices and normalize them into a [`PriceTable`].
//!
//! Logging goes through `tracing`. Nothing here installs a global
//! subscriber: events reach whatever dispatcher is current, or the one a
//! caller attaches with [`StockFetcher::with_dispatch`].

use tracing::{info, Dispatch};

use crate::adapters::YahooAdapter;
use crate::config::FetchConfig;
use crate::data_source::{DownloadRequest, PriceSource, SourceError};
use crate::PriceTable;

/// Fetch `request.symbol()` from `source` and normalize the result.
///
/// Emits one `INFO` event naming the symbol before the provider is called.
/// Provider errors are returned as-is; there is no retry.
pub fn download_stock<S>(source: &S, request: &DownloadRequest) -> Result<PriceTable, SourceError>
where
    S: PriceSource + ?Sized,
{
    let symbol = request.symbol();
    info!(source = source.name(), "Download data from {symbol}");

    let rows = source.daily_history(&request.history_request())?;
    Ok(PriceTable::from_raw(symbol.clone(), rows))
}

/// A price source paired with an optional caller-owned log sink.
pub struct StockFetcher<S> {
    source: S,
    dispatch: Option<Dispatch>,
}

impl StockFetcher<YahooAdapter> {
    pub fn yahoo(config: &FetchConfig) -> Result<Self, SourceError> {
        Ok(Self::new(YahooAdapter::from_config(config)?))
    }
}

impl<S: PriceSource> StockFetcher<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            dispatch: None,
        }
    }

    /// Route this fetcher's events to `dispatch` instead of the current default.
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = Some(dispatch);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn download(&self, request: &DownloadRequest) -> Result<PriceTable, SourceError> {
        match &self.dispatch {
            Some(dispatch) => {
                tracing::dispatcher::with_default(dispatch, || download_stock(&self.source, request))
            }
            None => download_stock(&self.source, request),
        }
    }
}
