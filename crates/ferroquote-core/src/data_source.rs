//! Price source contract and request/error types.
//!
//! A [`PriceSource`] answers one question: the provider-native daily rows
//! for a symbol over a closed date range. Normalization into a
//! [`PriceTable`](crate::PriceTable) happens in [`fetch`](crate::fetch).

use std::fmt::{Display, Formatter};

use time::macros::date;
use time::Date;

use crate::{RawDailyBar, Symbol};

/// Source-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// Transport failure or non-success status.
    Unavailable,
    /// The provider does not know the symbol or has no data for it.
    NotFound,
    InvalidRequest,
    /// The provider answered with something we could not read.
    Internal,
}

/// Structured error raised by a price source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
}

impl SourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::NotFound,
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidRequest,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Internal,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Unavailable => "source.unavailable",
            SourceErrorKind::NotFound => "source.not_found",
            SourceErrorKind::InvalidRequest => "source.invalid_request",
            SourceErrorKind::Internal => "source.internal",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// Caller-facing download request.
///
/// Several symbols may be supplied but only the first one is fetched.
/// `start <= end` is left to the provider to enforce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    symbols: Vec<Symbol>,
    pub start: Date,
    pub end: Date,
}

impl DownloadRequest {
    pub fn new(symbols: Vec<Symbol>, start: Date, end: Date) -> Result<Self, SourceError> {
        if symbols.is_empty() {
            return Err(SourceError::invalid_request(
                "download request must include at least one symbol",
            ));
        }
        Ok(Self {
            symbols,
            start,
            end,
        })
    }

    /// The symbol that will actually be downloaded.
    pub fn symbol(&self) -> &Symbol {
        &self.symbols[0]
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn history_request(&self) -> HistoryRequest {
        HistoryRequest {
            symbol: self.symbol().clone(),
            start: self.start,
            end: self.end,
        }
    }
}

impl Default for DownloadRequest {
    /// `AAPL` from 2000-01-01 through 2019-12-31.
    fn default() -> Self {
        Self {
            symbols: vec![Symbol::new_unchecked("AAPL")],
            start: date!(2000 - 01 - 01),
            end: date!(2019 - 12 - 31),
        }
    }
}

/// Single-symbol request handed to a [`PriceSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    pub symbol: Symbol,
    pub start: Date,
    pub end: Date,
}

/// Provider of daily price history.
pub trait PriceSource {
    /// Short provider name used in log events.
    fn name(&self) -> &'static str;

    /// Daily rows for `req.symbol` over the closed range `[req.start, req.end]`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the provider is unreachable, rejects the
    /// symbol, or answers with an unreadable payload.
    fn daily_history(&self, req: &HistoryRequest) -> Result<Vec<RawDailyBar>, SourceError>;
}

impl<S: PriceSource + ?Sized> PriceSource for &S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn daily_history(&self, req: &HistoryRequest) -> Result<Vec<RawDailyBar>, SourceError> {
        (**self).daily_history(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_symbol_list_is_rejected() {
        let err = DownloadRequest::new(Vec::new(), date!(2024 - 01 - 01), date!(2024 - 02 - 01))
            .expect_err("must fail");
        assert_eq!(err.kind(), SourceErrorKind::InvalidRequest);
        assert!(err.message().contains("symbol"));
    }

    #[test]
    fn only_first_symbol_is_requested() {
        let symbols = vec![
            Symbol::parse("MSFT").expect("symbol"),
            Symbol::parse("AAPL").expect("symbol"),
        ];
        let request = DownloadRequest::new(symbols, date!(2024 - 01 - 01), date!(2024 - 02 - 01))
            .expect("valid");

        assert_eq!(request.history_request().symbol.as_str(), "MSFT");
        assert_eq!(request.symbols().len(), 2);
    }

    #[test]
    fn default_request_covers_two_decades_of_aapl() {
        let request = DownloadRequest::default();
        assert_eq!(request.symbol().as_str(), "AAPL");
        assert_eq!(request.start, date!(2000 - 01 - 01));
        assert_eq!(request.end, date!(2019 - 12 - 31));
    }

    #[test]
    fn display_includes_code() {
        let err = SourceError::not_found("No data found, symbol may be delisted");
        assert_eq!(
            err.to_string(),
            "No data found, symbol may be delisted (source.not_found)"
        );
    }
}
