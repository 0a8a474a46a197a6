use thiserror::Error;

/// Errors raised while building or writing a chart.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("drawing failed: {0}")]
    Drawing(String),

    #[error("unsupported chart output '{path}', expected .svg or .json")]
    UnsupportedSurface { path: String },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ChartError {
    pub(crate) fn drawing(error: impl std::fmt::Display) -> Self {
        Self::Drawing(error.to_string())
    }
}
