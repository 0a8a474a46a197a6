use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ferroquote_core::ValidationError),

    #[error(transparent)]
    Source(#[from] ferroquote_core::SourceError),

    #[error(transparent)]
    Chart(#[from] ferroquote_charts::ChartError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Source(_) => 3,
            Self::Chart(_) => 4,
            Self::Serialization(_) => 10,
            Self::Csv(_) => 10,
            Self::Io(_) => 10,
        }
    }
}
