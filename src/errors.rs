use thiserror::Error;

/// Alert text shown when no dataset is available to render.
pub const MISSING_DATASET_MESSAGE: &str =
    "Holdings data not found. Please run `holdings-report fetch` first.";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Holdings data not found. Please run `holdings-report fetch` first.")]
    MissingDataset,

    #[error("Invalid holdings dataset: {0}")]
    InvalidDataset(String),

    #[error("Upstox API error: {0}")]
    Api(String),

    #[error("No holdings found in your account")]
    NoHoldings,
}
