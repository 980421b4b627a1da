//! Error types for the engine configuration layer

use thiserror::Error;

/// Errors from validating an engine configuration profile
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid hydration band: {0}")]
    HydrationBand(String),

    #[error("Invalid confidence band: {0}")]
    ConfidenceBand(String),

    #[error("Invalid threshold: {0}")]
    Threshold(String),
}
