//! Error types for linreg-figures.

use thiserror::Error;

/// Error type for data generation, rendering and display.
#[derive(Debug, Error)]
pub enum FigureError {
    /// The uniform range for x is empty or not finite.
    #[error("invalid sample range: [{low}, {high})")]
    SampleRange { low: f64, high: f64 },

    /// The noise distribution could not be built.
    #[error("invalid noise distribution: {0}")]
    Noise(#[from] rand_distr::NormalError),

    /// The viewer could not listen on its address.
    #[error("viewer could not bind {addr}: {reason}")]
    Bind { addr: String, reason: String },

    /// I/O failure while talking to the browser.
    #[error("viewer I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A figure could not be serialized.
    #[error("figure serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for linreg-figures operations.
pub type Result<T> = std::result::Result<T, FigureError>;
