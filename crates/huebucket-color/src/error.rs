//! Error types for huebucket-color

use thiserror::Error;

/// Errors that can occur during colour processing operations
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] huebucket_core::Error),

    /// Invalid configuration parameters
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Wrong component count for a colour triple
    #[error("invalid colour triple: expected 3 components, got {actual}")]
    InvalidTriple { actual: usize },

    /// Requested conversion has no implementation
    #[error("unsupported conversion: {from} to {to}")]
    UnsupportedConversion {
        from: &'static str,
        to: &'static str,
    },

    /// Selection mask does not cover the image
    #[error("mask size mismatch: expected {expected} entries, got {actual}")]
    MaskSize { expected: usize, actual: usize },
}

/// Result type for colour operations
pub type ColorResult<T> = Result<T, ColorError>;
