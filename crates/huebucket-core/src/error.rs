//! Error types for huebucket-core
//!
//! Provides a unified error type for the core crate. Each variant captures
//! enough context for diagnostics without exposing internal implementation
//! details.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel buffer length does not match the stated dimensions
    #[error("buffer length mismatch: expected {expected} pixels, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Processing region extends past the image bounds
    #[error("region {x},{y} {rw}x{rh} extends past image bounds {width}x{height}")]
    RegionOutOfBounds {
        x: u32,
        y: u32,
        rw: u32,
        rh: u32,
        width: u32,
        height: u32,
    },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
