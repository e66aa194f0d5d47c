//! Huebucket - Colour analysis library for Rust
//!
//! Huebucket classifies 24-bit RGB images into a fixed palette of named hue
//! buckets, and provides the colour space conversions the classification is
//! built on.
//!
//! # Overview
//!
//! - Packed 24-bit RGB rasters with shared and mutable views
//! - Pixel-level conversions between RGB, HSV, HSB, XYZ, Lab and LCH
//! - Piecewise-linear segment tables behind the transcendental conversions
//! - Hue-bucket classification of pixels and images, full-colour or binary
//!
//! # Example
//!
//! ```
//! use huebucket::RasterMut;
//! use huebucket::color::{ClassifyParams, classify_image, palette};
//!
//! // Paint a solid image with its bucket colour
//! let mut raster = RasterMut::new(64, 64).unwrap();
//! raster.fill(0xff7800);
//! classify_image(&mut raster, None, None, &ClassifyParams::default()).unwrap();
//! assert_eq!(raster.get_pixel_unchecked(0, 0), palette::ORANGE);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use huebucket_core::*;

// Re-export the colour crate as a module to avoid name conflicts
pub use huebucket_color as color;
