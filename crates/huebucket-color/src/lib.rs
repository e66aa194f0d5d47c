//! Huebucket Color - Colour space conversion and hue classification
//!
//! This crate provides the colour processing layer of the huebucket library:
//!
//! - **Colour space conversion** ([`colorspace`]): RGB <-> HSV, HSB, XYZ, Lab, LCH
//! - **Segment tables** ([`segment`]): piecewise-linear fits backing the conversions
//! - **Dynamic conversion** ([`convert`]): run-time colour space selection over `f64` triples
//! - **Palette** ([`palette`]): packed output colours and the bucket enumeration
//! - **Classification** ([`classify`]): hue-bucket pixel and image classification

pub mod classify;
pub mod colorspace;
pub mod convert;
pub mod error;
pub mod palette;
pub mod segment;

// Re-export core types
pub use huebucket_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export color space types and functions
pub use colorspace::{
    // Types
    Hsb,
    Hsv,
    Lab,
    Lch,
    Rgb,
    Xyz,
    // Pixel-level conversions
    hsb_to_rgb,
    lab_to_lch,
    lab_to_xyz,
    lch_to_lab,
    rgb_to_hsb,
    rgb_to_hsv,
    rgb_to_lab,
    rgb_to_xyz,
    xyz_to_lab,
    xyz_to_rgb,
};

// Re-export segment table support
pub use segment::SegmentTable;

// Re-export dynamic conversion
pub use convert::{ColorSpace, convert};

// Re-export palette types
pub use palette::Bucket;

// Re-export classification types and functions
pub use classify::{
    // Types
    ClassifyParams,
    // Functions
    binarize_image,
    bucket_for_pixel,
    classify_image,
    classify_pixel,
};
