//! Huebucket Core - Basic data structures for colour classification
//!
//! This crate provides the fundamental types used throughout the
//! huebucket colour classification library:
//!
//! - [`Raster`] / [`RasterMut`] - The packed-RGB image container
//!   (immutable / mutable)
//! - [`Rect`] - Rectangular processing region
//! - [`color`] - Packed 24-bit RGB helpers (compose, extract, channel
//!   statistics)

pub mod error;
pub mod raster;

pub use error::{Error, Result};
pub use raster::{Raster, RasterMut, Rect};

/// Channel layout and helper functions for packed 24-bit RGB pixels.
///
/// # Pixel format
///
/// Pixels are stored as `0x00RRGGBB`: red in bits 23..16, green in
/// bits 15..8, blue in bits 7..0. The top byte is unused and kept zero.
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 16;
    pub const GREEN_SHIFT: u32 = 8;
    pub const BLUE_SHIFT: u32 = 0;

    /// Extract red component from a packed pixel.
    #[inline]
    pub const fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a packed pixel.
    #[inline]
    pub const fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a packed pixel.
    #[inline]
    pub const fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Compose a packed pixel from RGB channel values.
    #[inline]
    pub const fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        ((r as u32) << RED_SHIFT) | ((g as u32) << GREEN_SHIFT) | ((b as u32) << BLUE_SHIFT)
    }

    /// Extract RGB values from a packed pixel.
    #[inline]
    pub const fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// Compose a grey pixel with all three channels at `level`.
    #[inline]
    pub const fn grey(level: u8) -> u32 {
        compose_rgb(level, level, level)
    }

    /// Greatest absolute difference between any two RGB channels.
    ///
    /// Zero for a perfectly grey pixel; 255 for a fully saturated
    /// primary. The classifier uses this as its grey-axis test.
    #[inline]
    pub fn channel_spread(r: u8, g: u8, b: u8) -> u8 {
        let rg = (r as i32 - g as i32).abs();
        let rb = (r as i32 - b as i32).abs();
        let gb = (g as i32 - b as i32).abs();
        rg.max(rb).max(gb) as u8
    }

    /// Integer mean of the three RGB channels.
    #[inline]
    pub fn channel_mean(r: u8, g: u8, b: u8) -> u8 {
        ((r as u32 + g as u32 + b as u32) / 3) as u8
    }

}
