//! Generic colour conversion dispatch
//!
//! A single entry point over the pairwise conversions in
//! [`crate::colorspace`], for scripting-style callers that select the
//! source and target space at runtime and pass channels as plain f64
//! triples.

use crate::colorspace::{self, Hsb, Lab, Lch, Xyz};
use crate::error::{ColorError, ColorResult};

/// Colour space selector for [`convert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    Rgb,
    Hsv,
    Hsb,
    Xyz,
    Lab,
    Lch,
}

impl ColorSpace {
    /// Display name used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            ColorSpace::Rgb => "RGB",
            ColorSpace::Hsv => "HSV",
            ColorSpace::Hsb => "HSB",
            ColorSpace::Xyz => "XYZ",
            ColorSpace::Lab => "Lab",
            ColorSpace::Lch => "LCH",
        }
    }
}

/// Saturate an f64 channel into an integral 0-255 level.
///
/// Out-of-domain values clamp rather than fault; NaN maps to 0.
fn channel_level(v: f64) -> u8 {
    v.round() as u8
}

/// Convert a channel triple between two colour spaces.
///
/// Supported pairs: RGB to HSV/HSB/XYZ/Lab, HSB to RGB, XYZ to Lab/RGB,
/// Lab to XYZ/LCH, LCH to Lab, and the identity for every space.
///
/// # Errors
///
/// Returns [`ColorError::InvalidTriple`] if `triple` does not hold exactly
/// three components, or [`ColorError::UnsupportedConversion`] for a pair
/// outside the list above.
pub fn convert(from: ColorSpace, to: ColorSpace, triple: &[f64]) -> ColorResult<[f64; 3]> {
    if triple.len() != 3 {
        return Err(ColorError::InvalidTriple {
            actual: triple.len(),
        });
    }
    let (c0, c1, c2) = (triple[0], triple[1], triple[2]);

    if from == to {
        return Ok([c0, c1, c2]);
    }

    let out = match (from, to) {
        (ColorSpace::Rgb, ColorSpace::Hsv) => {
            let hsv =
                colorspace::rgb_to_hsv(channel_level(c0), channel_level(c1), channel_level(c2));
            [hsv.h as f64, hsv.s as f64, hsv.v as f64]
        }
        (ColorSpace::Rgb, ColorSpace::Hsb) => {
            let hsb =
                colorspace::rgb_to_hsb(channel_level(c0), channel_level(c1), channel_level(c2));
            [hsb.h as f64, hsb.s as f64, hsb.b as f64]
        }
        (ColorSpace::Hsb, ColorSpace::Rgb) => {
            let rgb = colorspace::hsb_to_rgb(Hsb::new(c0 as f32, c1 as f32, c2 as f32));
            [rgb.r as f64, rgb.g as f64, rgb.b as f64]
        }
        (ColorSpace::Rgb, ColorSpace::Xyz) => {
            let xyz =
                colorspace::rgb_to_xyz(channel_level(c0), channel_level(c1), channel_level(c2));
            [xyz.x as f64, xyz.y as f64, xyz.z as f64]
        }
        (ColorSpace::Rgb, ColorSpace::Lab) => {
            let lab =
                colorspace::rgb_to_lab(channel_level(c0), channel_level(c1), channel_level(c2));
            [lab.l as f64, lab.a as f64, lab.b as f64]
        }
        (ColorSpace::Xyz, ColorSpace::Lab) => {
            let lab = colorspace::xyz_to_lab(Xyz::new(c0 as f32, c1 as f32, c2 as f32));
            [lab.l as f64, lab.a as f64, lab.b as f64]
        }
        (ColorSpace::Xyz, ColorSpace::Rgb) => {
            let rgb = colorspace::xyz_to_rgb(Xyz::new(c0 as f32, c1 as f32, c2 as f32));
            [rgb.r as f64, rgb.g as f64, rgb.b as f64]
        }
        (ColorSpace::Lab, ColorSpace::Xyz) => {
            let xyz = colorspace::lab_to_xyz(Lab::new(c0 as f32, c1 as f32, c2 as f32));
            [xyz.x as f64, xyz.y as f64, xyz.z as f64]
        }
        (ColorSpace::Lab, ColorSpace::Lch) => {
            let lch = colorspace::lab_to_lch(Lab::new(c0 as f32, c1 as f32, c2 as f32));
            [lch.l as f64, lch.c as f64, lch.h as f64]
        }
        (ColorSpace::Lch, ColorSpace::Lab) => {
            let lab = colorspace::lch_to_lab(Lch::new(c0 as f32, c1 as f32, c2 as f32));
            [lab.l as f64, lab.a as f64, lab.b as f64]
        }
        (from, to) => {
            return Err(ColorError::UnsupportedConversion {
                from: from.name(),
                to: to.name(),
            });
        }
    };

    Ok(out)
}
