//! Hue-bucket pixel classification
//!
//! Classifies pixels into named colour buckets from their HSV values plus
//! RGB channel spread and mean. Near-grey pixels (low spread or low
//! saturation) are split into black, grey and white by their mean; the rest
//! are split into eight hue sectors, most with light and dark twins chosen
//! by brightness.
//!
//! Both output modes share one decision core: full-colour mode paints each
//! matched bucket with its palette colour, binary mode paints matches as
//! foreground black on background white.

use crate::colorspace;
use crate::error::{ColorError, ColorResult};
use crate::palette::{self, Bucket};
use huebucket_core::color;
use huebucket_core::{Error as CoreError, RasterMut, Rect};

// Hue sector upper boundaries, each inclusive.
const RED_HUE: f64 = 0.0277;
const ORANGE_HUE: f64 = 0.1138;
const YELLOW_HUE: f64 = 0.1916;
const YELLOW_GREEN_HUE: f64 = 0.3083;
const GREEN_HUE: f64 = 0.425;
const AQUA_HUE: f64 = 0.475;
const BLUE_HUE: f64 = 0.8;
const MAGENTA_HUE: f64 = 0.9333;
const MAX_HUE: f64 = 1.0;

/// Classification parameters
///
/// An explicit value passed per invocation; callers wanting the thresholds
/// to persist across invocations hold on to the value themselves.
///
/// The numeric thresholds: `white_min` and `black_max` bound the channel
/// mean of near-grey pixels, `grey_tolerance` bounds the channel spread
/// below which a pixel counts as grey regardless of saturation,
/// `light_dark_cutoff` splits the light/dark twin sectors by HSV value, and
/// `saturation_cutoff` is the saturation at or below which a pixel is
/// treated as grey.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifyParams {
    pub white_min: i32,
    pub black_max: i32,
    pub grey_tolerance: i32,
    pub light_dark_cutoff: f64,
    pub saturation_cutoff: f64,

    // Bucket toggles; a disabled bucket's pixels are left unchanged in
    // full-colour mode and count as background in binary mode.
    pub white: bool,
    pub black: bool,
    pub grey: bool,
    pub red: bool,
    pub orange: bool,
    pub brown: bool,
    pub light_yellow: bool,
    pub dark_yellow: bool,
    pub light_yellow_green: bool,
    pub dark_yellow_green: bool,
    pub light_green: bool,
    pub dark_green: bool,
    pub aqua: bool,
    pub light_blue: bool,
    pub dark_blue: bool,
    pub magenta: bool,

    /// Binary mode: paint matches black on white instead of palette colours.
    pub binarize: bool,
    /// Replace unmatched pixels with a light grey placeholder.
    pub hide_background: bool,
    /// Replace unmatched pixels with the greyscale of their channel mean.
    /// Takes precedence over `hide_background`.
    pub make_grey: bool,
}

impl Default for ClassifyParams {
    fn default() -> Self {
        ClassifyParams {
            white_min: 200,
            black_max: 10,
            grey_tolerance: 10,
            light_dark_cutoff: 0.5,
            saturation_cutoff: 0.5,
            white: true,
            black: true,
            grey: true,
            red: true,
            orange: true,
            brown: true,
            light_yellow: true,
            dark_yellow: true,
            light_yellow_green: true,
            dark_yellow_green: true,
            light_green: true,
            dark_green: true,
            aqua: true,
            light_blue: true,
            dark_blue: true,
            magenta: true,
            binarize: false,
            hide_background: false,
            make_grey: false,
        }
    }
}

impl ClassifyParams {
    /// Whether the given bucket's toggle is on.
    pub fn enabled(&self, bucket: Bucket) -> bool {
        match bucket {
            Bucket::White => self.white,
            Bucket::Black => self.black,
            Bucket::Grey => self.grey,
            Bucket::Red => self.red,
            Bucket::Orange => self.orange,
            Bucket::Brown => self.brown,
            Bucket::LightYellow => self.light_yellow,
            Bucket::DarkYellow => self.dark_yellow,
            Bucket::LightYellowGreen => self.light_yellow_green,
            Bucket::DarkYellowGreen => self.dark_yellow_green,
            Bucket::LightGreen => self.light_green,
            Bucket::DarkGreen => self.dark_green,
            Bucket::Aqua => self.aqua,
            Bucket::LightBlue => self.light_blue,
            Bucket::DarkBlue => self.dark_blue,
            Bucket::Magenta => self.magenta,
        }
    }
}

/// Bucket for a pixel's measurements, before the toggle filter.
///
/// The sector plus the light/dark split fully determine the bucket; a
/// disabled light twin never falls through to its dark twin.
fn sector_bucket(
    hue: f64,
    saturation: f64,
    value: f64,
    spread: i32,
    mean: i32,
    params: &ClassifyParams,
) -> Option<Bucket> {
    if spread < params.grey_tolerance || saturation <= params.saturation_cutoff {
        return Some(if mean <= params.black_max {
            Bucket::Black
        } else if mean < params.white_min {
            Bucket::Grey
        } else {
            Bucket::White
        });
    }

    let is_light = value >= params.light_dark_cutoff;
    if hue <= RED_HUE {
        Some(Bucket::Red)
    } else if hue <= ORANGE_HUE {
        Some(if is_light { Bucket::Orange } else { Bucket::Brown })
    } else if hue <= YELLOW_HUE {
        Some(if is_light {
            Bucket::LightYellow
        } else {
            Bucket::DarkYellow
        })
    } else if hue <= YELLOW_GREEN_HUE {
        Some(if is_light {
            Bucket::LightYellowGreen
        } else {
            Bucket::DarkYellowGreen
        })
    } else if hue <= GREEN_HUE {
        Some(if is_light {
            Bucket::LightGreen
        } else {
            Bucket::DarkGreen
        })
    } else if hue <= AQUA_HUE {
        Some(Bucket::Aqua)
    } else if hue <= BLUE_HUE {
        Some(if is_light {
            Bucket::LightBlue
        } else {
            Bucket::DarkBlue
        })
    } else if hue <= MAGENTA_HUE {
        Some(Bucket::Magenta)
    } else if hue <= MAX_HUE {
        Some(Bucket::Red)
    } else {
        None
    }
}

/// Decide the bucket for one pixel's RGB values.
///
/// Returns `Some` only when the decided bucket's toggle is enabled. This is
/// the single decision boundary both output modes share.
pub fn bucket_for_pixel(r: u8, g: u8, b: u8, params: &ClassifyParams) -> Option<Bucket> {
    let (hue, saturation, value) = colorspace::hsv_components(r, g, b);
    let spread = color::channel_spread(r, g, b) as i32;
    let mean = color::channel_mean(r, g, b) as i32;

    let bucket = sector_bucket(hue, saturation, value, spread, mean, params)?;
    params.enabled(bucket).then_some(bucket)
}

/// Classify one packed-RGB pixel, returning its replacement value.
///
/// Full-colour mode: a matched bucket paints its palette colour; otherwise
/// the pixel keeps its value, or the `make_grey`/`hide_background` base
/// replaces it. Binary mode: matches become black, everything else white.
pub fn classify_pixel(pixel: u32, params: &ClassifyParams) -> u32 {
    let (r, g, b) = color::extract_rgb(pixel);

    if params.binarize {
        return match bucket_for_pixel(r, g, b, params) {
            Some(_) => palette::BLACK,
            None => palette::WHITE,
        };
    }

    match bucket_for_pixel(r, g, b, params) {
        Some(bucket) => bucket.color(),
        None => {
            if params.make_grey {
                color::grey(color::channel_mean(r, g, b))
            } else if params.hide_background {
                palette::LIGHT_GREY
            } else {
                pixel
            }
        }
    }
}

/// Classify every pixel of a raster region in place.
///
/// `region` defaults to the whole image; `mask` entries that are false skip
/// the pixel.
///
/// # Errors
///
/// Returns [`CoreError::RegionOutOfBounds`] if the region extends past the
/// raster, or [`ColorError::MaskSize`] if the mask length is not
/// `width * height`.
pub fn classify_image(
    raster: &mut RasterMut,
    region: Option<Rect>,
    mask: Option<&[bool]>,
    params: &ClassifyParams,
) -> ColorResult<()> {
    let width = raster.width();
    let height = raster.height();

    let region = region.unwrap_or(Rect::new(0, 0, width, height));
    if !region.fits_within(width, height) {
        return Err(CoreError::RegionOutOfBounds {
            x: region.x,
            y: region.y,
            rw: region.width,
            rh: region.height,
            width,
            height,
        }
        .into());
    }

    if let Some(mask) = mask {
        if mask.len() != raster.len() {
            return Err(ColorError::MaskSize {
                expected: raster.len(),
                actual: mask.len(),
            });
        }
    }

    let data = raster.data_mut();
    for y in region.y..region.y + region.height {
        let row_start = y as usize * width as usize;
        for x in region.x..region.x + region.width {
            let index = row_start + x as usize;
            if mask.is_some_and(|m| !m[index]) {
                continue;
            }
            data[index] = classify_pixel(data[index], params);
        }
    }

    Ok(())
}

/// Threshold every pixel to pure black or white by its channel mean.
///
/// Applied as the final pass of a binary-mode workflow so anti-aliased or
/// non-palette values collapse to the two mask levels.
pub fn binarize_image(raster: &mut RasterMut, level: u8) {
    for pixel in raster.data_mut() {
        let (r, g, b) = color::extract_rgb(*pixel);
        *pixel = if color::channel_mean(r, g, b) > level {
            palette::WHITE
        } else {
            palette::BLACK
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurements(r: u8, g: u8, b: u8) -> (f64, f64, f64, i32, i32) {
        let (hue, saturation, value) = colorspace::hsv_components(r, g, b);
        let spread = color::channel_spread(r, g, b) as i32;
        let mean = color::channel_mean(r, g, b) as i32;
        (hue, saturation, value, spread, mean)
    }

    #[test]
    fn test_default_thresholds() {
        let params = ClassifyParams::default();
        assert_eq!(params.white_min, 200);
        assert_eq!(params.black_max, 10);
        assert_eq!(params.grey_tolerance, 10);
        assert_eq!(params.light_dark_cutoff, 0.5);
        assert_eq!(params.saturation_cutoff, 0.5);
        assert!(params.red && params.magenta && params.dark_yellow_green);
        assert!(!params.binarize && !params.hide_background && !params.make_grey);
    }

    #[test]
    fn test_pure_red() {
        let params = ClassifyParams::default();
        assert_eq!(bucket_for_pixel(255, 0, 0, &params), Some(Bucket::Red));
        assert_eq!(classify_pixel(palette::RED, &params), palette::RED);

        let binary = ClassifyParams {
            binarize: true,
            ..ClassifyParams::default()
        };
        assert_eq!(classify_pixel(palette::RED, &binary), palette::BLACK);
    }

    #[test]
    fn test_near_black() {
        let params = ClassifyParams {
            black_max: 12,
            ..ClassifyParams::default()
        };
        assert_eq!(bucket_for_pixel(10, 10, 10, &params), Some(Bucket::Black));
    }

    #[test]
    fn test_near_grey() {
        // Spread 2 and saturation ~0.015 put this on the grey axis; the
        // mean of 128 lands between black_max and white_min.
        let params = ClassifyParams {
            black_max: 12,
            ..ClassifyParams::default()
        };
        assert_eq!(bucket_for_pixel(128, 128, 130, &params), Some(Bucket::Grey));
    }

    #[test]
    fn test_white() {
        let params = ClassifyParams::default();
        assert_eq!(bucket_for_pixel(230, 230, 228, &params), Some(Bucket::White));
    }

    #[test]
    fn test_hue_boundary_red_orange() {
        // The red sector's upper boundary is inclusive.
        let params = ClassifyParams::default();
        assert_eq!(
            sector_bucket(0.0277, 1.0, 1.0, 255, 85, &params),
            Some(Bucket::Red)
        );
        assert_eq!(
            sector_bucket(0.0278, 1.0, 1.0, 255, 85, &params),
            Some(Bucket::Orange)
        );
    }

    #[test]
    fn test_hue_ladder_sectors() {
        let params = ClassifyParams::default();
        let light = 1.0;
        let dark = 0.3;
        let cases = [
            (0.0, light, Bucket::Red),
            (0.05, light, Bucket::Orange),
            (0.05, dark, Bucket::Brown),
            (0.15, light, Bucket::LightYellow),
            (0.15, dark, Bucket::DarkYellow),
            (0.25, light, Bucket::LightYellowGreen),
            (0.25, dark, Bucket::DarkYellowGreen),
            (0.4, light, Bucket::LightGreen),
            (0.4, dark, Bucket::DarkGreen),
            (0.45, light, Bucket::Aqua),
            (0.45, dark, Bucket::Aqua),
            (0.6, light, Bucket::LightBlue),
            (0.6, dark, Bucket::DarkBlue),
            (0.9, light, Bucket::Magenta),
            (0.97, light, Bucket::Red),
            (1.0, dark, Bucket::Red),
        ];
        for (hue, value, expected) in cases {
            assert_eq!(
                sector_bucket(hue, 1.0, value, 255, 85, &params),
                Some(expected),
                "hue {hue} value {value}"
            );
        }
    }

    #[test]
    fn test_light_dark_twins() {
        let params = ClassifyParams::default();
        // (100, 47, 0): hue ~0.078, value ~0.39 -> dark twin.
        assert_eq!(bucket_for_pixel(100, 47, 0, &params), Some(Bucket::Brown));
        // (255, 120, 0): same sector, value 1.0 -> light twin.
        assert_eq!(bucket_for_pixel(255, 120, 0, &params), Some(Bucket::Orange));
    }

    #[test]
    fn test_disabled_light_twin_does_not_fall_through() {
        let params = ClassifyParams {
            orange: false,
            ..ClassifyParams::default()
        };
        // A light orange-sector pixel with orange disabled matches nothing,
        // even though brown is still enabled.
        assert_eq!(bucket_for_pixel(255, 120, 0, &params), None);
        assert_eq!(
            classify_pixel(color::compose_rgb(255, 120, 0), &params),
            color::compose_rgb(255, 120, 0)
        );
    }

    #[test]
    fn test_hide_background() {
        let params = ClassifyParams {
            red: false,
            hide_background: true,
            ..ClassifyParams::default()
        };
        assert_eq!(classify_pixel(palette::RED, &params), palette::LIGHT_GREY);
        // Matched buckets still override the placeholder.
        assert_eq!(classify_pixel(palette::AQUA, &params), palette::AQUA);
    }

    #[test]
    fn test_make_grey_overrides_hide_background() {
        let params = ClassifyParams {
            red: false,
            hide_background: true,
            make_grey: true,
            ..ClassifyParams::default()
        };
        let pixel = color::compose_rgb(255, 0, 0);
        assert_eq!(classify_pixel(pixel, &params), color::grey(85));
    }

    #[test]
    fn test_binary_ignores_background_flags() {
        let params = ClassifyParams {
            red: false,
            binarize: true,
            hide_background: true,
            make_grey: true,
            ..ClassifyParams::default()
        };
        assert_eq!(classify_pixel(palette::RED, &params), palette::WHITE);
    }

    #[test]
    fn test_binary_full_agreement() {
        // For any pixel, a full-colour match means binary foreground and
        // no match means binary background.
        let full = ClassifyParams {
            light_blue: false,
            saturation_cutoff: 0.3,
            ..ClassifyParams::default()
        };
        let binary = ClassifyParams {
            binarize: true,
            ..full.clone()
        };

        for pixel in [
            palette::RED,
            palette::LIGHT_BLUE,
            palette::AQUA,
            color::compose_rgb(5, 5, 5),
            color::compose_rgb(130, 130, 132),
            color::compose_rgb(100, 47, 0),
            color::compose_rgb(240, 240, 239),
        ] {
            let (r, g, b) = color::extract_rgb(pixel);
            let matched = bucket_for_pixel(r, g, b, &full).is_some();
            let binary_out = classify_pixel(pixel, &binary);
            assert_eq!(
                binary_out,
                if matched { palette::BLACK } else { palette::WHITE },
                "pixel {pixel:#08x}"
            );
        }
    }

    #[test]
    fn test_degenerate_pixels_are_total() {
        let params = ClassifyParams::default();
        // Saturation 0 and pure black must classify, not panic.
        assert_eq!(bucket_for_pixel(0, 0, 0, &params), Some(Bucket::Black));
        assert_eq!(bucket_for_pixel(255, 255, 255, &params), Some(Bucket::White));
    }

    #[test]
    fn test_classify_image_full() {
        let params = ClassifyParams::default();
        let mut raster = RasterMut::new(2, 2).unwrap();
        raster.set_pixel_unchecked(0, 0, palette::RED);
        raster.set_pixel_unchecked(1, 0, color::compose_rgb(100, 47, 0));
        raster.set_pixel_unchecked(0, 1, color::compose_rgb(130, 130, 132));
        raster.set_pixel_unchecked(1, 1, color::compose_rgb(250, 250, 250));

        classify_image(&mut raster, None, None, &params).unwrap();

        assert_eq!(raster.get_pixel_unchecked(0, 0), palette::RED);
        assert_eq!(raster.get_pixel_unchecked(1, 0), palette::BROWN);
        assert_eq!(raster.get_pixel_unchecked(0, 1), palette::GREY);
        assert_eq!(raster.get_pixel_unchecked(1, 1), palette::WHITE);
    }

    #[test]
    fn test_classify_image_region() {
        let params = ClassifyParams::default();
        let mut raster = RasterMut::new(4, 4).unwrap();
        raster.fill(palette::RED);

        classify_image(&mut raster, Some(Rect::new(1, 1, 2, 2)), None, &params).unwrap();

        // Inside the region red stays red (its own palette colour)...
        assert_eq!(raster.get_pixel_unchecked(1, 1), palette::RED);
        // ...so distinguish touched pixels with a non-palette input.
        let mut raster = RasterMut::new(4, 4).unwrap();
        raster.fill(color::compose_rgb(100, 47, 0));
        classify_image(&mut raster, Some(Rect::new(1, 1, 2, 2)), None, &params).unwrap();

        assert_eq!(raster.get_pixel_unchecked(0, 0), color::compose_rgb(100, 47, 0));
        assert_eq!(raster.get_pixel_unchecked(1, 1), palette::BROWN);
        assert_eq!(raster.get_pixel_unchecked(2, 2), palette::BROWN);
        assert_eq!(raster.get_pixel_unchecked(3, 3), color::compose_rgb(100, 47, 0));
        assert_eq!(raster.get_pixel_unchecked(1, 3), color::compose_rgb(100, 47, 0));
    }

    #[test]
    fn test_classify_image_region_out_of_bounds() {
        let params = ClassifyParams::default();
        let mut raster = RasterMut::new(4, 4).unwrap();
        let result = classify_image(&mut raster, Some(Rect::new(2, 2, 3, 3)), None, &params);
        assert!(matches!(
            result,
            Err(ColorError::Core(CoreError::RegionOutOfBounds { .. }))
        ));
    }

    #[test]
    fn test_classify_image_mask() {
        let params = ClassifyParams::default();
        let mut raster = RasterMut::new(2, 1).unwrap();
        raster.fill(color::compose_rgb(100, 47, 0));

        let mask = [true, false];
        classify_image(&mut raster, None, Some(&mask), &params).unwrap();

        assert_eq!(raster.get_pixel_unchecked(0, 0), palette::BROWN);
        assert_eq!(raster.get_pixel_unchecked(1, 0), color::compose_rgb(100, 47, 0));
    }

    #[test]
    fn test_classify_image_mask_size_mismatch() {
        let params = ClassifyParams::default();
        let mut raster = RasterMut::new(2, 2).unwrap();
        let mask = [true; 3];
        let result = classify_image(&mut raster, None, Some(&mask), &params);
        assert!(matches!(
            result,
            Err(ColorError::MaskSize {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_binarize_image() {
        let mut raster = RasterMut::new(3, 1).unwrap();
        raster.set_pixel_unchecked(0, 0, color::compose_rgb(255, 200, 10));
        raster.set_pixel_unchecked(1, 0, color::compose_rgb(100, 100, 100));
        raster.set_pixel_unchecked(2, 0, palette::WHITE);

        binarize_image(&mut raster, 128);

        assert_eq!(raster.get_pixel_unchecked(0, 0), palette::WHITE);
        assert_eq!(raster.get_pixel_unchecked(1, 0), palette::BLACK);
        assert_eq!(raster.get_pixel_unchecked(2, 0), palette::WHITE);

        // Idempotent on an already binary image.
        binarize_image(&mut raster, 128);
        assert_eq!(raster.get_pixel_unchecked(0, 0), palette::WHITE);
        assert_eq!(raster.get_pixel_unchecked(1, 0), palette::BLACK);
    }

    #[test]
    fn test_measurements_match_worked_examples() {
        let (_, saturation, _, spread, mean) = measurements(128, 128, 130);
        assert_eq!(spread, 2);
        assert_eq!(mean, 128);
        assert!((saturation - 2.0 / 130.0).abs() < 1e-9);

        let (hue, saturation, value, spread, mean) = measurements(255, 0, 0);
        assert_eq!((hue, saturation, value), (0.0, 1.0, 1.0));
        assert_eq!(spread, 255);
        assert_eq!(mean, 85);
    }
}
