//! Colour space conversions
//!
//! Conversions between RGB, HSV/HSB, CIE XYZ, CIE Lab and CIE LCH under the
//! D65 illuminant. The per-pixel paths (RGB to XYZ, XYZ to Lab, Lab to LCH)
//! run on lookup tables built once on first use and shared read-only across
//! threads; the rarely used inverse paths evaluate exact closed forms.
//!
//! Conversions never fail on out-of-gamut values: table addressing is
//! clamped, and conversions into RGB round without clamping so callers can
//! detect results outside 0-255.

use crate::segment::SegmentTable;
use std::sync::LazyLock;

/// RGB triple, nominal 0-255 per channel.
///
/// Channels are `i32` because conversions into RGB round but do not clamp;
/// an out-of-gamut XYZ input produces channel values outside 0-255 and the
/// caller decides how to handle them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Rgb {
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Rgb { r, g, b }
    }
}

/// HSV triple, each component in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Hsv { h, s, v }
    }
}

/// HSV on the 0-255 scale (hue, saturation, brightness).
///
/// Fractional component values are accepted on input; conversions from RGB
/// produce whole numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    pub h: f32,
    pub s: f32,
    pub b: f32,
}

impl Hsb {
    pub const fn new(h: f32, s: f32, b: f32) -> Self {
        Hsb { h, s, b }
    }
}

/// CIE XYZ triple (D65): X in [0, 95.047], Y in [0, 100], Z in [0, 108.883].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Xyz {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Xyz { x, y, z }
    }
}

/// CIE L*a*b* triple: L in [0, 100], a and b in [-110, 110].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

impl Lab {
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Lab { l, a, b }
    }
}

/// CIE LCH triple: L in [0, 100], C in [0, 140], H in [0, 360].
///
/// Zero chroma maps to H = 360, not 0, so the achromatic case never
/// collides with the red hue sector at H = 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lch {
    pub l: f32,
    pub c: f32,
    pub h: f32,
}

impl Lch {
    pub const fn new(l: f32, c: f32, h: f32) -> Self {
        Lch { l, c, h }
    }
}

/// Segments in the Lab forward-function table.
const LAB_SEGMENTS: usize = 1000;

/// Segments in the arctangent, arc-cotangent and root tables.
const TRIG_SEGMENTS: usize = 200;

/// Levels in the per-channel sRGB linearization tables.
const GAMMA_LEVELS: usize = 256;

// D65 white point scales mapping each XYZ channel onto the Lab table's
// index range.
const LAB_X_SCALE: f32 = LAB_SEGMENTS as f32 / 95.047;
const LAB_Y_SCALE: f32 = LAB_SEGMENTS as f32 / 100.0;
const LAB_Z_SCALE: f32 = LAB_SEGMENTS as f32 / 108.883;

// Quadrant mapping for Lab to LCH, indexed [signum(a)+1][signum(b)+1]:
// H = offset + sign * table_angle.
const LCH_OFFSET: [[f32; 3]; 3] = [
    [180.0, 180.0, 180.0],
    [270.0, 0.0, 90.0],
    [360.0, 360.0, 0.0],
];
const LCH_SIGN: [[f32; 3]; 3] = [
    [1.0, 0.0, -1.0],
    [0.0, 0.0, 0.0],
    [-1.0, 0.0, 1.0],
];

/// Lab forward function f(t) over t = channel / white point.
fn lab_forward(t: f64) -> f64 {
    if t > 0.008856 {
        t.powf(1.0 / 3.0)
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

/// Inverse of [`lab_forward`].
fn lab_inverse(t: f64) -> f64 {
    let t3 = t.powi(3);
    if t3 > 0.008856 {
        t3
    } else {
        (t - 16.0 / 116.0) / 7.787
    }
}

fn arctan_degrees(x: f64) -> f64 {
    x.atan() * 180.0 / std::f64::consts::PI
}

fn unit_hypot(x: f64) -> f64 {
    (1.0 + x * x).sqrt()
}

/// Forward sRGB gamma curve applied after the linear XYZ to RGB matrix.
fn gamma_encode(v: f64) -> f64 {
    if v > 0.0031308 {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * v
    }
}

/// All lookup tables used by the conversion functions.
///
/// Built once, deterministically, on first use; read-only afterwards.
struct ConversionTables {
    // Per-level sRGB linearization premultiplied by the RGB to XYZ matrix
    // row constants, one array per (channel, output) pair.
    red_x: [f32; GAMMA_LEVELS],
    green_x: [f32; GAMMA_LEVELS],
    blue_x: [f32; GAMMA_LEVELS],
    red_y: [f32; GAMMA_LEVELS],
    green_y: [f32; GAMMA_LEVELS],
    blue_y: [f32; GAMMA_LEVELS],
    red_z: [f32; GAMMA_LEVELS],
    green_z: [f32; GAMMA_LEVELS],
    blue_z: [f32; GAMMA_LEVELS],
    // Lab forward function scaled into the L (x116 - 16), a (x500) and
    // b (x200) output ranges.
    lab_l: SegmentTable,
    lab_a: SegmentTable,
    lab_b: SegmentTable,
    // Trig tables over the folded ratio domain [0, 1].
    arctan: SegmentTable,
    arccot: SegmentTable,
    root: SegmentTable,
}

static TABLES: LazyLock<ConversionTables> = LazyLock::new(ConversionTables::build);

impl ConversionTables {
    fn build() -> Self {
        let mut red_x = [0.0f32; GAMMA_LEVELS];
        let mut green_x = [0.0f32; GAMMA_LEVELS];
        let mut blue_x = [0.0f32; GAMMA_LEVELS];
        let mut red_y = [0.0f32; GAMMA_LEVELS];
        let mut green_y = [0.0f32; GAMMA_LEVELS];
        let mut blue_y = [0.0f32; GAMMA_LEVELS];
        let mut red_z = [0.0f32; GAMMA_LEVELS];
        let mut green_z = [0.0f32; GAMMA_LEVELS];
        let mut blue_z = [0.0f32; GAMMA_LEVELS];

        for i in 0..GAMMA_LEVELS {
            let x = i as f64 / (GAMMA_LEVELS - 1) as f64;
            let lin = (if x > 0.04045 {
                ((x + 0.055) / 1.055).powf(2.4)
            } else {
                x / 12.92
            }) as f32;
            red_x[i] = 41.24 * lin;
            green_x[i] = 35.76 * lin;
            blue_x[i] = 18.05 * lin;
            red_y[i] = 21.26 * lin;
            green_y[i] = 71.52 * lin;
            blue_y[i] = 7.22 * lin;
            red_z[i] = 1.93 * lin;
            green_z[i] = 11.92 * lin;
            blue_z[i] = 95.05 * lin;
        }

        let lab_base = SegmentTable::fit(lab_forward, LAB_SEGMENTS, 1.0);

        ConversionTables {
            red_x,
            green_x,
            blue_x,
            red_y,
            green_y,
            blue_y,
            red_z,
            green_z,
            blue_z,
            lab_l: lab_base.scaled(116.0, -16.0),
            lab_a: lab_base.scaled(500.0, 0.0),
            lab_b: lab_base.scaled(200.0, 0.0),
            arctan: SegmentTable::fit(arctan_degrees, TRIG_SEGMENTS, 1.0),
            arccot: SegmentTable::fit(|x| 90.0 - arctan_degrees(x), TRIG_SEGMENTS, 1.0),
            root: SegmentTable::fit(unit_hypot, TRIG_SEGMENTS, 1.0),
        }
    }
}

/// HSV components in f64, shared by [`rgb_to_hsv`], the HSB scaling and the
/// classifier's threshold comparisons.
pub(crate) fn hsv_components(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let min = r.min(g).min(b);
    let max = r.max(g).max(b);
    let delta = max - min;

    if delta == 0.0 {
        // Grey: no chroma.
        return (0.0, 0.0, max);
    }

    let saturation = delta / max;
    let r_dist = ((max - r) / 6.0 + delta / 2.0) / delta;
    let g_dist = ((max - g) / 6.0 + delta / 2.0) / delta;
    let b_dist = ((max - b) / 6.0 + delta / 2.0) / delta;

    let mut hue = if r == max {
        b_dist - g_dist
    } else if g == max {
        1.0 / 3.0 + r_dist - b_dist
    } else {
        2.0 / 3.0 + g_dist - r_dist
    };
    if hue < 0.0 {
        hue += 1.0;
    } else if hue > 1.0 {
        hue -= 1.0;
    }

    (hue, saturation, max)
}

/// Convert RGB (0-255) to HSV (each component in [0, 1]).
///
/// Zero chroma yields h = 0, s = 0 and v = the common channel level.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let (h, s, v) = hsv_components(r, g, b);
    Hsv::new(h as f32, s as f32, v as f32)
}

/// Convert RGB (0-255) to HSB (HSV scaled to 0-255, rounded).
pub fn rgb_to_hsb(r: u8, g: u8, b: u8) -> Hsb {
    let (h, s, v) = hsv_components(r, g, b);
    Hsb::new(
        (h * 255.0).round() as f32,
        (s * 255.0).round() as f32,
        (v * 255.0).round() as f32,
    )
}

/// Convert HSB (0-255 scale) to RGB (0-255, rounded).
///
/// A hue of exactly 255 wraps to 0 so the red sector is continuous.
pub fn hsb_to_rgb(hsb: Hsb) -> Rgb {
    let hue = hsb.h as f64;
    let sat = hsb.s as f64;
    let bright = hsb.b as f64;

    let (red, green, blue) = if sat == 0.0 {
        let level = bright / 255.0;
        (level, level, level)
    } else {
        let sat_val = sat / 255.0;
        let bright_val = bright / 255.0;

        let mut var_h = hue / 255.0 * 6.0;
        if var_h == 6.0 {
            var_h = 0.0;
        }
        let var_i = var_h.floor();
        let var_1 = bright_val * (1.0 - sat_val);
        let var_2 = bright_val * (1.0 - sat_val * (var_h - var_i));
        let var_3 = bright_val * (1.0 - sat_val * (1.0 - var_h + var_i));

        match var_i as i32 {
            0 => (bright_val, var_3, var_1),
            1 => (var_2, bright_val, var_1),
            2 => (var_1, bright_val, var_3),
            3 => (var_1, var_2, bright_val),
            4 => (var_3, var_1, bright_val),
            _ => (bright_val, var_1, var_2),
        }
    };

    Rgb::new(
        (red * 255.0).round() as i32,
        (green * 255.0).round() as i32,
        (blue * 255.0).round() as i32,
    )
}

/// Convert RGB (0-255) to CIE XYZ.
///
/// Each channel's sRGB linearization is premultiplied with the matrix row
/// constants, so the conversion is three sums of three table entries.
pub fn rgb_to_xyz(r: u8, g: u8, b: u8) -> Xyz {
    let t = &*TABLES;
    let (r, g, b) = (r as usize, g as usize, b as usize);
    Xyz::new(
        t.red_x[r] + t.green_x[g] + t.blue_x[b],
        t.red_y[r] + t.green_y[g] + t.blue_y[b],
        t.red_z[r] + t.green_z[g] + t.blue_z[b],
    )
}

/// Convert CIE XYZ to CIE Lab via the segment tables.
///
/// Each scaled channel's integer part selects a segment and the fractional
/// part interpolates; a = A(x) - A(y) and b = B(y) - B(z) mirror the CIE
/// definition's cross-channel differences.
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let t = &*TABLES;
    let ux = LAB_X_SCALE * xyz.x;
    let uy = LAB_Y_SCALE * xyz.y;
    let uz = LAB_Z_SCALE * xyz.z;

    Lab::new(
        t.lab_l.eval_floor(uy),
        t.lab_a.eval_floor(ux) - t.lab_a.eval_floor(uy),
        t.lab_b.eval_floor(uy) - t.lab_b.eval_floor(uz),
    )
}

/// Convert RGB (0-255) to CIE Lab.
pub fn rgb_to_lab(r: u8, g: u8, b: u8) -> Lab {
    xyz_to_lab(rgb_to_xyz(r, g, b))
}

/// Convert CIE XYZ to RGB.
///
/// The result is rounded but NOT clamped: out-of-gamut XYZ values produce
/// channels outside 0-255, which callers must handle.
pub fn xyz_to_rgb(xyz: Xyz) -> Rgb {
    let x = xyz.x / 100.0;
    let y = xyz.y / 100.0;
    let z = xyz.z / 100.0;

    let r = (x * 3.2406 - y * 1.5372 - z * 0.4986) as f64;
    let g = (-x * 0.9689 + y * 1.8758 + z * 0.0415) as f64;
    let b = (x * 0.0557 - y * 0.2040 + z * 1.0570) as f64;

    Rgb::new(
        (gamma_encode(r) * 255.0).round() as i32,
        (gamma_encode(g) * 255.0).round() as i32,
        (gamma_encode(b) * 255.0).round() as i32,
    )
}

/// Convert CIE Lab to CIE XYZ with the exact closed form.
pub fn lab_to_xyz(lab: Lab) -> Xyz {
    let x = (lab.l as f64 + 16.0) / 116.0;
    let y = lab.a as f64 / 500.0 + x;
    let z = x - lab.b as f64 / 200.0;

    Xyz::new(
        (95.047 * lab_inverse(y)) as f32,
        (100.0 * lab_inverse(x)) as f32,
        (108.883 * lab_inverse(z)) as f32,
    )
}

/// Quadrant index from a component's sign: 0 negative, 1 zero, 2 positive.
fn sign_index(v: f32) -> usize {
    if v > 0.0 {
        2
    } else if v < 0.0 {
        0
    } else {
        1
    }
}

/// Convert CIE Lab to CIE LCH.
///
/// Chroma and hue come from tables over the ratio of the smaller to the
/// larger of |a| and |b|; folding the ratio keeps the table input at most 1.
/// The quadrant tables then place the angle in 0-360. A chromaless input
/// (a = b = 0) returns C = 0 and H = 360 by convention.
pub fn lab_to_lch(lab: Lab) -> Lch {
    let t = &*TABLES;
    let am = lab.a.abs();
    let bm = lab.b.abs();
    let sa = sign_index(lab.a);
    let sb = sign_index(lab.b);

    if am == 0.0 && bm == 0.0 {
        return Lch::new(lab.l, 0.0, 360.0);
    }

    let (c, h) = if am > bm {
        let u = TRIG_SEGMENTS as f32 * bm / am;
        (
            am * t.root.eval_nearest(u),
            LCH_OFFSET[sa][sb] + LCH_SIGN[sa][sb] * t.arctan.eval_nearest(u),
        )
    } else {
        let u = TRIG_SEGMENTS as f32 * am / bm;
        (
            bm * t.root.eval_nearest(u),
            LCH_OFFSET[sa][sb] + LCH_SIGN[sa][sb] * t.arccot.eval_nearest(u),
        )
    };

    Lch::new(lab.l, c, h)
}

/// Convert CIE LCH to CIE Lab with the exact trigonometric inverse.
pub fn lch_to_lab(lch: Lch) -> Lab {
    let theta = lch.h as f64 * std::f64::consts::PI / 180.0;
    Lab::new(
        lch.l,
        (theta.cos() * lch.c as f64) as f32,
        (theta.sin() * lch.c as f64) as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_hsv_grey_invariant() {
        for k in [0u8, 1, 64, 127, 128, 200, 254, 255] {
            let hsv = rgb_to_hsv(k, k, k);
            assert_eq!(hsv.h, 0.0);
            assert_eq!(hsv.s, 0.0);
            assert!((hsv.v - k as f32 / 255.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_rgb_to_hsv_primaries() {
        let red = rgb_to_hsv(255, 0, 0);
        assert_eq!((red.h, red.s, red.v), (0.0, 1.0, 1.0));

        let green = rgb_to_hsv(0, 255, 0);
        assert!((green.h - 1.0 / 3.0).abs() < 1e-6);
        assert_eq!((green.s, green.v), (1.0, 1.0));

        let blue = rgb_to_hsv(0, 0, 255);
        assert!((blue.h - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!((blue.s, blue.v), (1.0, 1.0));
    }

    #[test]
    fn test_rgb_to_hsv_orange() {
        // (255, 128, 0) sits in the orange band: hue = 128/1530.
        let hsv = rgb_to_hsv(255, 128, 0);
        assert!((hsv.h - 128.0 / 1530.0).abs() < 1e-6);
        assert_eq!(hsv.s, 1.0);
        assert_eq!(hsv.v, 1.0);
    }

    #[test]
    fn test_rgb_to_hsb_whole_numbers() {
        let hsb = rgb_to_hsb(255, 0, 0);
        assert_eq!((hsb.h, hsb.s, hsb.b), (0.0, 255.0, 255.0));

        let hsb = rgb_to_hsb(0, 0, 255);
        assert_eq!((hsb.h, hsb.s, hsb.b), (170.0, 255.0, 255.0));
    }

    #[test]
    fn test_hsb_to_rgb_zero_saturation() {
        assert_eq!(hsb_to_rgb(Hsb::new(93.0, 0.0, 128.0)), Rgb::new(128, 128, 128));
        assert_eq!(hsb_to_rgb(Hsb::new(0.0, 0.0, 128.4)), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_hsb_hue_wrap() {
        // Hue 255 is the same angle as hue 0.
        let wrapped = hsb_to_rgb(Hsb::new(255.0, 255.0, 255.0));
        let zero = hsb_to_rgb(Hsb::new(0.0, 255.0, 255.0));
        assert_eq!(wrapped, zero);
        assert_eq!(zero, Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_rgb_to_xyz_white() {
        let xyz = rgb_to_xyz(255, 255, 255);
        assert!((xyz.x - 95.05).abs() < 0.01);
        assert!((xyz.y - 100.0).abs() < 0.01);
        assert!((xyz.z - 108.90).abs() < 0.01);
    }

    #[test]
    fn test_rgb_to_xyz_black() {
        let xyz = rgb_to_xyz(0, 0, 0);
        assert_eq!((xyz.x, xyz.y, xyz.z), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_xyz_round_trip_exact() {
        for (r, g, b) in [
            (0u8, 0u8, 0u8),
            (255, 255, 255),
            (255, 0, 0),
            (0, 255, 0),
            (0, 0, 255),
            (1, 1, 1),
            (128, 128, 128),
            (12, 200, 97),
            (254, 1, 127),
        ] {
            let rgb = xyz_to_rgb(rgb_to_xyz(r, g, b));
            assert_eq!(rgb, Rgb::new(r as i32, g as i32, b as i32));
        }
    }

    #[test]
    fn test_rgb_to_lab_white_and_black() {
        let white = rgb_to_lab(255, 255, 255);
        assert!((white.l - 100.0).abs() < 0.05);
        assert!(white.a.abs() < 0.05);
        assert!(white.b.abs() < 0.05);

        let black = rgb_to_lab(0, 0, 0);
        assert!(black.l.abs() < 0.05);
        assert!(black.a.abs() < 0.05);
        assert!(black.b.abs() < 0.05);
    }

    #[test]
    fn test_lab_to_lch_zero_chroma() {
        for l in [0.0f32, 25.0, 50.0, 100.0] {
            let lch = lab_to_lch(Lab::new(l, 0.0, 0.0));
            assert_eq!((lch.l, lch.c, lch.h), (l, 0.0, 360.0));
        }
    }

    #[test]
    fn test_lab_to_lch_quadrants() {
        // Equal |a| and |b| put the angle 45 degrees into each quadrant.
        let cases = [
            (10.0f32, 10.0f32, 45.0f32),
            (-10.0, 10.0, 135.0),
            (-10.0, -10.0, 225.0),
            (10.0, -10.0, 315.0),
        ];
        for (a, b, expected_h) in cases {
            let lch = lab_to_lch(Lab::new(50.0, a, b));
            assert!(
                (lch.h - expected_h).abs() < 0.05,
                "hue for a={a} b={b}: {}",
                lch.h
            );
            assert!((lch.c - 14.1421).abs() < 0.01);
            assert_eq!(lch.l, 50.0);
        }
    }

    #[test]
    fn test_lab_to_lch_axes() {
        // On-axis inputs exercise the zero rows of the quadrant tables.
        assert!((lab_to_lch(Lab::new(50.0, 10.0, 0.0)).h - 360.0).abs() < 1e-3);
        assert!((lab_to_lch(Lab::new(50.0, 0.0, 10.0)).h - 90.0).abs() < 1e-3);
        assert!((lab_to_lch(Lab::new(50.0, -10.0, 0.0)).h - 180.0).abs() < 1e-3);
        assert!((lab_to_lch(Lab::new(50.0, 0.0, -10.0)).h - 270.0).abs() < 1e-3);

        let lch = lab_to_lch(Lab::new(50.0, 10.0, 0.0));
        assert!((lch.c - 10.0).abs() < 0.01);
    }

    #[test]
    fn test_lch_round_trip() {
        for (a, b) in [(30.0f32, 40.0f32), (-25.0, 60.0), (-50.0, -50.0), (80.0, -15.0)] {
            let lab = Lab::new(50.0, a, b);
            let back = lch_to_lab(lab_to_lch(lab));
            assert!((back.a - a).abs() < 0.1, "a: {} vs {a}", back.a);
            assert!((back.b - b).abs() < 0.1, "b: {} vs {b}", back.b);
            assert_eq!(back.l, 50.0);
        }
    }

    #[test]
    fn test_lab_to_xyz_inverts_forward() {
        for (r, g, b) in [(200u8, 50u8, 50u8), (30, 90, 160), (250, 250, 10)] {
            let xyz = rgb_to_xyz(r, g, b);
            let back = lab_to_xyz(xyz_to_lab(xyz));
            assert!((back.x - xyz.x).abs() < 0.1);
            assert!((back.y - xyz.y).abs() < 0.1);
            assert!((back.z - xyz.z).abs() < 0.1);
        }
    }

    #[test]
    fn test_hsb_round_trip_within_one() {
        for (r, g, b) in [
            (255u8, 0u8, 0u8),
            (12, 200, 97),
            (128, 128, 130),
            (1, 2, 3),
            (250, 250, 250),
        ] {
            let rgb = hsb_to_rgb(rgb_to_hsb(r, g, b));
            assert!((rgb.r - r as i32).abs() <= 1);
            assert!((rgb.g - g as i32).abs() <= 1);
            assert!((rgb.b - b as i32).abs() <= 1);
        }
    }
}
