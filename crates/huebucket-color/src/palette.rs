//! Named palette colours
//!
//! The fixed packed-RGB constants the classifier paints with, plus the
//! [`Bucket`] enum naming every classifier output. GREEN, BLUE and
//! LIGHT_GREY are palette members without buckets of their own: the first
//! two are general-purpose constants, and LIGHT_GREY is the background
//! placeholder colour.

use huebucket_core::color::compose_rgb;

pub const RED: u32 = compose_rgb(255, 0, 0);
pub const GREEN: u32 = compose_rgb(0, 255, 0);
pub const BLUE: u32 = compose_rgb(0, 0, 255);
pub const BLACK: u32 = compose_rgb(0, 0, 0);
pub const WHITE: u32 = compose_rgb(255, 255, 255);
pub const GREY: u32 = compose_rgb(128, 128, 128);
pub const LIGHT_GREY: u32 = compose_rgb(192, 192, 192);
pub const ORANGE: u32 = compose_rgb(255, 119, 0);
pub const BROWN: u32 = compose_rgb(128, 60, 0);
pub const LIGHT_YELLOW: u32 = compose_rgb(242, 255, 0);
pub const DARK_YELLOW: u32 = compose_rgb(121, 128, 0);
pub const LIGHT_YELLOW_GREEN: u32 = compose_rgb(127, 255, 0);
pub const DARK_YELLOW_GREEN: u32 = compose_rgb(63, 128, 0);
pub const LIGHT_GREEN: u32 = compose_rgb(0, 255, 67);
pub const DARK_GREEN: u32 = compose_rgb(0, 128, 33);
pub const AQUA: u32 = compose_rgb(0, 255, 216);
pub const LIGHT_BLUE: u32 = compose_rgb(46, 0, 255);
pub const DARK_BLUE: u32 = compose_rgb(23, 0, 128);
pub const MAGENTA: u32 = compose_rgb(255, 0, 255);

/// One of the named colour classes the classifier can assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    White,
    Black,
    Grey,
    Red,
    Orange,
    Brown,
    LightYellow,
    DarkYellow,
    LightYellowGreen,
    DarkYellowGreen,
    LightGreen,
    DarkGreen,
    Aqua,
    LightBlue,
    DarkBlue,
    Magenta,
}

impl Bucket {
    /// Palette colour this bucket paints in full-colour mode.
    pub const fn color(self) -> u32 {
        match self {
            Bucket::White => WHITE,
            Bucket::Black => BLACK,
            Bucket::Grey => GREY,
            Bucket::Red => RED,
            Bucket::Orange => ORANGE,
            Bucket::Brown => BROWN,
            Bucket::LightYellow => LIGHT_YELLOW,
            Bucket::DarkYellow => DARK_YELLOW,
            Bucket::LightYellowGreen => LIGHT_YELLOW_GREEN,
            Bucket::DarkYellowGreen => DARK_YELLOW_GREEN,
            Bucket::LightGreen => LIGHT_GREEN,
            Bucket::DarkGreen => DARK_GREEN,
            Bucket::Aqua => AQUA,
            Bucket::LightBlue => LIGHT_BLUE,
            Bucket::DarkBlue => DARK_BLUE,
            Bucket::Magenta => MAGENTA,
        }
    }
}
