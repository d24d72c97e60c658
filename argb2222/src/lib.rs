//! Reference implementation for the packed ARGB2222 image format.
//!
//! ARGB2222 is the native framebuffer format of Pebble-class smartwatch
//! displays: one byte per pixel, two bits per channel, alpha in the top bits.
//!
//! # Pixel layout
//!
//! ```plain
//! .- ARGB2222 pixel --------.
//! |         Byte[0]         |
//! |  7  6  5  4  3  2  1  0 |
//! |-------+-----+-----+-----|
//! |   a   |  r  |  g  |  b  |
//! `-------------------------`
//! ```
//!
//! # Quantized levels
//!
//! Each 8-bit source channel is first quantized to one of four representative
//! levels: `0x00`, `0x55`, `0xAA`, `0xFF` (see [`utils::quantize_channel`]).
//! A level stays a full 8-bit value rather than being reduced to its 2-bit
//! rank: the packer masks the level directly with the field masks from
//! [`consts`], so the 2-bit field that lands in the packed byte is whatever
//! sub-pattern the level carries at that bit position
//! (`0x55 & 0xC0 == 0x40`). Consumers of the raw format depend on exactly
//! this mask-and-OR arithmetic, so it must not be replaced with rank
//! shifting.
//!
//! # Raw stream format
//!
//! A raw image is a headerless byte sequence, one packed byte per pixel, in
//! decoder order (row-major, left-to-right, top-to-bottom). The [`render`]
//! module additionally emits the same bytes as a C array literal for static
//! embedding in firmware sources.
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "alloc")]
pub mod convert;
#[cfg(feature = "alloc")]
pub mod encode;
#[cfg(feature = "alloc")]
pub mod render;

pub mod utils;

use core::{fmt, str::FromStr};
use snafu::Snafu;

/// Target display platform.
///
/// The platform selects the pixel-count bound input images are validated
/// against, and gates conversion for displays the packer cannot serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Original monochrome watch, 144x168. Recognized, but conversion is not
    /// implemented for its 1-bit framebuffer.
    Tintin,
    /// Rectangular color watch, 144x168.
    Snowy,
    /// Round color watch, 180x180.
    Chalk,
}

impl Platform {
    /// Display dimensions in pixels, `(width, height)`.
    pub const fn display_size(self) -> (usize, usize) {
        match self {
            Platform::Tintin | Platform::Snowy => (144, 168),
            Platform::Chalk => (180, 180),
        }
    }

    /// Largest pixel count the platform's framebuffer holds.
    pub const fn max_pixel_count(self) -> usize {
        let (width, height) = self.display_size();
        width * height
    }

    /// Whether conversion for this platform is implemented.
    ///
    /// Tintin needs a 1-bit packing routine that doesn't exist yet.
    pub const fn is_supported(self) -> bool {
        !matches!(self, Platform::Tintin)
    }

    /// The fixed identifier the platform is selected by.
    pub const fn tag(self) -> &'static str {
        match self {
            Platform::Tintin => "tintin",
            Platform::Snowy => "snowy",
            Platform::Chalk => "chalk",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Snafu)]
#[snafu(display("unknown platform, expected `tintin`, `snowy`, or `chalk`"))]
pub struct UnknownPlatformError;

impl FromStr for Platform {
    type Err = UnknownPlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tintin" => Ok(Platform::Tintin),
            "snowy" => Ok(Platform::Snowy),
            "chalk" => Ok(Platform::Chalk),
            _ => Err(UnknownPlatformError),
        }
    }
}

pub mod consts {
    /// The four representative channel levels, in rank order.
    ///
    /// Every aligned 2-bit field of a level equals the level's rank
    /// (`0xAA == 0b10_10_10_10`), so masking a level with a field mask
    /// deposits its rank into that field of the packed byte.
    pub const LEVELS: [u8; 4] = [0x00, 0x55, 0xAA, 0xFF];

    /// Selects the alpha field of a packed pixel (bits 7-6).
    pub const ALPHA_MASK: u8 = 0b1100_0000;

    /// Selects the red field of a packed pixel (bits 5-4).
    pub const RED_MASK: u8 = 0b0011_0000;

    /// Selects the green field of a packed pixel (bits 3-2).
    pub const GREEN_MASK: u8 = 0b0000_1100;

    /// Selects the blue field of a packed pixel (bits 1-0).
    pub const BLUE_MASK: u8 = 0b0000_0011;
}
