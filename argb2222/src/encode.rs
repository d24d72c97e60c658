use crate::utils::encode_pixel;
use alloc::vec::Vec;

#[cfg(feature = "std")]
mod std_api;
#[cfg(feature = "std")]
pub use std_api::*;

/// Packs a decoded RGBA pixel sequence into raw ARGB2222 bytes, appending
/// them to `w`.
///
/// Emits exactly one byte per input pixel, in input order.
pub fn encode_to_vec(pixels: &[[u8; 4]], w: &mut Vec<u8>) {
    w.reserve(pixels.len());
    w.extend(pixels.iter().map(|&pixel| encode_pixel(pixel)));
}
