use crate::{encode, Platform};
use alloc::vec::Vec;
use snafu::{ensure, Snafu};

#[derive(Debug, Snafu)]
pub enum ConvertError {
    #[snafu(display(
        "image has {pixel_count} pixels, but {platform} fits at most {max_pixels}"
    ))]
    ImageTooLarge {
        pixel_count: usize,
        max_pixels: usize,
        platform: Platform,
    },
    #[snafu(display("platform {platform} is not implemented yet"))]
    UnsupportedPlatform { platform: Platform },
}

/// Validates a decoded RGBA pixel sequence against `platform` and appends
/// the packed ARGB2222 bytes to `w`.
///
/// The pixel count is checked against the platform bound before the
/// unsupported-platform gate. Nothing is written on failure.
pub fn convert_to_vec(
    platform: Platform,
    pixels: &[[u8; 4]],
    w: &mut Vec<u8>,
) -> Result<(), ConvertError> {
    let max_pixels = platform.max_pixel_count();
    ensure!(
        pixels.len() <= max_pixels,
        ImageTooLargeSnafu {
            pixel_count: pixels.len(),
            max_pixels,
            platform
        }
    );
    ensure!(platform.is_supported(), UnsupportedPlatformSnafu { platform });

    encode::encode_to_vec(pixels, w);

    Ok(())
}
