use crate::utils::encode_pixel;
use snafu::{ResultExt, Snafu};
use std::io::Write;

#[derive(Debug, Snafu)]
pub enum EncodeError {
    WriteIo { source: std::io::Error },
}

/// Packs a decoded RGBA pixel sequence into raw ARGB2222 bytes, writing them
/// to `w`.
///
/// Produces the same byte sequence as
/// [`encode_to_vec`](crate::encode::encode_to_vec).
pub fn encode<W: Write>(pixels: &[[u8; 4]], mut w: W) -> Result<(), EncodeError> {
    let mut staging = [0u8; 256];

    for chunk in pixels.chunks(staging.len()) {
        for (slot, &pixel) in staging.iter_mut().zip(chunk) {
            *slot = encode_pixel(pixel);
        }
        w.write_all(&staging[..chunk.len()]).context(WriteIoSnafu)?;
    }

    Ok(())
}
