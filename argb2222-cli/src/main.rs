use argb2222::{convert::convert_to_vec, render::render_to_string, Platform};
use argh::FromArgs;
use image::ImageFormat;
use std::{fs::File, io::BufReader, str::FromStr};

/// File name the C array literal is written to, next to the raw output.
const HEADER_FILE: &str = "rbl_img.raw.h";
/// Symbol name of the emitted array.
const HEADER_SYMBOL: &str = "splash";

/// Converts an image to the raw 1-byte-per-pixel ARGB2222 format, plus a C
/// array literal for embedding the same bytes in firmware.
#[derive(FromArgs)]
struct Cli {
    /// input format override, optional (png, jpg, bmp)
    #[argh(option)]
    format: Option<Format>,

    /// the target platform (tintin, snowy, or chalk)
    #[argh(positional)]
    platform: Platform,
    /// the input image. If `--format` is not set, the format is guessed.
    #[argh(positional)]
    input: String,
    /// the output file for the raw bytes
    #[argh(positional)]
    output: String,
}

#[derive(Debug)]
enum Format {
    Png,
    Jpg,
    Bmp,
}

impl FromStr for Format {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        #[rustfmt::skip]
        let Some(format) = s.eq_ignore_ascii_case("png").then_some(Format::Png)
               .or_else(|| s.eq_ignore_ascii_case("jpg").then_some(Format::Jpg))
               .or_else(|| s.eq_ignore_ascii_case("bmp").then_some(Format::Bmp))
        else { return Err("invalid string"); };

        Ok(format)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Cli {
        format,
        platform,
        input,
        output,
    } = argh::from_env();

    let image = match format {
        Some(Format::Png) => {
            image::io::Reader::with_format(BufReader::new(File::open(&input)?), ImageFormat::Png)
                .decode()?
        }
        Some(Format::Jpg) => {
            image::io::Reader::with_format(BufReader::new(File::open(&input)?), ImageFormat::Jpeg)
                .decode()?
        }
        Some(Format::Bmp) => {
            image::io::Reader::with_format(BufReader::new(File::open(&input)?), ImageFormat::Bmp)
                .decode()?
        }
        None => image::io::Reader::open(input)?
            .with_guessed_format()?
            .decode()?,
    };

    let width = image.width();
    let height = image.height();

    println!("Converting {width}x{height} image for {platform}");

    // Fills in opaque alpha for sources without an alpha channel.
    let rgba_raw = image
        .into_rgba8()
        .pixels()
        .map(|p| p.0)
        .collect::<Vec<_>>();

    let mut packed = Vec::with_capacity(rgba_raw.len());
    convert_to_vec(platform, &rgba_raw, &mut packed)?;

    std::fs::write(&output, &packed)?;
    println!("Written {} bytes to `{output}`", packed.len());

    std::fs::write(HEADER_FILE, render_to_string(HEADER_SYMBOL, &packed))?;
    println!("Written array literal `{HEADER_SYMBOL}` to `{HEADER_FILE}`");

    Ok(())
}
