use crate::render::render_to_string;
use snafu::{ResultExt, Snafu};
use std::io::Write;

#[derive(Debug, Snafu)]
pub enum RenderError {
    WriteIo { source: std::io::Error },
}

/// Renders raw ARGB2222 bytes as a C array literal, writing it to `w`.
///
/// Produces the same text as [`render_to_string`].
pub fn render<W: Write>(name: &str, data: &[u8], mut w: W) -> Result<(), RenderError> {
    w.write_all(render_to_string(name, data).as_bytes())
        .context(WriteIoSnafu)
}
