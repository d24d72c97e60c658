use alloc::{format, string::String};
use itertools::Itertools;

#[cfg(feature = "std")]
mod std_api;
#[cfg(feature = "std")]
pub use std_api::*;

/// Number of array entries emitted per line.
pub const ENTRIES_PER_LINE: usize = 144;

/// Renders raw ARGB2222 bytes as a C array literal for static embedding in
/// firmware sources.
///
/// The declaration is `static const uint8_t <name>[] = {...};`. Every byte
/// is printed as zero-padded lowercase hex (`0x0f`), entries are separated
/// by `", "` with no comma after the last one, and a newline plus five
/// spaces of indentation precedes every [`ENTRIES_PER_LINE`]th entry,
/// including the first. Re-parsing the entries out of the literal yields the
/// input bytes exactly.
pub fn render_to_string(name: &str, data: &[u8]) -> String {
    let entries = data
        .chunks(ENTRIES_PER_LINE)
        .map(|line| {
            line.iter()
                .format_with(", ", |byte, f| f(&format_args!("{byte:#04x}")))
        })
        .format_with(", ", |line, f| f(&format_args!("\n     {line}")));

    format!("static const uint8_t {name}[] = {{{entries}}};\n")
}
