use serde::Serialize;
use tupper_engine_edit::PixelMatrix;

use crate::{CliResult, Options};

#[derive(Serialize)]
struct Report<'a> {
    k: &'a str,
    binary: &'a str,
    pixels: &'a PixelMatrix,
}

/// Render a grid with its `k` and quotient binary, as text or pretty JSON
pub fn render(k: &str, binary: &str, pixels: &PixelMatrix, options: &Options, json: bool) -> CliResult<String> {
    if json {
        let mut out = serde_json::to_string_pretty(&Report { k, binary, pixels })?;
        out.push('\n');
        return Ok(out);
    }
    let mut out = pixels.to_text(options.on_char, options.off_char);
    out.push_str(&format!("k = {k}\n"));
    Ok(out)
}
