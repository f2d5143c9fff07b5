//! JSON output for the command-line boundary
//!
//! Every invocation prints exactly one line with the keys `formatted` and
//! `structured`, even when the scrape produced nothing.

use std::io::{self, Write};

use crate::record::ScrapeResult;

/// Serialize `result` as a single JSON line, substituting the unavailable
/// placeholder for a missing result.
pub fn render_line(result: Option<&ScrapeResult>) -> serde_json::Result<String> {
    match result {
        Some(result) => serde_json::to_string(result),
        None => serde_json::to_string(&ScrapeResult::unavailable()),
    }
}

/// Write the JSON line for `result` to `out`.
pub fn write_result<W: Write>(out: &mut W, result: Option<&ScrapeResult>) -> io::Result<()> {
    let line = render_line(result).map_err(io::Error::from)?;
    writeln!(out, "{}", line)?;
    out.flush()
}
