//! Report rendering.
//!
//! Text output shows paths normalized to a leading slash; JSON output keeps
//! records exactly as collected.

use std::fmt::Write;

use crate::config::OutputFormat;
use crate::routing::path::normalize;
use crate::routing::record::RouteRecord;

/// Render records in the requested format.
pub fn render(records: &[RouteRecord], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(records)),
        OutputFormat::Json => render_json(records),
    }
}

/// One block per route plus a summary line.
pub fn render_text(records: &[RouteRecord]) -> String {
    let mut out = String::new();

    for record in records {
        let schema = record
            .schema
            .as_ref()
            .map(|s| s.qualified_name())
            .unwrap_or_else(|| "None".to_string());

        let methods = if record.methods.is_empty() {
            "(none)".to_string()
        } else {
            record.methods.join(", ")
        };

        // Writing into a String cannot fail.
        let _ = writeln!(out, "{} {}", methods, normalize(&record.path));
        let _ = writeln!(out, "   -> {}", record.qualified_handler());
        let _ = writeln!(out, "   schema: {}", schema);
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "{} route{}",
        records.len(),
        if records.len() == 1 { "" } else { "s" }
    );
    out
}

pub fn render_json(records: &[RouteRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}
