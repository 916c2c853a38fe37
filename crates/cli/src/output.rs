// ABOUTME: Rendering of extracted records as JSON or CSV text.
// ABOUTME: JSON is an array of objects; CSV has one header row taken from the record fields.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

/// Renders `records` in `format`. The result always ends with a newline.
pub fn render<T: Serialize>(records: &[T], format: OutputFormat, compact: bool) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut out = if compact {
                serde_json::to_string(records)?
            } else {
                serde_json::to_string_pretty(records)?
            };
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(Vec::new());
            for record in records {
                wtr.serialize(record)?;
            }
            let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
            Ok(String::from_utf8(bytes)?)
        }
    }
}
