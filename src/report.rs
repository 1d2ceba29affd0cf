//! Summary and per-record listing output.

use crate::config::OutputFormat;
use crate::extract::Extraction;
use crate::record::Record;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct JsonReport<'a> {
    count: usize,
    malformed: usize,
    digit_anomalies: usize,
    rejected: usize,
    records: &'a [Record],
}

pub fn write_report<W: Write>(
    out: &mut W,
    extraction: &Extraction,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, extraction),
        OutputFormat::Json => write_json(out, extraction),
    }
}

/// `got N prime expressions`, then one `Prime: ...` line per record.
pub fn write_text<W: Write>(out: &mut W, extraction: &Extraction) -> Result<()> {
    writeln!(out, "got {} prime expressions", extraction.records.len())?;
    for record in &extraction.records {
        writeln!(out, "{}", record)?;
    }
    out.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, extraction: &Extraction) -> Result<()> {
    let report = JsonReport {
        count: extraction.records.len(),
        malformed: extraction.malformed,
        digit_anomalies: extraction.digit_anomalies,
        rejected: extraction.rejected,
        records: &extraction.records,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
