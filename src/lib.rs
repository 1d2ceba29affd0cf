pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod pattern;
pub mod record;
pub mod report;

use anyhow::{Context, Result};
use config::Config;
use extract::{Extraction, Extractor};
use fetch::DocumentSource;
use tracing::info;

/// Open `source` and extract every record from it. A fetch failure aborts
/// before any line is read.
pub fn collect_records(source: &dyn DocumentSource, extractor: &Extractor) -> Result<Extraction> {
    let origin = source.describe();
    let reader = source.open()?;
    let extraction = extractor
        .extract(reader)
        .with_context(|| format!("failed reading prime list from {}", origin))?;
    info!(
        source = %origin,
        records = extraction.records.len(),
        malformed = extraction.malformed,
        digit_anomalies = extraction.digit_anomalies,
        "prime list parsed"
    );
    Ok(extraction)
}

/// Fetch or open the listing described by `config` and extract it.
pub fn run(config: &Config) -> Result<Extraction> {
    let source = fetch::source_for(config);
    collect_records(source.as_ref(), &Extractor::from_config(config))
}
