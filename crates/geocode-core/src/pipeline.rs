// crates/geocode-core/src/pipeline.rs
use crate::config::EnrichConfig;
use crate::enrich::{enrich_all, EnrichSummary};
use crate::error::Result;
use crate::fetch::GeoFetcher;
use crate::loader::{load_records, write_records};
use std::io::Write;
use tracing::info;

/// Load, enrich, write.
///
/// The output file is only touched after every record went through, so
/// any error leaves no output behind.
pub fn run<F, W>(config: &EnrichConfig, fetcher: &F, diagnostics: &mut W) -> Result<EnrichSummary>
where
    F: GeoFetcher + ?Sized,
    W: Write + ?Sized,
{
    let mut records = load_records(&config.input)?;
    info!(input = %config.input.display(), count = records.len(), "geocoding countries");

    let summary = enrich_all(&mut records, fetcher, diagnostics)?;
    diagnostics.flush()?;

    write_records(&config.output, &records, config.style)?;
    info!(output = %config.output.display(), "wrote enriched countries");
    Ok(summary)
}
