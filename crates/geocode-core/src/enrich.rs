// crates/geocode-core/src/enrich.rs

//! # Enricher
//!
//! For every record: ask for `country=<name>`, fall back to `q=<name>` when
//! that finds nothing, and attach the first candidate's coordinates. Names
//! that neither query resolves are written, one per line, to the
//! diagnostic sink.

use crate::error::{GeoError, Result};
use crate::fetch::{GeoFetcher, SearchQuery};
use crate::model::{CountryRecord, GeoPoint};
use std::io::Write;
use tracing::{info, warn};

/// Which query produced the coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuerySource {
    Primary,
    Fallback,
}

/// What happened to one record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Resolved { source: QuerySource, point: GeoPoint },
    Unresolved,
}

/// Tally of a full run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichSummary {
    pub total: usize,
    pub primary: usize,
    pub fallback: usize,
    /// Names neither query could resolve, in input order.
    pub unresolved: Vec<String>,
}

impl EnrichSummary {
    pub fn resolved(&self) -> usize {
        self.primary + self.fallback
    }

    fn record(&mut self, name: &str, outcome: &Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Resolved {
                source: QuerySource::Primary,
                ..
            } => self.primary += 1,
            Outcome::Resolved {
                source: QuerySource::Fallback,
                ..
            } => self.fallback += 1,
            Outcome::Unresolved => self.unresolved.push(name.to_string()),
        }
    }
}

/// Geocodes a single record in place.
///
/// Errors are returned untagged; [`enrich_all`] adds the record context.
pub fn enrich<F, W>(record: &mut CountryRecord, fetcher: &F, diagnostics: &mut W) -> Result<Outcome>
where
    F: GeoFetcher + ?Sized,
    W: Write + ?Sized,
{
    if record.name.trim().is_empty() {
        return Err(GeoError::EmptyName);
    }

    let mut source = QuerySource::Primary;
    let mut candidates = fetcher.search(&SearchQuery::Country(record.name.clone()))?;

    if candidates.is_empty() {
        source = QuerySource::Fallback;
        candidates = fetcher.search(&SearchQuery::FreeText(record.name.clone()))?;
    }

    let Some(first) = candidates.first() else {
        warn!(country = %record.name, "no geocoding candidates");
        writeln!(diagnostics, "{}", record.name)?;
        return Ok(Outcome::Unresolved);
    };

    let point = first.point()?;
    record.set_point(point);
    info!(
        country = %record.name,
        lat = point.lat,
        lon = point.lon,
        ?source,
        matched = first.display_name.as_deref().unwrap_or(""),
        "resolved"
    );

    Ok(Outcome::Resolved { source, point })
}

/// Geocodes every record, in order, one request at a time.
///
/// All names are checked before the first request goes out. The first
/// failure stops the run and comes back as [`GeoError::Lookup`].
pub fn enrich_all<F, W>(
    records: &mut [CountryRecord],
    fetcher: &F,
    diagnostics: &mut W,
) -> Result<EnrichSummary>
where
    F: GeoFetcher + ?Sized,
    W: Write + ?Sized,
{
    if let Some(index) = records.iter().position(|r| r.name.trim().is_empty()) {
        return Err(GeoError::lookup(index, &records[index].name, GeoError::EmptyName));
    }

    let mut summary = EnrichSummary::default();
    for (index, record) in records.iter_mut().enumerate() {
        let outcome = enrich(record, fetcher, diagnostics)
            .map_err(|e| GeoError::lookup(index, &record.name, e))?;
        summary.record(&record.name, &outcome);
    }

    info!(
        total = summary.total,
        primary = summary.primary,
        fallback = summary.fallback,
        unresolved = summary.unresolved.len(),
        "enrichment finished"
    );
    Ok(summary)
}
