// crates/geocode-core/src/lib.rs

//! # geocode-core
//!
//! Adds `lat`/`lon` to a list of country records by asking a Nominatim
//! geocoding service, one country at a time.
//!
//! The flow is `load -> enrich_all -> write`. The fetch step is a trait
//! ([`GeoFetcher`]) so the pipeline can run against a stub in tests and
//! against [`NominatimFetcher`] (feature `http`) for real.
//!
//! ```rust
//! use geocode_core::{enrich_all, Candidate, CountryRecord, SearchQuery};
//!
//! let mut records = vec![CountryRecord::new("Wakanda")];
//! let fetch = |q: &SearchQuery| -> geocode_core::Result<Vec<Candidate>> {
//!     Ok(match q {
//!         SearchQuery::Country(_) => vec![],
//!         SearchQuery::FreeText(_) => vec![Candidate::new("1.5", "2.5")],
//!     })
//! };
//!
//! let mut unresolved = Vec::<u8>::new();
//! let summary = enrich_all(&mut records, &fetch, &mut unresolved).unwrap();
//!
//! assert_eq!(summary.fallback, 1);
//! assert_eq!(records[0].lat(), Some(1.5));
//! assert_eq!(records[0].lon(), Some(2.5));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod enrich;
pub mod error;
pub mod fetch;
pub mod loader;
pub mod model;
pub mod pipeline;

// Re-exports
pub use crate::config::{EnrichConfig, OutputStyle};
pub use crate::enrich::{enrich, enrich_all, EnrichSummary, Outcome, QuerySource};
pub use crate::error::{GeoError, Result};
pub use crate::fetch::{GeoFetcher, SearchQuery};
#[cfg(feature = "http")]
pub use crate::fetch::NominatimFetcher;
pub use crate::loader::{load_records, write_records};
pub use crate::model::{Candidate, CountryRecord, GeoPoint};
pub use crate::pipeline::run;
