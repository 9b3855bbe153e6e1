// crates/geocode-core/src/fetch.rs

//! # Fetch Capability
//!
//! The enricher never talks to the network directly. It asks a
//! [`GeoFetcher`] for candidates, which is either the live
//! [`NominatimFetcher`] or, in tests, a plain closure.

use crate::error::Result;
use crate::model::Candidate;
use std::fmt;

/// The two query shapes the enricher issues for a country.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SearchQuery {
    /// Structured search: `country=<name>`.
    Country(String),
    /// Free-text search: `q=<name>`. Used as the fallback.
    FreeText(String),
}

impl SearchQuery {
    pub fn name(&self) -> &str {
        match self {
            SearchQuery::Country(name) | SearchQuery::FreeText(name) => name,
        }
    }

    /// The query-string parameter this shape filters on.
    pub fn param(&self) -> &'static str {
        match self {
            SearchQuery::Country(_) => "country",
            SearchQuery::FreeText(_) => "q",
        }
    }

    /// Renders `format=json&<param>=<name>` with the name percent-encoded
    /// (spaces become `%20`).
    pub fn to_query_string(&self) -> String {
        format!(
            "format=json&{}={}",
            self.param(),
            urlencoding::encode(self.name())
        )
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.param(), self.name())
    }
}

/// Source of geocoding candidates.
///
/// An empty vector means "no match"; transport or decoding problems are
/// errors and abort the run.
pub trait GeoFetcher {
    fn search(&self, query: &SearchQuery) -> Result<Vec<Candidate>>;
}

impl<F> GeoFetcher for F
where
    F: Fn(&SearchQuery) -> Result<Vec<Candidate>>,
{
    fn search(&self, query: &SearchQuery) -> Result<Vec<Candidate>> {
        self(query)
    }
}

#[cfg(feature = "http")]
mod nominatim {
    use super::{GeoFetcher, SearchQuery};
    use crate::config::EnrichConfig;
    use crate::error::{GeoError, Result};
    use crate::model::Candidate;
    use reqwest::blocking::Client;
    use std::time::Duration;
    use tracing::debug;

    /// Blocking client for a Nominatim `/search` endpoint.
    #[derive(Debug, Clone)]
    pub struct NominatimFetcher {
        client: Client,
        endpoint: String,
    }

    impl NominatimFetcher {
        /// `timeout = None` lets a request wait forever.
        pub fn new(endpoint: &str, user_agent: &str, timeout: Option<Duration>) -> Result<Self> {
            let client = Client::builder()
                .user_agent(user_agent)
                .timeout(timeout)
                .build()?;

            Ok(Self {
                client,
                endpoint: endpoint.trim_end_matches(|c: char| c == '?' || c == '/').to_string(),
            })
        }

        pub fn from_config(config: &EnrichConfig) -> Result<Self> {
            Self::new(&config.endpoint, &config.user_agent, config.timeout)
        }

        pub fn endpoint(&self) -> &str {
            &self.endpoint
        }

        pub fn url_for(&self, query: &SearchQuery) -> String {
            format!("{}?{}", self.endpoint, query.to_query_string())
        }
    }

    impl GeoFetcher for NominatimFetcher {
        fn search(&self, query: &SearchQuery) -> Result<Vec<Candidate>> {
            let url = self.url_for(query);
            debug!(%url, "geocoder request");

            let response = self.client.get(&url).send()?;
            let status = response.status();
            if !status.is_success() {
                return Err(GeoError::Status {
                    status: status.as_u16(),
                    url,
                });
            }

            let body = response.text()?;
            let candidates: Vec<Candidate> = serde_json::from_str(&body)?;
            debug!(query = %query, hits = candidates.len(), "geocoder response");
            Ok(candidates)
        }
    }
}

#[cfg(feature = "http")]
pub use nominatim::NominatimFetcher;
