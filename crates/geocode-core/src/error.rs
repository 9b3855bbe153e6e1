// crates/geocode-core/src/error.rs
use thiserror::Error;

/// Everything that can stop an enrichment run.
///
/// An unresolved country is *not* an error; it is reported on the
/// diagnostic stream and the run continues.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("geocoder answered {status} for {url}")]
    Status { status: u16, url: String },

    #[error("candidate field `{field}` is not a number: {value:?}")]
    InvalidCoordinate { field: &'static str, value: String },

    #[error("record has an empty `name`")]
    EmptyName,

    /// A failure while processing one record, tagged with where it happened.
    #[error("lookup failed for record {index} ({country:?}): {source}")]
    Lookup {
        index: usize,
        country: String,
        #[source]
        source: Box<GeoError>,
    },
}

impl GeoError {
    pub(crate) fn lookup(index: usize, country: &str, source: GeoError) -> Self {
        GeoError::Lookup {
            index,
            country: country.to_string(),
            source: Box::new(source),
        }
    }

    /// The country whose lookup failed, if this error came from the enricher.
    pub fn country(&self) -> Option<&str> {
        match self {
            GeoError::Lookup { country, .. } => Some(country),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GeoError>;
