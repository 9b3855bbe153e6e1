// crates/geocode-core/src/config.rs
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_INPUT: &str = "nations.json";
pub const DEFAULT_OUTPUT: &str = "nations_geo.json";
pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_USER_AGENT: &str = concat!("geocode-core/", env!("CARGO_PKG_VERSION"));

/// How the output array is laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// Single line, no whitespace.
    #[default]
    Compact,
    /// Two-space indented.
    Pretty,
}

/// Settings for one enrichment run.
///
/// `Default` reads `nations.json`, writes `nations_geo.json`, asks the
/// public Nominatim instance and never times out.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub endpoint: String,
    pub user_agent: String,
    pub timeout: Option<Duration>,
    pub style: OutputStyle,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            style: OutputStyle::Compact,
        }
    }
}
