use clap::{Parser, ValueEnum};
use geocode_core::config::{DEFAULT_ENDPOINT, DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_USER_AGENT};
use geocode_core::{EnrichConfig, OutputStyle};
use std::path::PathBuf;
use std::time::Duration;

/// CLI arguments for geocode
#[derive(Debug, Parser)]
#[command(
    name = "geocode",
    version,
    about = "Adds lat/lon from Nominatim to every country in a nations JSON file"
)]
pub struct CliArgs {
    /// Input JSON array of country objects (a `.gz` suffix is gunzipped)
    #[arg(short = 'i', long = "input", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Where to write the enriched array (a `.gz` suffix is gzipped)
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Nominatim search endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// User-Agent sent with every request
    #[arg(long = "user-agent", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Per-request timeout in seconds (default: wait forever)
    #[arg(long = "timeout-secs")]
    pub timeout_secs: Option<u64>,

    /// Indent the output JSON
    #[arg(long)]
    pub pretty: bool,

    /// Log verbosity (logs go to stderr)
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

impl CliArgs {
    pub fn to_config(&self) -> EnrichConfig {
        EnrichConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            endpoint: self.endpoint.clone(),
            user_agent: self.user_agent.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
            style: if self.pretty {
                OutputStyle::Pretty
            } else {
                OutputStyle::Compact
            },
        }
    }
}
