//! geocode-cli
//! ===========
//!
//! Command-line front end for [`geocode_core`]. Reads `nations.json`,
//! looks every country up on Nominatim and writes `nations_geo.json`.
//!
//! Basic usage:
//!
//! ```text
//! geocode
//! geocode --input data/nations.json --output data/nations_geo.json --pretty
//! geocode --endpoint http://localhost:8080/search --log-level info
//! ```
//!
//! Names that could not be resolved are printed to stdout, one per line.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;
pub mod logging;

pub use args::{CliArgs, LogLevel};
pub use logging::init_logging;
