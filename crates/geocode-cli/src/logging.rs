//! Logging initialization.

use crate::args::LogLevel;
use tracing::Level;
use tracing_subscriber::fmt;

/// Installs the global fmt subscriber.
///
/// Logs are written to stderr so stdout only carries the names of
/// countries that could not be geocoded.
pub fn init_logging(level: LogLevel) {
    let level: Level = level.into();

    fmt::Subscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
