//! geocode — enrich a nations file with coordinates
//!
//! Reads a JSON array of country objects, asks Nominatim for each
//! country (`country=<name>`, then `q=<name>` when that finds nothing),
//! and writes the array back out with `lat`/`lon` attached.
//!
//! Usage examples
//! --------------
//!
//! - Fixed defaults (`nations.json` -> `nations_geo.json`)
//!   $ geocode
//!
//! - Custom files, readable output
//!   $ geocode -i nations.json.gz -o nations_geo.json --pretty
//!
//! - Against a local Nominatim with a request timeout
//!   $ geocode --endpoint http://localhost:8080/search --timeout-secs 30
//!
//! Countries that cannot be resolved are printed to stdout; logs go to
//! stderr. Any other failure aborts the run and no output file is written.
use anyhow::Context;
use clap::Parser;
use geocode_cli::{init_logging, CliArgs};
use geocode_core::NominatimFetcher;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.log_level);

    let config = args.to_config();
    let fetcher = NominatimFetcher::from_config(&config)
        .context("failed to build the HTTP client")?;

    let mut stdout = std::io::stdout().lock();
    let summary = geocode_core::run(&config, &fetcher, &mut stdout).with_context(|| {
        format!(
            "geocoding {} into {} failed",
            config.input.display(),
            config.output.display()
        )
    })?;

    tracing::info!(
        resolved = summary.resolved(),
        unresolved = summary.unresolved.len(),
        "done"
    );
    Ok(())
}
