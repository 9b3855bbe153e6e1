// crates/geocode-core/src/loader.rs

//! # Record I/O
//!
//! Reads and writes the nations file. Handles the physical layer (files,
//! optional gzip) and leaves the record semantics to [`crate::model`].

use crate::config::OutputStyle;
use crate::error::{GeoError, Result};
use crate::model::CountryRecord;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

/// Loads the whole JSON array of country records into memory.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<CountryRecord>> {
    let path = path.as_ref();
    let reader = open_stream(path)?;
    let records: Vec<CountryRecord> = serde_json::from_reader(reader)?;
    debug!(path = %path.display(), count = records.len(), "loaded records");
    Ok(records)
}

/// Writes `records` to `path`.
///
/// The data goes to a `.tmp` sibling first and is renamed into place once
/// fully flushed, so a failure never leaves a truncated output behind.
pub fn write_records(
    path: impl AsRef<Path>,
    records: &[CountryRecord],
    style: OutputStyle,
) -> Result<()> {
    let path = path.as_ref();
    let tmp_path = tmp_path_for(path);

    let written = write_stream(path, &tmp_path, records, style)
        .and_then(|()| fs::rename(&tmp_path, path).map_err(GeoError::from));
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    debug!(path = %path.display(), count = records.len(), "wrote records");
    Ok(())
}

fn write_stream(
    target: &Path,
    tmp_path: &Path,
    records: &[CountryRecord],
    style: OutputStyle,
) -> Result<()> {
    let file = File::create(tmp_path)?;
    let mut writer = BufWriter::new(file);

    if is_gzip(target) {
        #[cfg(feature = "compact")]
        {
            let mut encoder = GzEncoder::new(writer, Compression::default());
            write_json(&mut encoder, records, style)?;
            encoder.finish()?.flush()?;
            return Ok(());
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(GeoError::InvalidData(
                "Gzip output requested but 'compact' disabled".into(),
            ));
        }
    }

    write_json(&mut writer, records, style)?;
    writer.flush()?;
    Ok(())
}

fn write_json<W: Write>(writer: W, records: &[CountryRecord], style: OutputStyle) -> Result<()> {
    match style {
        OutputStyle::Compact => serde_json::to_writer(writer, records)?,
        OutputStyle::Pretty => serde_json::to_writer_pretty(writer, records)?,
    }
    Ok(())
}

/// Opens a file, buffers it, and unwraps gzip when the name ends in `.gz`.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GeoError::NotFound(format!("Input not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(GeoError::InvalidData(
                "Gzip input given but 'compact' disabled".into(),
            ));
        }
    }

    Ok(Box::new(reader))
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
