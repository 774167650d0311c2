//! JSON persistence for the flight list.
//!
//! Files are a JSON array of objects, one per record, written as UTF-8 with
//! non-ASCII text left unescaped and pretty-printed with a 4-space indent.
//! Loading accepts any layout, compact or pretty.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::record::Record;

/// Indentation used when writing flight files.
const INDENT: &[u8] = b"    ";

/// Save `records` to `path`, overwriting any existing file.
///
/// # Errors
///
/// Returns [`Error::FileWrite`] if the file cannot be created or written,
/// or [`Error::Json`] if serialization fails.
pub fn save(path: impl AsRef<Path>, records: &[Record]) -> Result<()> {
    let path = path.as_ref();
    debug!("Saving {} records to {}", records.len(), path.display());

    let file = File::create(path).map_err(|source| Error::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    write_records(&mut writer, records)?;
    writer.flush().map_err(|source| Error::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Saved {} records to {}", records.len(), path.display());
    Ok(())
}

/// Load records from `path`.
///
/// # Errors
///
/// Returns [`Error::FileRead`] if the file cannot be read, or
/// [`Error::Json`] if it is not a JSON array of objects.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    debug!("Loading records from {}", path.display());

    let file = File::open(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_records(file)?;

    info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Serialize `records` to `writer` in the flight file layout.
///
/// # Errors
///
/// Returns [`Error::Json`] if serialization or the underlying write fails.
pub fn write_records<W: Write>(writer: W, records: &[Record]) -> Result<()> {
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    records.serialize(&mut serializer)?;
    Ok(())
}

/// Parse records from `reader`.
///
/// # Errors
///
/// Returns [`Error::Json`] if the input is not a JSON array of objects.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<Record>> {
    let records = serde_json::from_reader(std::io::BufReader::new(reader))?;
    Ok(records)
}
