//! Append-only, semicolon-delimited CSV files.
//!
//! Both the session log and the raw activity log are written one row at a
//! time by a single writer. The header is emitted when the write position is
//! at the start of the file, so a pre-existing zero-byte file still gets one.

use anyhow::Result;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::{Seek, SeekFrom};
use std::path::Path;

pub const CSV_DELIMITER: u8 = b';';

/// Appends one serialized `record` to `path`, writing the header first if the file is empty.
///
/// Column names come from the record's serde field names.
pub fn append_record<T: Serialize>(path: &Path, record: &T) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let position = file.seek(SeekFrom::End(0))?;

    let mut wtr = csv::WriterBuilder::new()
        .delimiter(CSV_DELIMITER)
        .terminator(csv::Terminator::Any(b'\n'))
        .has_headers(position == 0)
        .from_writer(file);
    wtr.serialize(record)?;
    wtr.flush()?;
    Ok(())
}

/// Empties `path`, creating it if missing.
pub fn truncate(path: &Path) -> Result<()> {
    OpenOptions::new().create(true).write(true).truncate(true).open(path)?;
    Ok(())
}
