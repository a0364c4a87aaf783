//! Record source.
//!
//! Reads the line-delimited record file into memory in one go. Either the
//! whole file is read or an error is returned; there is no partial load.

use std::io::{BufRead, ErrorKind};
use std::path::Path;

use crate::error::records::RecordsError;

/// Reads every line of `path` as one record.
///
/// Line terminators (`\n`, `\r\n`) are stripped and nothing else: leading or
/// trailing spaces stay part of the record and empty lines become empty
/// records.
///
/// # Arguments
///
/// * `path` - The UTF-8 record file.
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The records in file order.
/// * `Err(RecordsError)` - If the file is missing or unreadable.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<String>, RecordsError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => RecordsError::NotFound(path.to_path_buf()),
        _ => RecordsError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    read_records(std::io::BufReader::new(file)).map_err(|source| RecordsError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// UTF-8 byte order mark some editors put at the start of text files.
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Reads records from any buffered reader, one per line.
///
/// A leading byte order mark is dropped from the first record.
pub fn read_records<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut records = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
    if let Some(first) = records.first_mut() {
        if first.starts_with(BYTE_ORDER_MARK) {
            first.remove(0);
        }
    }
    Ok(records)
}
