//! Flat-file persistence for the clothing catalog.
//!
//! The catalog lives in one CSV file with a header-first layout (columns
//! `category`, `name`, `color`, `temperature`, `style`, `weather`). Columns
//! are matched by name, so reordered or extra columns load fine, while a
//! header missing a required column fails the whole load. Records that fail
//! to decode are skipped and reported with their 1-based line numbers; adding
//! an item appends one row, creating the file and its header on first use.

use crate::catalog::model::{Catalog, Item};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Column names every catalog header must contain. New files are written with
/// the columns in this order.
pub const CATALOG_COLUMNS: [&str; 6] = [
    "category",
    "name",
    "color",
    "temperature",
    "style",
    "weather",
];

/// Handle on the catalog file backing a session.
///
/// The store never caches: `load` reads the file as it is on disk and
/// `append` writes through immediately, so a fresh process sees every item
/// added before it.
#[derive(Clone, Debug)]
pub struct CatalogStore {
    path: PathBuf,
}

/// Result of a catalog load: the usable items plus a report of the records
/// that were skipped as malformed.
#[derive(Debug)]
pub struct CatalogLoad {
    pub catalog: Catalog,
    pub skipped: Vec<MalformedRecord>,
}

/// One record that failed to decode during a load.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MalformedRecord {
    pub line: u64,
    pub reason: String,
}

/// Errors that make the catalog file unusable as a whole.
///
/// Individual bad records are not errors; they come back in
/// [`CatalogLoad::skipped`]. `Malformed` covers faults that poison the whole
/// file, such as a header missing a required column.
#[derive(Debug)]
pub enum CatalogError {
    Io(io::Error),
    Malformed { line: u64, reason: String },
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole catalog file into memory.
    ///
    /// Value parsing happens here and nowhere later: every returned item
    /// carries validated attribute enums. Records with unknown attribute
    /// values or the wrong field count are skipped and reported; an
    /// unreadable file or an unusable header fails the load outright.
    pub fn load(&self) -> Result<CatalogLoad, CatalogError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(hard_error)?;
        let headers = reader.headers().map_err(hard_error)?.clone();
        validate_header(&headers)?;

        let mut items = Vec::new();
        let mut skipped = Vec::new();
        for result in reader.deserialize::<Item>() {
            match result {
                Ok(item) => items.push(item),
                Err(err) if err.is_io_error() => return Err(hard_error(err)),
                Err(err) => skipped.push(malformed(err)),
            }
        }

        Ok(CatalogLoad {
            catalog: Catalog::from_items(items),
            skipped,
        })
    }

    /// Append one item to the catalog file, creating the file and writing the
    /// header row first when the file is new or empty.
    pub fn append(&self, item: &Item) -> Result<(), CatalogError> {
        let mut file = OpenOptions::new()
            .read(true)
            .create(true)
            .append(true)
            .open(&self.path)?;
        let len = file.metadata()?.len();
        if len > 0 && !ends_with_newline(&mut file)? {
            // Hand-edited files can lose their trailing newline; repair it so
            // the new record starts on its own line.
            file.write_all(b"\n")?;
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(len == 0)
            .from_writer(file);
        writer.serialize(item).map_err(hard_error)?;
        writer.flush()?;
        Ok(())
    }
}

fn validate_header(headers: &csv::StringRecord) -> Result<(), CatalogError> {
    for required in CATALOG_COLUMNS {
        if !headers.iter().any(|column| column == required) {
            return Err(CatalogError::Malformed {
                line: 1,
                reason: format!("header is missing the '{required}' column"),
            });
        }
    }
    Ok(())
}

/// Map a csv error that fails the whole operation.
fn hard_error(err: csv::Error) -> CatalogError {
    let line = err.position().map(|pos| pos.line()).unwrap_or(0);
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io_err) => CatalogError::Io(io_err),
        _ => CatalogError::Malformed { line, reason },
    }
}

/// Describe a per-record decode failure for the skip report.
fn malformed(err: csv::Error) -> MalformedRecord {
    let line = err.position().map(|pos| pos.line()).unwrap_or(0);
    let reason = match err.kind() {
        csv::ErrorKind::Deserialize { err: detail, .. } => detail.to_string(),
        csv::ErrorKind::UnequalLengths { expected_len, len, .. } => {
            format!("expected {expected_len} fields, found {len}")
        }
        _ => err.to_string(),
    };
    MalformedRecord { line, reason }
}

fn ends_with_newline(file: &mut File) -> io::Result<bool> {
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

impl fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "failed to access catalog file: {err}"),
            CatalogError::Malformed { line, reason } => {
                write!(f, "catalog line {line}: {reason}")
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            CatalogError::Malformed { .. } => None,
        }
    }
}

impl From<io::Error> for CatalogError {
    fn from(err: io::Error) -> Self {
        CatalogError::Io(err)
    }
}
