//! Source table, its metadata, and the per-row view handed to the builder.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Metadata about the source data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the file was read.
    pub read_at: DateTime<Utc>,
}

impl SourceMetadata {
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            row_count,
            column_count,
            read_at: Utc::now(),
        }
    }
}

/// Parsed tabular data, rows kept in source order.
#[derive(Debug, Clone)]
pub struct DataTable {
    /// Column headers.
    pub headers: Vec<String>,
    /// Row data as strings (row-major order), padded to the header width.
    pub rows: Vec<Vec<String>>,
    /// The delimiter used.
    pub delimiter: u8,
    /// Cells each row held in the source, before padding.
    widths: Vec<usize>,
}

impl DataTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>, delimiter: u8) -> Self {
        let widths = rows.iter().map(|r| r.len()).collect();
        Self {
            headers,
            rows,
            delimiter,
            widths,
        }
    }

    /// Record how many cells each row had before it was padded or truncated.
    pub fn with_source_widths(mut self, widths: Vec<usize>) -> Self {
        debug_assert_eq!(widths.len(), self.rows.len());
        self.widths = widths;
        self
    }

    /// Cells row `index` held in the source.
    pub fn source_width(&self, index: usize) -> usize {
        self.widths.get(index).copied().unwrap_or(0)
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col).map(|s| s.as_str()))
    }

    /// Borrow one row as a header-keyed view.
    pub fn raw_row(&self, index: usize) -> Option<RawRow<'_>> {
        let row = self.rows.get(index)?;
        Some(RawRow::new(index, &self.headers, row))
    }

    /// Iterate all rows as header-keyed views, in source order.
    pub fn raw_rows(&self) -> impl Iterator<Item = RawRow<'_>> {
        self.rows
            .iter()
            .enumerate()
            .map(move |(i, row)| RawRow::new(i, &self.headers, row))
    }
}

/// One input row keyed by column name.
///
/// Lives only while its row is being built. When a header repeats, the first
/// occurrence wins.
#[derive(Debug, Clone)]
pub struct RawRow<'a> {
    /// 0-based data row index (header excluded).
    pub index: usize,
    cells: IndexMap<&'a str, &'a str>,
}

impl<'a> RawRow<'a> {
    pub fn new(index: usize, headers: &'a [String], row: &'a [String]) -> Self {
        let mut cells = IndexMap::with_capacity(headers.len());
        for (header, value) in headers.iter().zip(row.iter()) {
            cells.entry(header.as_str()).or_insert(value.as_str());
        }
        Self { index, cells }
    }

    /// Build a row from literal pairs. Mostly useful in tests.
    pub fn from_pairs(index: usize, pairs: &[(&'a str, &'a str)]) -> Self {
        let mut cells = IndexMap::with_capacity(pairs.len());
        for (header, value) in pairs {
            cells.entry(*header).or_insert(*value);
        }
        Self { index, cells }
    }

    /// Cell text for a column; absent columns read as empty.
    pub fn get(&self, column: &str) -> &'a str {
        self.cells.get(column).copied().unwrap_or("")
    }

    /// Whether the header row named this column at all.
    pub fn has_column(&self, column: &str) -> bool {
        self.cells.contains_key(column)
    }

    /// Column names in source order.
    pub fn columns(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.cells.keys().copied()
    }
}
