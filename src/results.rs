//! Meet CSV parsing.
//!
//! A meet CSV is a header row followed by one data row per runner. The
//! table is kept verbatim — headers and cells exactly as written — because
//! the team-results table renders every column the file has, whatever its
//! shape. Only the individual-results cards impose structure, and they do
//! it by header name rather than by position: the `Name`, `Place`, `Time`
//! and `Grade` columns are resolved through the header row
//! (case-insensitively), so extra columns and reordered columns are fine.
//! A file that lacks one of those headers, or a row too short to reach a
//! resolved column, fails with an error naming the file and row.

use csv::ReaderBuilder;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResultsError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{}: header row {:?} has no '{}' column", .path.display(), .headers, .column)]
    MissingColumn {
        path: PathBuf,
        column: &'static str,
        headers: Vec<String>,
    },
    #[error(
        "{}: data row {} has {} cells, too short for the '{}' column",
        .path.display(), .row, .cells, .column
    )]
    ShortRow {
        path: PathBuf,
        row: usize,
        cells: usize,
        column: &'static str,
    },
}

impl ResultsError {
    fn read(path: &Path, source: csv::Error) -> Self {
        ResultsError::Read {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// The columns every meet CSV must carry for the individual-results cards.
pub const RESULT_COLUMNS: [&str; 4] = ["Name", "Place", "Time", "Grade"];

/// Parsed body of one meet CSV: verbatim headers plus data rows.
///
/// Rows may be ragged — shorter or longer than the header row. The
/// team-results table renders them as-is; [`ResultTable::individual_results`]
/// is where a short row becomes an error.
#[derive(Debug)]
pub struct ResultTable {
    /// Source file, carried for error reporting.
    pub path: PathBuf,
    /// First row of the file, verbatim.
    pub headers: Vec<String>,
    /// Every subsequent row, cells verbatim.
    pub rows: Vec<Vec<String>>,
}

/// One runner's row, resolved into named fields.
#[derive(Debug, Clone, PartialEq)]
pub struct IndividualResult {
    pub name: String,
    pub place: String,
    pub time: String,
    pub grade: String,
}

impl ResultTable {
    /// Read and parse a meet CSV.
    pub fn load(path: &Path) -> Result<ResultTable, ResultsError> {
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|e| ResultsError::read(path, e))?;

        let headers = reader
            .headers()
            .map_err(|e| ResultsError::read(path, e))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| ResultsError::read(path, e))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(ResultTable {
            path: path.to_path_buf(),
            headers,
            rows,
        })
    }

    /// Index of a column by header name, case-insensitive, ignoring
    /// surrounding whitespace.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
    }

    /// Resolve every data row into an [`IndividualResult`].
    ///
    /// Fails if any of the [`RESULT_COLUMNS`] is absent from the header
    /// row, or if a data row is too short to cover a resolved column. Row
    /// numbers in errors are 1-based over the data rows (the header row is
    /// not counted).
    pub fn individual_results(&self) -> Result<Vec<IndividualResult>, ResultsError> {
        let mut indices = [0usize; 4];
        for (slot, column) in indices.iter_mut().zip(RESULT_COLUMNS) {
            *slot = self
                .column(column)
                .ok_or_else(|| ResultsError::MissingColumn {
                    path: self.path.clone(),
                    column,
                    headers: self.headers.clone(),
                })?;
        }
        let [name, place, time, grade] = indices;

        let mut results = Vec::with_capacity(self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            let cell = |idx: usize, column: &'static str| {
                row.get(idx).cloned().ok_or_else(|| ResultsError::ShortRow {
                    path: self.path.clone(),
                    row: i + 1,
                    cells: row.len(),
                    column,
                })
            };
            results.push(IndividualResult {
                name: cell(name, "Name")?,
                place: cell(place, "Place")?,
                time: cell(time, "Time")?,
                grade: cell(grade, "Grade")?,
            });
        }
        Ok(results)
    }
}
