//! Ingestion Error Types

use thiserror::Error;

/// Errors while turning an uploaded table into a voltage series
#[derive(Debug, Error)]
pub enum IngestError {
    /// Timestamp cell could not be parsed into a datetime
    #[error("Unparseable timestamp {value:?} in data row {row}")]
    Parse { row: usize, value: String },

    /// The table contained no data rows
    #[error("Input contains no data rows")]
    Empty,

    /// Required column missing or a cell of the wrong type
    #[error("Malformed input in column {column:?}{}: {reason}", row_suffix(.row))]
    MalformedInput {
        column: &'static str,
        row: Option<usize>,
        reason: String,
    },

    /// CSV framing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error reading the input file
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

impl IngestError {
    /// Short machine-readable name for the error class
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "parse_error",
            Self::Empty => "empty_input",
            Self::MalformedInput { .. } => "malformed_input",
            Self::Csv(_) => "csv",
            Self::Io(_) => "io",
        }
    }
}

fn row_suffix(row: &Option<usize>) -> String {
    row.map(|r| format!(" at data row {r}")).unwrap_or_default()
}
