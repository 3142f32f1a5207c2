//! CSV Loading

use crate::error::IngestError;
use crate::normalizer::sort_and_normalize;
use crate::observation::{RawRow, VoltageSeries};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

/// Header of the timestamp column
pub const TIMESTAMP_COLUMN: &str = "Timestamp";
/// Header of the raw reading column (renamed to voltage on load)
pub const VALUES_COLUMN: &str = "Values";

/// Read the `Timestamp` and `Values` columns of a CSV table.
///
/// Other columns are ignored. Timestamps are left unparsed.
pub fn read_raw_rows<R: Read>(reader: R) -> Result<Vec<RawRow>, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let timestamp_idx = column_index(&headers, TIMESTAMP_COLUMN)?;
    let values_idx = column_index(&headers, VALUES_COLUMN)?;

    let mut rows = Vec::new();
    for (i, record) in csv_reader.records().enumerate() {
        let record = record?;
        let row = i + 1;

        let timestamp = record.get(timestamp_idx).ok_or_else(|| IngestError::MalformedInput {
            column: TIMESTAMP_COLUMN,
            row: Some(row),
            reason: "cell missing".to_string(),
        })?;
        let raw_value = record.get(values_idx).ok_or_else(|| IngestError::MalformedInput {
            column: VALUES_COLUMN,
            row: Some(row),
            reason: "cell missing".to_string(),
        })?;
        let value = raw_value
            .parse::<f64>()
            .map_err(|e| IngestError::MalformedInput {
                column: VALUES_COLUMN,
                row: Some(row),
                reason: format!("{raw_value:?} is not a number ({e})"),
            })?;

        rows.push(RawRow::new(row, timestamp, value));
    }

    Ok(rows)
}

/// Read a CSV table and return its sorted voltage series
pub fn load_series<R: Read>(reader: R) -> Result<VoltageSeries, IngestError> {
    let rows = read_raw_rows(reader)?;
    let series = sort_and_normalize(rows)?;
    info!("Loaded voltage series with {} observations", series.len());
    Ok(series)
}

/// Read a CSV file from disk and return its sorted voltage series
pub fn load_series_from_path<P: AsRef<Path>>(path: P) -> Result<VoltageSeries, IngestError> {
    let file = File::open(path.as_ref())?;
    load_series(BufReader::new(file))
}

fn column_index(headers: &csv::StringRecord, column: &'static str) -> Result<usize, IngestError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| IngestError::MalformedInput {
            column,
            row: None,
            reason: "column not found".to_string(),
        })
}
