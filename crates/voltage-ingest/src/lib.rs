//! Voltage Series Ingestion
//!
//! Reads uploaded CSV tables, parses timestamps, and produces the sorted
//! voltage series consumed by the feature engine.

mod error;
mod loader;
mod normalizer;
mod observation;

pub use error::IngestError;
pub use loader::{
    load_series, load_series_from_path, read_raw_rows, TIMESTAMP_COLUMN, VALUES_COLUMN,
};
pub use normalizer::{parse_timestamp, sort_and_normalize};
pub use observation::{Observation, RawRow, VoltageSeries};
