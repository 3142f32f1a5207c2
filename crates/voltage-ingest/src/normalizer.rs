//! Timestamp Parsing and Series Ordering

use crate::error::IngestError;
use crate::observation::{Observation, RawRow, VoltageSeries};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::debug;

/// Datetime layouts tried after RFC 3339, in order
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
];

/// Date-only layouts, interpreted as midnight
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse a timestamp cell into a naive datetime.
///
/// Offsets in RFC 3339 input are converted to UTC before the zone is dropped.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATE_FORMATS.iter().find_map(|fmt| {
                NaiveDate::parse_from_str(value, fmt)
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
        })
}

/// Parse every row's timestamp and return the rows as a series sorted by time.
///
/// Rows sharing a timestamp keep their input order. Fails on the first
/// unparseable timestamp; nothing is returned for a partially valid table.
pub fn sort_and_normalize(raw_rows: Vec<RawRow>) -> Result<VoltageSeries, IngestError> {
    if raw_rows.is_empty() {
        return Err(IngestError::Empty);
    }

    let mut observations = raw_rows
        .into_iter()
        .map(|raw| match parse_timestamp(&raw.timestamp) {
            Some(timestamp) => Ok(Observation::new(timestamp, raw.value)),
            None => Err(IngestError::Parse {
                row: raw.row,
                value: raw.timestamp,
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Stable: ties stay in upload order
    observations.sort_by_key(|o| o.timestamp);

    debug!(
        "Normalized {} observations spanning {} .. {}",
        observations.len(),
        observations[0].timestamp,
        observations[observations.len() - 1].timestamp
    );

    Ok(VoltageSeries::from_sorted(observations))
}
