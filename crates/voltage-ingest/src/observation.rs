//! Voltage Observation Types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// One timestamped voltage reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub timestamp: NaiveDateTime,
    pub voltage: f64,
}

impl Observation {
    /// Create a new observation
    pub fn new(timestamp: NaiveDateTime, voltage: f64) -> Self {
        Self { timestamp, voltage }
    }
}

/// Unparsed row as read from the uploaded table
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    /// 1-based data row number (header excluded)
    pub row: usize,
    /// Timestamp cell, not yet parsed
    pub timestamp: String,
    /// Numeric `Values` cell
    pub value: f64,
}

impl RawRow {
    pub fn new(row: usize, timestamp: impl Into<String>, value: f64) -> Self {
        Self {
            row,
            timestamp: timestamp.into(),
            value,
        }
    }
}

/// Non-empty sequence of observations sorted ascending by timestamp.
///
/// Only built by [`crate::sort_and_normalize`], so every instance upholds the
/// ordering and non-emptiness invariants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct VoltageSeries {
    observations: Vec<Observation>,
}

impl VoltageSeries {
    pub(crate) fn from_sorted(observations: Vec<Observation>) -> Self {
        debug_assert!(!observations.is_empty());
        debug_assert!(observations
            .windows(2)
            .all(|w| w[0].timestamp <= w[1].timestamp));
        Self { observations }
    }

    /// Borrow the observations
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Voltage column in series order
    pub fn voltages(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.voltage).collect()
    }

    /// Consume the series and return the observations
    pub fn into_inner(self) -> Vec<Observation> {
        self.observations
    }
}

impl Deref for VoltageSeries {
    type Target = [Observation];

    fn deref(&self) -> &Self::Target {
        &self.observations
    }
}

impl AsRef<[Observation]> for VoltageSeries {
    fn as_ref(&self) -> &[Observation] {
        &self.observations
    }
}
