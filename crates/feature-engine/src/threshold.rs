//! Low Voltage Filtering

use voltage_ingest::Observation;

/// Readings strictly below this voltage are reported
pub const LOW_VOLTAGE_THRESHOLD: f64 = 20.0;

/// Rows whose voltage is strictly below `threshold`, in series order
pub fn filter_below_threshold(series: &[Observation], threshold: f64) -> Vec<Observation> {
    series
        .iter()
        .filter(|o| o.voltage < threshold)
        .copied()
        .collect()
}
