//! Feature Report Assembly

use crate::curvature::{downward_acceleration_points, AccelerationPoint};
use crate::extrema::{detect_lows, detect_peaks};
use crate::smoothing::{moving_average, MOVING_AVERAGE_WINDOW};
use crate::threshold::{filter_below_threshold, LOW_VOLTAGE_THRESHOLD};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;
use voltage_ingest::{Observation, VoltageSeries};

/// One point of the trend chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub timestamp: NaiveDateTime,
    pub voltage: f64,
    pub moving_average: f64,
}

/// Every derived view of one uploaded series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureReport {
    /// Number of observations analysed
    pub row_count: usize,
    /// Moving average window used for the trend
    pub window: usize,
    /// Voltage threshold used for `below_threshold`
    pub threshold: f64,
    /// Voltage and moving average per observation
    pub trend: Vec<TrendPoint>,
    /// Peak positions in `trend`, for marker overlays
    pub peak_indices: Vec<usize>,
    /// Low positions in `trend`, for marker overlays
    pub low_indices: Vec<usize>,
    pub peaks: Vec<Observation>,
    pub lows: Vec<Observation>,
    pub below_threshold: Vec<Observation>,
    pub downward_acceleration: Vec<AccelerationPoint>,
}

/// Computes the trend, extrema, low-voltage, and curvature views of a series
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    window: usize,
    threshold: f64,
}

impl FeatureExtractor {
    /// Create an extractor using the standard window and threshold
    pub fn new() -> Self {
        Self {
            window: MOVING_AVERAGE_WINDOW,
            threshold: LOW_VOLTAGE_THRESHOLD,
        }
    }

    /// Run all views over the series
    pub fn extract(&self, series: &VoltageSeries) -> FeatureReport {
        let observations = series.observations();

        let averages = moving_average(observations, self.window);
        let trend = observations
            .iter()
            .zip(averages)
            .map(|(o, moving_average)| TrendPoint {
                timestamp: o.timestamp,
                voltage: o.voltage,
                moving_average,
            })
            .collect();

        let peak_indices = detect_peaks(observations);
        let low_indices = detect_lows(observations);
        let peaks = pick(observations, &peak_indices);
        let lows = pick(observations, &low_indices);
        let below_threshold = filter_below_threshold(observations, self.threshold);
        let downward_acceleration = downward_acceleration_points(observations);

        debug!(
            "Extracted features: rows={}, peaks={}, lows={}, below_threshold={}, downward_accel={}",
            observations.len(),
            peaks.len(),
            lows.len(),
            below_threshold.len(),
            downward_acceleration.len()
        );

        FeatureReport {
            row_count: observations.len(),
            window: self.window,
            threshold: self.threshold,
            trend,
            peak_indices,
            low_indices,
            peaks,
            lows,
            below_threshold,
            downward_acceleration,
        }
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn pick(observations: &[Observation], indices: &[usize]) -> Vec<Observation> {
    indices.iter().map(|&i| observations[i]).collect()
}
