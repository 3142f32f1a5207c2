//! Trailing Moving Average

use voltage_ingest::Observation;

/// Window used for the trend line
pub const MOVING_AVERAGE_WINDOW: usize = 5;

/// Trailing moving average of the voltage column.
///
/// Output `i` is the mean of voltages in `[max(0, i + 1 - window), i]`, so the
/// first `window - 1` points average over whatever history exists instead of
/// being undefined. The output has the same length as the input.
pub fn moving_average(series: &[Observation], window: usize) -> Vec<f64> {
    assert!(window > 0, "Window size must be > 0");

    (0..series.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            let span = &series[start..=i];
            span.iter().map(|o| o.voltage).sum::<f64>() / span.len() as f64
        })
        .collect()
}
