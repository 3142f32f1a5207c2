//! Local Peak and Low Detection

use voltage_ingest::Observation;

/// Indices of strict local maxima of the voltage column.
///
/// Index `i` qualifies when its voltage is greater than both immediate
/// neighbours. The first and last points never qualify, and flat tops are
/// not reported.
pub fn detect_peaks(series: &[Observation]) -> Vec<usize> {
    let voltages: Vec<f64> = series.iter().map(|o| o.voltage).collect();
    strict_local_maxima(&voltages)
}

/// Indices of strict local minima: the peak rule applied to negated voltages
pub fn detect_lows(series: &[Observation]) -> Vec<usize> {
    let negated: Vec<f64> = series.iter().map(|o| -o.voltage).collect();
    strict_local_maxima(&negated)
}

fn strict_local_maxima(values: &[f64]) -> Vec<usize> {
    values
        .windows(3)
        .enumerate()
        .filter(|(_, w)| w[1] > w[0] && w[1] > w[2])
        .map(|(i, _)| i + 1)
        .collect()
}
