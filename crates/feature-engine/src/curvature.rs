//! Second Difference (Downward Acceleration)

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use voltage_ingest::Observation;

/// Reading where the second difference of voltage is negative
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccelerationPoint {
    /// Position in the sorted series (always >= 2)
    pub index: usize,
    pub timestamp: NaiveDateTime,
    pub voltage: f64,
    /// `(v[i] - v[i-1]) - (v[i-1] - v[i-2])`
    pub second_difference: f64,
}

/// Every reading whose second difference is negative.
///
/// The test is a global sign check on the discrete second derivative: it
/// flags slowing rises as well as steepening falls, anywhere in the series.
/// The first two readings have no second difference and are never returned.
pub fn downward_acceleration_points(series: &[Observation]) -> Vec<AccelerationPoint> {
    series
        .windows(3)
        .enumerate()
        .filter_map(|(i, w)| {
            let prev_change = w[1].voltage - w[0].voltage;
            let change = w[2].voltage - w[1].voltage;
            let second_difference = change - prev_change;
            (second_difference < 0.0).then(|| AccelerationPoint {
                index: i + 2,
                timestamp: w[2].timestamp,
                voltage: w[2].voltage,
                second_difference,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::series_of;

    #[test]
    fn test_second_difference_sign() {
        // dv:  -, 5, -3, 0, -4, 12
        // d2v: -, -, -8, 3, -4, 16
        let series = series_of(&[10.0, 15.0, 12.0, 12.0, 8.0, 20.0]);
        let points = downward_acceleration_points(&series);

        let indices: Vec<usize> = points.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![2, 4]);
        assert_eq!(points[0].second_difference, -8.0);
        assert_eq!(points[0].voltage, 12.0);
        assert_eq!(points[0].timestamp, series[2].timestamp);
        assert_eq!(points[1].second_difference, -4.0);
    }

    #[test]
    fn test_decelerating_rise_is_flagged() {
        // Still rising, but by less each step
        let series = series_of(&[0.0, 10.0, 15.0, 17.0]);
        let indices: Vec<usize> = downward_acceleration_points(&series)
            .iter()
            .map(|p| p.index)
            .collect();
        assert_eq!(indices, vec![2, 3]);
    }

    #[test]
    fn test_linear_series_has_none() {
        let series = series_of(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!(downward_acceleration_points(&series).is_empty());
    }

    #[test]
    fn test_too_short() {
        assert!(downward_acceleration_points(&series_of(&[3.0, 1.0])).is_empty());
    }
}
