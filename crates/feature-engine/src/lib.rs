//! Feature Engineering Engine
//!
//! Derived views over a sorted voltage series: trailing moving average,
//! strict local peaks and lows, low-voltage readings, and negative second
//! differences. Every function is pure and leaves its input untouched.

mod curvature;
mod extrema;
mod features;
mod smoothing;
mod threshold;

pub use curvature::{downward_acceleration_points, AccelerationPoint};
pub use extrema::{detect_lows, detect_peaks};
pub use features::{FeatureExtractor, FeatureReport, TrendPoint};
pub use smoothing::{moving_average, MOVING_AVERAGE_WINDOW};
pub use threshold::{filter_below_threshold, LOW_VOLTAGE_THRESHOLD};
