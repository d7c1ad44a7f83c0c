//! Cost anomaly detection against a rolling-average baseline.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default deviation threshold, in percent.
pub const DEFAULT_THRESHOLD_PERCENT: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnomalyReading {
    /// Signed deviation of the current cost from the baseline, in percent.
    pub deviation_percent: f64,
    pub is_anomaly: bool,
}

/// Compares the current cost against a rolling average and flags a
/// deviation whose absolute value strictly exceeds the threshold. A
/// deviation of exactly the threshold is not an anomaly.
///
/// A zero baseline is reported as [`Error::DivisionByZero`] rather than a
/// silent non-anomaly: no history to deviate from means the reading would
/// be meaningless.
pub fn detect_anomaly(
    current: f64,
    rolling_average: f64,
    threshold_percent: f64,
) -> Result<AnomalyReading> {
    if threshold_percent < 0.0 {
        return Err(Error::invalid_config(format!(
            "anomaly threshold must be non-negative, got {threshold_percent}"
        )));
    }
    if rolling_average == 0.0 {
        return Err(Error::DivisionByZero("rolling average"));
    }

    let deviation_percent = (current - rolling_average) / rolling_average * 100.0;
    Ok(AnomalyReading {
        deviation_percent,
        is_anomaly: deviation_percent.abs() > threshold_percent,
    })
}

/// [`detect_anomaly`] with the default 10% threshold.
pub fn detect_anomaly_default(current: f64, rolling_average: f64) -> Result<AnomalyReading> {
    detect_anomaly(current, rolling_average, DEFAULT_THRESHOLD_PERCENT)
}
