//! Linear trend forecasting over short cost histories.

use serde::{Deserialize, Serialize};

use crate::types::CostPoint;
use crate::{Error, Result};

/// Minimum history length the forecaster accepts.
pub const MIN_HISTORY_POINTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Projected cost for the next period.
    pub forecast: f64,
    /// Change versus the last observation, in percent.
    pub percent_change: f64,
}

/// Projects the next period's cost from a two-point linear trend.
///
/// The increase between the last observation and the observation two
/// periods back is halved and added to the last observation. Intentionally
/// naive: no smoothing, no seasonality.
///
/// Requires at least [`MIN_HISTORY_POINTS`] points ordered by date
/// ascending.
pub fn forecast_next_period(history: &[CostPoint]) -> Result<Forecast> {
    if history.len() < MIN_HISTORY_POINTS {
        return Err(Error::InsufficientData {
            required: MIN_HISTORY_POINTS,
            actual: history.len(),
        });
    }
    if history.windows(2).any(|pair| pair[0].date > pair[1].date) {
        return Err(Error::invalid_config(
            "cost history must be ordered by date ascending",
        ));
    }

    let last = history[history.len() - 1].cost;
    if last == 0.0 {
        return Err(Error::DivisionByZero("last observed cost"));
    }
    let two_back = history[history.len() - 3].cost;
    let avg_increase = (last - two_back) / 2.0;
    let forecast = last + avg_increase;

    Ok(Forecast {
        forecast,
        percent_change: (forecast - last) / last * 100.0,
    })
}

/// Trailing-window mean of the most recent `window` observations, the
/// baseline for anomaly detection. A window longer than the history
/// averages everything available.
pub fn rolling_average(history: &[CostPoint], window: usize) -> Result<f64> {
    if window == 0 {
        return Err(Error::invalid_config("rolling window must be at least 1"));
    }
    if history.is_empty() {
        return Err(Error::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    let tail = &history[history.len().saturating_sub(window)..];
    Ok(tail.iter().map(|point| point.cost).sum::<f64>() / tail.len() as f64)
}
