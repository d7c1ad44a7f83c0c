use serde::{Deserialize, Serialize};

use crate::{Error, Result};

const HOURS_PER_DAY: u32 = 24;
// Fixed-length month, matching the simulator this replaces rather than
// the calendar.
const DAYS_PER_MONTH: f64 = 30.0;

/// Daily shutdown window in clock hours (0-23), wrapping past midnight
/// when the end hour precedes the start hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShutdownWindow {
    start_hour: u8,
    end_hour: u8,
}

impl ShutdownWindow {
    pub fn new(start_hour: u8, end_hour: u8) -> Result<Self> {
        if start_hour > 23 || end_hour > 23 {
            return Err(Error::invalid_config(format!(
                "shutdown hours must be within 0-23, got {start_hour}..{end_hour}"
            )));
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    pub fn start_hour(&self) -> u8 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u8 {
        self.end_hour
    }

    /// Length of the window in hours. Equal start and end means no
    /// shutdown at all, not a full day.
    pub fn hours(&self) -> u32 {
        if self.end_hour == self.start_hour {
            0
        } else if self.end_hour > self.start_hour {
            u32::from(self.end_hour - self.start_hour)
        } else {
            u32::from(24 - self.start_hour + self.end_hour)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSavings {
    pub shutdown_hours: u32,
    pub running_hours: u32,
    pub daily_savings: f64,
    /// Daily savings over a fixed 30-day month.
    pub monthly_savings: f64,
    pub percent_reduction: f64,
}

/// Cost delta from shutting an instance down during the window each day.
pub fn schedule_savings(window: ShutdownWindow, hourly_rate: f64) -> Result<ScheduleSavings> {
    if hourly_rate.is_nan() || hourly_rate < 0.0 {
        return Err(Error::invalid_config(format!(
            "hourly rate must be non-negative, got {hourly_rate}"
        )));
    }
    if hourly_rate == 0.0 {
        return Err(Error::DivisionByZero("hourly rate"));
    }

    let shutdown_hours = window.hours();
    let running_hours = HOURS_PER_DAY - shutdown_hours;
    let daily_savings = f64::from(shutdown_hours) * hourly_rate;
    let full_day_cost = f64::from(HOURS_PER_DAY) * hourly_rate;

    Ok(ScheduleSavings {
        shutdown_hours,
        running_hours,
        daily_savings,
        monthly_savings: daily_savings * DAYS_PER_MONTH,
        percent_reduction: daily_savings / full_day_cost * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overnight_window() {
        // 8 PM to 8 AM wraps past midnight: (24 - 20) + 8 = 12 hours.
        let savings =
            schedule_savings(ShutdownWindow::new(20, 8).unwrap(), 1.5).unwrap();
        assert_eq!(savings.shutdown_hours, 12);
        assert_eq!(savings.running_hours, 12);
        assert!((savings.daily_savings - 18.0).abs() < 0.01);
        assert!((savings.monthly_savings - 540.0).abs() < 0.01);
        assert!((savings.percent_reduction - 50.0).abs() < 0.01);
    }

    #[test]
    fn test_same_start_and_end_is_zero_hours() {
        let savings = schedule_savings(ShutdownWindow::new(8, 8).unwrap(), 1.5).unwrap();
        assert_eq!(savings.shutdown_hours, 0);
        assert_eq!(savings.running_hours, 24);
        assert!((savings.daily_savings - 0.0).abs() < 1e-9);
        assert!((savings.percent_reduction - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_same_day_window() {
        let savings = schedule_savings(ShutdownWindow::new(1, 5).unwrap(), 2.0).unwrap();
        assert_eq!(savings.shutdown_hours, 4);
        assert!((savings.daily_savings - 8.0).abs() < 1e-9);
        // 4 of 24 hours = 16.67% reduction
        assert!((savings.percent_reduction - 16.67).abs() < 0.01);
    }

    #[test]
    fn test_hour_bounds_validated() {
        assert!(matches!(
            ShutdownWindow::new(24, 8),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            ShutdownWindow::new(8, 99),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(ShutdownWindow::new(0, 23).is_ok());
    }

    #[test]
    fn test_zero_rate_is_degenerate() {
        assert!(matches!(
            schedule_savings(ShutdownWindow::new(20, 8).unwrap(), 0.0),
            Err(Error::DivisionByZero("hourly rate"))
        ));
    }

    #[test]
    fn test_negative_rate_rejected() {
        assert!(matches!(
            schedule_savings(ShutdownWindow::new(20, 8).unwrap(), -1.5),
            Err(Error::InvalidConfiguration(_))
        ));
    }
}
