use serde::{Deserialize, Serialize};

use super::BudgetConfig;

/// Spend observed so far in the billing period plus the period forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpendWindow {
    pub current_spend: f64,
    pub forecasted_spend: f64,
    pub days_elapsed: u32,
    pub days_in_period: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetOutlook {
    /// Share of the budget already spent, in percent. Can exceed 100.
    pub percent_used: f64,
    /// True when the forecasted period total exceeds the budget.
    pub is_over_budget: bool,
    /// Days until spend crosses the budget line, 0 when already past it.
    /// `None` when the forecast stays within budget, the period has ended,
    /// or spend is not growing.
    pub days_until_over_budget: Option<u32>,
    pub projected_overspend: f64,
}

/// Evaluates period spend against a budget.
///
/// The overspend-day projection spreads the remaining forecasted growth
/// evenly over the remaining days. With no remaining days or no growth
/// there is no meaningful daily rate, so the projection is `None` instead
/// of a division by zero.
pub fn evaluate_budget(config: &BudgetConfig, spend: &SpendWindow) -> BudgetOutlook {
    let budget = config.monthly_budget();
    let percent_used = spend.current_spend / budget * 100.0;
    let is_over_budget = spend.forecasted_spend > budget;
    let projected_overspend = (spend.forecasted_spend - budget).max(0.0);

    let days_remaining = spend.days_in_period.saturating_sub(spend.days_elapsed);
    let growth = spend.forecasted_spend - spend.current_spend;
    let days_until_over_budget = if is_over_budget && days_remaining > 0 && growth > 0.0 {
        let daily_rate = growth / f64::from(days_remaining);
        let days = ((budget - spend.current_spend) / daily_rate).floor();
        Some(days.max(0.0) as u32)
    } else {
        None
    };

    BudgetOutlook {
        percent_used,
        is_over_budget,
        days_until_over_budget,
        projected_overspend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget(amount: f64) -> BudgetConfig {
        BudgetConfig::new(amount).unwrap()
    }

    #[test]
    fn test_already_past_budget() {
        let outlook = evaluate_budget(
            &budget(5000.0),
            &SpendWindow {
                current_spend: 18432.0,
                forecasted_spend: 19531.0,
                days_elapsed: 22,
                days_in_period: 30,
            },
        );
        assert!(outlook.is_over_budget);
        assert!((outlook.percent_used - 368.64).abs() < 0.01);
        assert_eq!(outlook.days_until_over_budget, Some(0));
        assert!((outlook.projected_overspend - 14531.0).abs() < 1e-9);
    }

    #[test]
    fn test_on_track() {
        let outlook = evaluate_budget(
            &budget(5000.0),
            &SpendWindow {
                current_spend: 3000.0,
                forecasted_spend: 4500.0,
                days_elapsed: 22,
                days_in_period: 30,
            },
        );
        assert!(!outlook.is_over_budget);
        assert!((outlook.percent_used - 60.0).abs() < 1e-9);
        assert_eq!(outlook.days_until_over_budget, None);
        assert!((outlook.projected_overspend - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_overspend_days_from_daily_rate() {
        // Growth 1500 over 10 remaining days = 150/day; 600 of headroom
        // left = 4 days.
        let outlook = evaluate_budget(
            &budget(5000.0),
            &SpendWindow {
                current_spend: 4400.0,
                forecasted_spend: 5900.0,
                days_elapsed: 20,
                days_in_period: 30,
            },
        );
        assert_eq!(outlook.days_until_over_budget, Some(4));
    }

    #[test]
    fn test_ended_period_has_no_projection() {
        let outlook = evaluate_budget(
            &budget(5000.0),
            &SpendWindow {
                current_spend: 4000.0,
                forecasted_spend: 6000.0,
                days_elapsed: 30,
                days_in_period: 30,
            },
        );
        assert!(outlook.is_over_budget);
        assert_eq!(outlook.days_until_over_budget, None);
    }

    #[test]
    fn test_elapsed_past_period_end_has_no_projection() {
        let outlook = evaluate_budget(
            &budget(5000.0),
            &SpendWindow {
                current_spend: 4000.0,
                forecasted_spend: 6000.0,
                days_elapsed: 35,
                days_in_period: 30,
            },
        );
        assert_eq!(outlook.days_until_over_budget, None);
    }

    #[test]
    fn test_flat_spend_has_no_projection() {
        // Over budget already but no growth: no rate to project with.
        let outlook = evaluate_budget(
            &budget(5000.0),
            &SpendWindow {
                current_spend: 6000.0,
                forecasted_spend: 6000.0,
                days_elapsed: 10,
                days_in_period: 30,
            },
        );
        assert!(outlook.is_over_budget);
        assert_eq!(outlook.days_until_over_budget, None);
        assert!((outlook.projected_overspend - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let config = budget(5000.0);
        let window = SpendWindow {
            current_spend: 4400.0,
            forecasted_spend: 5900.0,
            days_elapsed: 20,
            days_in_period: 30,
        };
        assert_eq!(
            evaluate_budget(&config, &window),
            evaluate_budget(&config, &window)
        );
    }
}
