//! Built-in sample dataset and static strategy cards.
//!
//! The figures mirror a synthetic billing export for one account over one
//! billing period. They feed demos and double as the fixtures the
//! integration tests run against.

mod strategies;

pub use strategies::{Difficulty, Strategy, strategies};

use chrono::NaiveDate;

use crate::pricing::{ProviderPricing, Workload};
use crate::types::{
    CostMetric, CostPoint, Optimization, Priority, Resource, ResourceStatus, SavingsOption,
    ServiceCost, TrendDirection,
};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Headline dashboard metrics.
pub fn cost_metrics() -> Vec<CostMetric> {
    vec![
        CostMetric {
            label: "Total Monthly Cost".to_string(),
            value: "$18,432".to_string(),
            change: 12.5,
            trend: TrendDirection::Up,
        },
        CostMetric {
            label: "Daily Average".to_string(),
            value: "$614".to_string(),
            change: -3.2,
            trend: TrendDirection::Down,
        },
        CostMetric {
            label: "Potential Savings".to_string(),
            value: "$3,245".to_string(),
            change: 0.0,
            trend: TrendDirection::Down,
        },
        CostMetric {
            label: "Active Resources".to_string(),
            value: "247".to_string(),
            change: 5.1,
            trend: TrendDirection::Up,
        },
    ]
}

/// Per-service cost breakdown for the period.
pub fn service_costs() -> Vec<ServiceCost> {
    vec![
        ServiceCost::new("Compute (EC2)", 7234.0, 39.2),
        ServiceCost::new("Storage (S3)", 4123.0, 22.4),
        ServiceCost::new("Database (RDS)", 3456.0, 18.7),
        ServiceCost::new("Network & CDN", 2189.0, 11.9),
        ServiceCost::new("Other Services", 1430.0, 7.8),
    ]
}

/// Weekly cost history, ordered by date ascending.
pub fn cost_trends() -> Vec<CostPoint> {
    vec![
        CostPoint::new(day(2024, 1, 15), 16234.0),
        CostPoint::new(day(2024, 1, 22), 16890.0),
        CostPoint::new(day(2024, 1, 29), 17123.0),
        CostPoint::new(day(2024, 2, 5), 17456.0),
        CostPoint::new(day(2024, 2, 12), 17890.0),
        CostPoint::new(day(2024, 2, 19), 18234.0),
        CostPoint::new(day(2024, 2, 26), 18432.0),
    ]
}

/// The five most expensive resources, cost descending.
pub fn top_resources() -> Vec<Resource> {
    vec![
        Resource {
            id: "i-0a1b2c3d4e5f".to_string(),
            name: "prod-web-server-01".to_string(),
            service: "EC2".to_string(),
            region: "us-east-1".to_string(),
            cost: 1234.0,
            utilization: 87.0,
            status: ResourceStatus::Active,
        },
        Resource {
            id: "db-prod-mysql-01".to_string(),
            name: "prod-database-primary".to_string(),
            service: "RDS".to_string(),
            region: "us-east-1".to_string(),
            cost: 987.0,
            utilization: 92.0,
            status: ResourceStatus::Active,
        },
        Resource {
            id: "i-9z8y7x6w5v4".to_string(),
            name: "dev-test-server-03".to_string(),
            service: "EC2".to_string(),
            region: "us-west-2".to_string(),
            cost: 856.0,
            utilization: 12.0,
            status: ResourceStatus::Underutilized,
        },
        Resource {
            id: "bucket-prod-media".to_string(),
            name: "production-media-storage".to_string(),
            service: "S3".to_string(),
            region: "us-east-1".to_string(),
            cost: 743.0,
            utilization: 76.0,
            status: ResourceStatus::Active,
        },
        Resource {
            id: "i-5u4t3s2r1q0".to_string(),
            name: "staging-api-server".to_string(),
            service: "EC2".to_string(),
            region: "eu-west-1".to_string(),
            cost: 634.0,
            utilization: 5.0,
            status: ResourceStatus::Idle,
        },
    ]
}

/// Recommended optimization actions, highest priority first.
pub fn optimizations() -> Vec<Optimization> {
    vec![
        Optimization {
            id: "opt-1".to_string(),
            title: "Stop Idle EC2 Instances".to_string(),
            description: "3 EC2 instances have been idle for over 7 days with <5% utilization"
                .to_string(),
            potential_savings: 1245.0,
            priority: Priority::High,
            category: "Compute".to_string(),
        },
        Optimization {
            id: "opt-2".to_string(),
            title: "Rightsize Underutilized Instances".to_string(),
            description: "5 instances running at <20% capacity could be downsized".to_string(),
            potential_savings: 892.0,
            priority: Priority::High,
            category: "Compute".to_string(),
        },
        Optimization {
            id: "opt-3".to_string(),
            title: "Use Reserved Instances".to_string(),
            description:
                "Save 40% on stable workloads by committing to 1-year reserved instances"
                    .to_string(),
            potential_savings: 678.0,
            priority: Priority::Medium,
            category: "Compute".to_string(),
        },
        Optimization {
            id: "opt-4".to_string(),
            title: "Clean Up Old Snapshots".to_string(),
            description: "Delete 127 snapshots older than 90 days".to_string(),
            potential_savings: 234.0,
            priority: Priority::Medium,
            category: "Storage".to_string(),
        },
        Optimization {
            id: "opt-5".to_string(),
            title: "Enable S3 Lifecycle Policies".to_string(),
            description: "Transition infrequently accessed data to cheaper storage tiers"
                .to_string(),
            potential_savings: 196.0,
            priority: Priority::Low,
            category: "Storage".to_string(),
        },
    ]
}

/// Selectable what-if savings actions.
pub fn savings_options() -> Vec<SavingsOption> {
    vec![
        SavingsOption::new(
            "idle-instances",
            "Stop 3 Idle EC2 Instances",
            "Instances with <5% utilization for 7+ days",
            1245.0,
        ),
        SavingsOption::new(
            "downsize",
            "Downsize 5 Underutilized Instances",
            "Running at <20% capacity",
            892.0,
        ),
        SavingsOption::new(
            "reserved",
            "Switch to Reserved Instances",
            "1-year commitment for stable workloads",
            678.0,
        ),
        SavingsOption::new(
            "snapshots",
            "Delete Old Snapshots (127 items)",
            "Snapshots older than 90 days",
            234.0,
        ),
        SavingsOption::new(
            "s3-lifecycle",
            "Enable S3 Lifecycle Policies",
            "Move infrequent data to cheaper tiers",
            196.0,
        ),
        SavingsOption::new(
            "unused-ips",
            "Release Unused Elastic IPs",
            "8 unattached IPs detected",
            58.0,
        ),
    ]
}

/// On-demand list rate cards for the big three providers.
pub fn provider_pricing() -> Vec<ProviderPricing> {
    vec![
        ProviderPricing::new("AWS", 0.096, 0.023, 0.09),
        ProviderPricing::new("Azure", 0.088, 0.025, 0.087),
        ProviderPricing::new("GCP", 0.084, 0.020, 0.085),
    ]
}

/// The workload profile the built-in comparison prices: one instance
/// running a full month, 1 TB stored, 500 GB egressed.
pub fn sample_workload() -> Workload {
    Workload {
        compute_hours: 730.0,
        storage_gb: 1000.0,
        egress_gb: 500.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trends_are_ordered_ascending() {
        let trends = cost_trends();
        assert!(trends.windows(2).all(|pair| pair[0].date < pair[1].date));
    }

    #[test]
    fn test_service_percentages_roughly_sum_to_hundred() {
        let total: f64 = service_costs().iter().map(|s| s.percentage).sum();
        assert!((total - 100.0).abs() < 1.0);
    }

    #[test]
    fn test_savings_options_total() {
        // 1245 + 892 + 678 + 234 + 196 + 58
        let total: f64 = savings_options().iter().map(|o| o.savings).sum();
        assert!((total - 3303.0).abs() < 1e-9);
    }

    #[test]
    fn test_resources_sorted_by_cost_descending() {
        let resources = top_resources();
        assert!(resources.windows(2).all(|pair| pair[0].cost >= pair[1].cost));
    }
}
