use serde::{Deserialize, Serialize};

/// Effort required to adopt a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A general cost-reduction play with its typical savings range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    pub id: String,
    pub category: String,
    pub title: String,
    pub description: String,
    /// Typical savings range as displayed, e.g. "30-40%".
    pub potential_savings: String,
    pub difficulty: Difficulty,
    pub timeframe: String,
}

fn strategy(
    id: &str,
    category: &str,
    title: &str,
    description: &str,
    potential_savings: &str,
    difficulty: Difficulty,
    timeframe: &str,
) -> Strategy {
    Strategy {
        id: id.to_string(),
        category: category.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        potential_savings: potential_savings.to_string(),
        difficulty,
        timeframe: timeframe.to_string(),
    }
}

/// The static playbook of cost-reduction strategies.
pub fn strategies() -> Vec<Strategy> {
    vec![
        strategy(
            "s1",
            "Compute",
            "Switch to Reserved Instances",
            "Commit to 1-year or 3-year reserved instances for stable workloads. Save up to 40% compared to on-demand pricing.",
            "30-40%",
            Difficulty::Easy,
            "Immediate",
        ),
        strategy(
            "s2",
            "Compute",
            "Use Spot Instances for Non-Critical Workloads",
            "Replace on-demand instances with spot instances for batch jobs, testing, and dev environments. Save up to 90%.",
            "70-90%",
            Difficulty::Medium,
            "1-2 weeks",
        ),
        strategy(
            "s3",
            "Storage",
            "Move Old Data to Cold Storage",
            "Transition infrequently accessed data to archive tiers. Reduce storage costs by up to 85%.",
            "75-85%",
            Difficulty::Easy,
            "Immediate",
        ),
        strategy(
            "s4",
            "Compute",
            "Implement Auto-Shutdown for Non-Production",
            "Automatically shut down dev/test instances after business hours (8 PM - 8 AM). Save 60% on non-production costs.",
            "50-60%",
            Difficulty::Easy,
            "1 week",
        ),
        strategy(
            "s5",
            "Network",
            "Use CDN for Static Content",
            "Reduce data transfer costs by serving static assets through a CDN. Lower egress charges significantly.",
            "40-50%",
            Difficulty::Medium,
            "2-3 weeks",
        ),
        strategy(
            "s6",
            "Database",
            "Right-Size Database Instances",
            "Analyze actual usage patterns and downsize over-provisioned database instances. Many databases run at <30% capacity.",
            "30-50%",
            Difficulty::Medium,
            "2-4 weeks",
        ),
        strategy(
            "s7",
            "Storage",
            "Enable Intelligent Tiering",
            "Let the provider automatically move objects between access tiers based on usage patterns. Zero overhead, automatic savings.",
            "20-40%",
            Difficulty::Easy,
            "Immediate",
        ),
        strategy(
            "s8",
            "Optimization",
            "Delete Unused Resources",
            "Remove idle instances, unattached volumes, old snapshots, and unused addresses. Eliminate waste completely.",
            "100%",
            Difficulty::Easy,
            "Immediate",
        ),
    ]
}
