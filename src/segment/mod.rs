//! Tag-based cost segmentation.

use serde::{Deserialize, Serialize};

/// A cost record carrying its allocation tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedCost {
    pub environment: String,
    pub department: String,
    pub project: String,
    pub cost: f64,
    /// Period-over-period change, in percent.
    pub change: f64,
}

/// Equality filter over cost tags. `None` matches everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagFilter {
    pub environment: Option<String>,
    pub department: Option<String>,
    pub project: Option<String>,
}

impl TagFilter {
    /// A filter that matches every record.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn matches(&self, record: &TaggedCost) -> bool {
        fn tag_matches(filter: Option<&str>, value: &str) -> bool {
            filter.is_none_or(|wanted| wanted == value)
        }

        tag_matches(self.environment.as_deref(), &record.environment)
            && tag_matches(self.department.as_deref(), &record.department)
            && tag_matches(self.project.as_deref(), &record.project)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentSummary {
    pub total_cost: f64,
    /// Mean change across matched records, zero when nothing matches.
    pub average_change: f64,
    pub matched: usize,
}

/// Totals the records the filter matches.
pub fn segment_costs(records: &[TaggedCost], filter: &TagFilter) -> SegmentSummary {
    let matched: Vec<&TaggedCost> = records.iter().filter(|r| filter.matches(r)).collect();

    let total_cost = matched.iter().map(|r| r.cost).sum();
    let average_change = if matched.is_empty() {
        0.0
    } else {
        matched.iter().map(|r| r.change).sum::<f64>() / matched.len() as f64
    };

    SegmentSummary {
        total_cost,
        average_change,
        matched: matched.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(environment: &str, department: &str, project: &str, cost: f64, change: f64) -> TaggedCost {
        TaggedCost {
            environment: environment.to_string(),
            department: department.to_string(),
            project: project.to_string(),
            cost,
            change,
        }
    }

    fn records() -> Vec<TaggedCost> {
        vec![
            record("production", "backend", "atlas", 8234.0, 15.2),
            record("production", "ai", "phoenix", 5123.0, 22.8),
            record("testing", "frontend", "research", 2890.0, -8.5),
            record("development", "ai", "atlas", 1456.0, 5.3),
            record("staging", "backend", "phoenix", 729.0, -12.1),
        ]
    }

    #[test]
    fn test_unfiltered_totals_everything() {
        let summary = segment_costs(&records(), &TagFilter::any());
        assert_eq!(summary.matched, 5);
        assert!((summary.total_cost - 18432.0).abs() < 1e-9);
        // (15.2 + 22.8 - 8.5 + 5.3 - 12.1) / 5 = 4.54
        assert!((summary.average_change - 4.54).abs() < 0.01);
    }

    #[test]
    fn test_single_tag_filter() {
        let summary = segment_costs(&records(), &TagFilter::any().environment("production"));
        assert_eq!(summary.matched, 2);
        assert!((summary.total_cost - 13357.0).abs() < 1e-9);
    }

    #[test]
    fn test_combined_tag_filters() {
        let filter = TagFilter::any().department("ai").project("atlas");
        let summary = segment_costs(&records(), &filter);
        assert_eq!(summary.matched, 1);
        assert!((summary.total_cost - 1456.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_match_has_zero_average() {
        let summary = segment_costs(&records(), &TagFilter::any().environment("qa"));
        assert_eq!(summary.matched, 0);
        assert!((summary.total_cost - 0.0).abs() < 1e-9);
        assert!((summary.average_change - 0.0).abs() < 1e-9);
    }
}
