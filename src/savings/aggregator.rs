use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::SavingsOption;

const MONTHS_PER_YEAR: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsTotal {
    pub monthly: f64,
    pub annual: f64,
}

/// Sums the monthly savings of the selected options.
///
/// Ids in `selected` with no matching option are ignored; selecting
/// nothing totals zero.
pub fn total_savings(options: &[SavingsOption], selected: &HashSet<String>) -> SavingsTotal {
    let monthly = options
        .iter()
        .filter(|option| selected.contains(&option.id))
        .map(|option| option.savings)
        .sum::<f64>();
    SavingsTotal {
        monthly,
        annual: monthly * MONTHS_PER_YEAR,
    }
}

/// Caller-held selection state with idempotent toggle semantics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    ids: HashSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes the id if present, inserts it otherwise.
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    pub fn select(&mut self, id: impl Into<String>) {
        self.ids.insert(id.into());
    }

    pub fn deselect(&mut self, id: &str) {
        self.ids.remove(id);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &HashSet<String> {
        &self.ids
    }

    /// Total savings of this selection over the given options.
    pub fn total(&self, options: &[SavingsOption]) -> SavingsTotal {
        total_savings(options, &self.ids)
    }
}

impl FromIterator<String> for Selection {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
