//! Call-scoped, insertion-ordered group accumulators.

use indexmap::IndexMap;

use crate::inference::running_mean;

/// Running totals for one group.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct GroupTotals {
    pub sum: f64,
    pub count: usize,
    /// Mean kept incrementally, used once `sum` has overflowed.
    running: f64,
}

impl GroupTotals {
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else if self.sum.is_finite() {
            self.sum / self.count as f64
        } else {
            self.running
        }
    }
}

/// Groups keyed by label in first-seen order.
#[derive(Debug, Default)]
pub(crate) struct Groups {
    totals: IndexMap<String, GroupTotals>,
}

impl Groups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one observation to the group for `label`.
    pub fn add(&mut self, label: String, value: f64) {
        let totals = self.totals.entry(label).or_default();
        totals.sum += value;
        totals.count += 1;
        totals.running = running_mean(totals.running, value, totals.count);
    }

    /// Count one occurrence of `label`.
    pub fn tally(&mut self, label: String) {
        self.add(label, 0.0);
    }

    /// Groups in first-seen order.
    pub fn into_ordered(self) -> impl Iterator<Item = (String, GroupTotals)> {
        self.totals.into_iter()
    }

    /// Groups sorted by count, largest first. Ties keep first-seen order.
    pub fn into_by_count(self) -> Vec<(String, GroupTotals)> {
        let mut groups: Vec<_> = self.totals.into_iter().collect();
        groups.sort_by(|a, b| b.1.count.cmp(&a.1.count));
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_order() {
        let mut groups = Groups::new();
        for label in ["b", "a", "b", "c", "a"] {
            groups.tally(label.to_string());
        }
        let order: Vec<String> = groups.into_ordered().map(|(k, _)| k).collect();
        assert_eq!(order, ["b", "a", "c"]);
    }

    #[test]
    fn test_by_count_is_stable() {
        let mut groups = Groups::new();
        for label in ["x", "y", "z", "z", "y"] {
            groups.tally(label.to_string());
        }
        let order: Vec<String> = groups.into_by_count().into_iter().map(|(k, _)| k).collect();
        assert_eq!(order, ["y", "z", "x"]);
    }

    #[test]
    fn test_mean() {
        let mut groups = Groups::new();
        groups.add("g".to_string(), 2.0);
        groups.add("g".to_string(), 5.0);
        let (_, totals) = groups.into_ordered().next().unwrap();
        assert_eq!(totals.mean(), 3.5);
    }

    #[test]
    fn test_mean_of_huge_values_stays_finite() {
        let mut groups = Groups::new();
        groups.add("g".to_string(), f64::MAX);
        groups.add("g".to_string(), f64::MAX);
        let (_, totals) = groups.into_ordered().next().unwrap();
        assert!(totals.sum.is_infinite());
        assert_eq!(totals.mean(), f64::MAX);
    }
}
