//! Running per-algorithm totals across result files.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Sum and occurrence count for one algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Tally {
    pub sum: f64,
    pub count: usize,
}

/// Sum and count accumulators keyed by algorithm name.
///
/// Both start at zero the first time a name is seen. Names are remembered
/// in first-seen order, which is the order [`AlgorithmTotals::complete`]
/// reports them in.
#[derive(Debug, Clone, Default)]
pub struct AlgorithmTotals {
    order: Vec<String>,
    tallies: HashMap<String, Tally>,
}

impl AlgorithmTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one result for `name`.
    pub fn add(&mut self, name: &str, value: f64) {
        if !self.tallies.contains_key(name) {
            self.order.push(name.to_string());
        }
        let tally = self.tallies.entry(name.to_string()).or_default();
        tally.sum += value;
        tally.count += 1;
    }

    pub fn get(&self, name: &str) -> Option<Tally> {
        self.tallies.get(name).copied()
    }

    /// Largest occurrence count over all names (0 when empty).
    pub fn max_count(&self) -> usize {
        self.tallies.values().map(|t| t.count).max().unwrap_or(0)
    }

    /// Names seen as often as the most frequent one, with their sums.
    ///
    /// With one result per file, these are the algorithms that produced a
    /// result for every file.
    pub fn complete(&self) -> Vec<(&str, f64)> {
        let max = self.max_count();
        self.order
            .iter()
            .filter_map(|name| {
                let tally = self.tallies.get(name)?;
                (tally.count == max).then_some((name.as_str(), tally.sum))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_accumulates() {
        let mut totals = AlgorithmTotals::new();
        totals.add("BPR", 1.5);
        totals.add("SKEW", 2.0);
        totals.add("BPR", 0.25);

        assert_eq!(
            totals.get("BPR"),
            Some(Tally {
                sum: 1.75,
                count: 2
            })
        );
        assert_eq!(totals.get("QSUFSORT"), None);
        assert_eq!(totals.max_count(), 2);
    }

    #[test]
    fn test_complete_drops_partial_algorithms() {
        let mut totals = AlgorithmTotals::new();
        for _ in 0..3 {
            totals.add("X", 1.0);
        }
        totals.add("Y", 5.0);
        totals.add("Y", 5.0);

        assert_eq!(totals.complete(), vec![("X", 3.0)]);
    }

    #[test]
    fn test_complete_keeps_first_seen_order() {
        let mut totals = AlgorithmTotals::new();
        totals.add("SKEW", 1.0);
        totals.add("BPR", 2.0);
        totals.add("DIVSUFSORT", 3.0);

        let names: Vec<&str> = totals.complete().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["SKEW", "BPR", "DIVSUFSORT"]);
    }

    #[test]
    fn test_empty() {
        let totals = AlgorithmTotals::new();

        assert_eq!(totals.max_count(), 0);
        assert!(totals.complete().is_empty());
    }
}
