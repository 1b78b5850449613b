//! Activity ranking of the members of a subject.
//!
//! Members (sensors of a gateway, gateways of a network) are ranked by how
//! many samples they produced. Ties are kept: every member sharing the
//! highest count is "most active" and every member sharing the lowest count
//! is "least active".

use std::collections::BTreeMap;

/// Sample counts per member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRanking<K: Ord> {
    counts: BTreeMap<K, u64>,
    total: u64,
}

impl<K: Ord> Default for ActivityRanking<K> {
    fn default() -> Self {
        Self {
            counts: BTreeMap::new(),
            total: 0,
        }
    }
}

impl<K: Ord + Clone> ActivityRanking<K> {
    /// Count one sample per key.
    pub fn from_keys<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut ranking = Self::default();
        for key in keys {
            *ranking.counts.entry(key).or_insert(0) += 1;
            ranking.total += 1;
        }
        ranking
    }

    pub fn counts(&self) -> &BTreeMap<K, u64> {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Every key whose count equals the maximum, in key order.
    pub fn most_active(&self) -> Vec<K> {
        match self.counts.values().max() {
            Some(&max) => self.keys_with_count(max),
            None => Vec::new(),
        }
    }

    /// Every key whose count equals the minimum, in key order.
    pub fn least_active(&self) -> Vec<K> {
        match self.counts.values().min() {
            Some(&min) => self.keys_with_count(min),
            None => Vec::new(),
        }
    }

    /// Share of the total per key, as a percentage.
    pub fn load_ratios(&self) -> BTreeMap<K, f64> {
        if self.total == 0 {
            return BTreeMap::new();
        }
        let total = self.total as f64;
        self.counts
            .iter()
            .map(|(k, &c)| (k.clone(), c as f64 / total * 100.0))
            .collect()
    }

    fn keys_with_count(&self, count: u64) -> Vec<K> {
        self.counts
            .iter()
            .filter(|(_, &c)| c == count)
            .map(|(k, _)| k.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_ranking() {
        let r: ActivityRanking<&str> = ActivityRanking::from_keys(Vec::new());
        assert!(r.is_empty());
        assert!(r.most_active().is_empty());
        assert!(r.least_active().is_empty());
        assert!(r.load_ratios().is_empty());
    }

    #[test]
    fn ties_are_kept() {
        let r = ActivityRanking::from_keys(["a", "b", "a", "b", "c"]);
        assert_eq!(r.most_active(), vec!["a", "b"]);
        assert_eq!(r.least_active(), vec!["c"]);
        assert_eq!(r.total(), 5);
    }

    #[test]
    fn single_group_is_both_most_and_least() {
        let r = ActivityRanking::from_keys(["only", "only", "only"]);
        assert_eq!(r.most_active(), vec!["only"]);
        assert_eq!(r.least_active(), vec!["only"]);
    }

    #[test]
    fn load_ratios_sum_to_hundred() {
        let r = ActivityRanking::from_keys(["a", "a", "a", "b"]);
        let ratios = r.load_ratios();
        assert_eq!(ratios["a"], 75.0);
        assert_eq!(ratios["b"], 25.0);
        let sum: f64 = ratios.values().sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }
}
