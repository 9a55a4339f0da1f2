//! Groups a dataset's records by their must-match key values

use crate::record::{Dataset, Record};
use indexmap::IndexMap;

/// Index of one dataset's records grouped by composite must-match key.
///
/// The key is the tuple of a record's values at the must-match columns, in
/// must-match order. Grouping bounds the matching engine's nested scans to
/// records that already agree on the mandatory columns; without it every
/// control record would be compared against every test record system-wide.
/// Iteration order is first-appearance order, so downstream processing stays
/// deterministic for a fixed input row order.
pub struct PartitionIndex<'a> {
    groups: IndexMap<Vec<String>, Vec<&'a Record>>,
}

impl<'a> PartitionIndex<'a> {
    /// Build the index for one dataset. An empty `key_indices` slice produces
    /// a single partition holding every record.
    pub fn build(dataset: &'a Dataset, key_indices: &[usize]) -> Self {
        let mut groups: IndexMap<Vec<String>, Vec<&Record>> = IndexMap::new();
        for record in dataset.records() {
            let key: Vec<String> = key_indices
                .iter()
                .map(|&index| record.value(index).to_string())
                .collect();
            groups.entry(key).or_default().push(record);
        }
        Self { groups }
    }

    /// Distinct keys in first-appearance order.
    pub fn keys(&self) -> impl Iterator<Item = &Vec<String>> {
        self.groups.keys()
    }

    pub fn contains(&self, key: &[String]) -> bool {
        self.groups.contains_key(key)
    }

    /// Records sharing a key, in dataset order; empty for an unknown key.
    pub fn group(&self, key: &[String]) -> &[&'a Record] {
        self.groups.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
