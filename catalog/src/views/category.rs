//! Category Partitioner
//!
//! Labels are listed in first-occurrence order so category navigation
//! follows catalog authoring order. Matching is exact and case-sensitive.

use std::collections::{HashMap, HashSet};

use crate::models::ProductRecord;

/// Distinct values of `key` over `items`, in first-occurrence order.
/// Items whose key is `None` are skipped.
pub fn distinct_by<'s, 'a, T, F>(items: &'s [T], key: F) -> Vec<&'a str>
where
    F: Fn(&'s T) -> Option<&'a str>,
{
    let mut seen = HashSet::new();
    items
        .iter()
        .filter_map(key)
        .filter(|value| seen.insert(*value))
        .collect()
}

/// Distinct category labels in first-occurrence order.
pub fn categories_of(all: &[ProductRecord]) -> Vec<&str> {
    distinct_by(all, |p| Some(p.category.as_str()))
}

/// Records whose category equals `category` exactly.
///
/// No sentinel handling: `"all"` is an ordinary label here.
pub fn filter_by_category<'a>(all: &'a [ProductRecord], category: &str) -> Vec<&'a ProductRecord> {
    all.iter().filter(|p| p.category == category).collect()
}

/// Labels plus per-label partitions, built in one pass
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex<'a> {
    labels: Vec<&'a str>,
    partitions: HashMap<&'a str, Vec<&'a ProductRecord>>,
}

impl<'a> CategoryIndex<'a> {
    pub fn build(all: &'a [ProductRecord]) -> Self {
        let mut labels = Vec::new();
        let mut partitions: HashMap<&'a str, Vec<&'a ProductRecord>> = HashMap::new();

        for p in all {
            let label = p.category.as_str();
            partitions
                .entry(label)
                .or_insert_with(|| {
                    labels.push(label);
                    Vec::new()
                })
                .push(p);
        }

        tracing::debug!(
            products = all.len(),
            categories = labels.len(),
            "Built category index"
        );

        Self { labels, partitions }
    }

    /// Labels in first-occurrence order
    pub fn labels(&self) -> &[&'a str] {
        &self.labels
    }

    /// Partition for a label (empty for unknown labels)
    pub fn get(&self, label: &str) -> &[&'a ProductRecord] {
        self.partitions.get(label).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `(label, partition)` pairs in label order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &[&'a ProductRecord])> + '_ {
        self.labels.iter().map(|label| (*label, self.get(label)))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
