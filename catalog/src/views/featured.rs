//! Featured Selector
//!
//! Ranking never reorders the catalog itself; it sorts a vector of
//! references and returns a prefix of it.

use crate::models::{FeaturedPolicy, ProductRecord};
use crate::store::Catalog;

/// Ordered featured subset
pub type FeaturedSet<'a> = Vec<&'a ProductRecord>;

/// Stable top-`k` by `key`, descending.
///
/// Records with equal keys keep their relative order from `all`.
/// `k == 0` yields an empty set and `k > all.len()` yields every record.
pub fn select_ranked<'a, K, F>(all: &'a [ProductRecord], k: usize, key: F) -> FeaturedSet<'a>
where
    K: Ord,
    F: Fn(&ProductRecord) -> K,
{
    if k == 0 {
        return Vec::new();
    }
    let mut ranked: Vec<&ProductRecord> = all.iter().collect();
    // sort_by is stable
    ranked.sort_by(|a, b| key(b).cmp(&key(a)));
    ranked.truncate(k);
    ranked
}

/// Top `k` records by review count (missing counts rank as 0).
pub fn select_featured(all: &[ProductRecord], k: usize) -> FeaturedSet<'_> {
    select_ranked(all, k, ProductRecord::popularity)
}

/// Records flagged `featured`, in catalog order.
///
/// Ranked selection keyed on the flag with `k` equal to the number of
/// flagged records.
pub fn select_flagged(all: &[ProductRecord]) -> FeaturedSet<'_> {
    let k = all.iter().filter(|p| p.featured).count();
    select_ranked(all, k, |p| p.featured)
}

impl FeaturedPolicy {
    /// Apply this policy to a record list
    pub fn apply<'a>(&self, all: &'a [ProductRecord]) -> FeaturedSet<'a> {
        match *self {
            FeaturedPolicy::TopReviewed { limit } => select_featured(all, limit),
            FeaturedPolicy::Flagged => select_flagged(all),
        }
    }

    /// Replace the ranked limit; flag policies are unaffected
    pub fn with_limit(self, limit: usize) -> Self {
        match self {
            FeaturedPolicy::TopReviewed { .. } => FeaturedPolicy::TopReviewed { limit },
            FeaturedPolicy::Flagged => FeaturedPolicy::Flagged,
        }
    }
}

impl Catalog {
    /// Featured subset according to the dataset's policy
    pub fn featured(&self) -> FeaturedSet<'_> {
        self.featured_policy().apply(self.all())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(reviews: &[Option<u32>]) -> Vec<ProductRecord> {
        reviews
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let id = i as u32 + 1;
                let mut p = ProductRecord::new(id, format!("P{id}"), "c", format!("/{id}.jpg"));
                p.reviews = *r;
                p
            })
            .collect()
    }

    fn ids(set: &[&ProductRecord]) -> Vec<u32> {
        set.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_ties_keep_source_order() {
        let all = sample(&[Some(10), Some(30), Some(10), Some(30), Some(20)]);
        assert_eq!(ids(&select_featured(&all, 5)), vec![2, 4, 5, 1, 3]);
    }

    #[test]
    fn test_missing_reviews_rank_as_zero() {
        let all = sample(&[None, Some(0), Some(1)]);
        assert_eq!(ids(&select_featured(&all, 3)), vec![3, 1, 2]);
    }

    #[test]
    fn test_k_bounds() {
        let all = sample(&[Some(1), Some(2)]);
        assert!(select_featured(&all, 0).is_empty());
        assert_eq!(select_featured(&all, 10).len(), 2);
        assert!(select_featured(&[], 3).is_empty());
    }

    #[test]
    fn test_input_not_reordered() {
        let all = sample(&[Some(1), Some(5), Some(3)]);
        let _ = select_featured(&all, 2);
        assert_eq!(all.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_flagged_equals_filter() {
        let mut all = sample(&[Some(9), Some(1), Some(5), Some(7)]);
        all[1].featured = true;
        all[3].featured = true;

        let expected: Vec<u32> = all.iter().filter(|p| p.featured).map(|p| p.id).collect();
        assert_eq!(ids(&select_flagged(&all)), expected);
        assert_eq!(ids(&select_flagged(&all)), vec![2, 4]);
    }

    #[test]
    fn test_flagged_none() {
        let all = sample(&[Some(9), Some(1)]);
        assert!(select_flagged(&all).is_empty());
    }

    #[test]
    fn test_policy_apply_and_limit() {
        let all = sample(&[Some(1), Some(3), Some(2)]);
        let policy = FeaturedPolicy::TopReviewed { limit: 1 };
        assert_eq!(ids(&policy.apply(&all)), vec![2]);
        assert_eq!(ids(&policy.with_limit(2).apply(&all)), vec![2, 3]);
        assert_eq!(FeaturedPolicy::Flagged.with_limit(4), FeaturedPolicy::Flagged);
    }
}
