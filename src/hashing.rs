//! Hasher selection for the per-call membership sets.
//!
//! Set-algebra operations, `pull` and `omit` build a throwaway hash set on
//! every call. The hasher behind those sets is chosen at compile time:
//!
//! - `fxhash` feature: [`rustc_hash::FxBuildHasher`] (fastest, not DoS resistant)
//! - `ahash` feature: [`ahash::RandomState`]
//! - neither: the standard library's SipHash [`std::collections::hash_map::RandomState`]
//!
//! When both features are enabled, `fxhash` takes precedence.
//!
//! None of this affects results. Output order of the unordered operations
//! (`union`, `intersection`, `difference`, `keys`, ...) may differ between
//! hashers, which is why those operations make no ordering promise.

use std::collections::{HashMap, HashSet};

/// The [`BuildHasher`](std::hash::BuildHasher) used for membership sets.
#[cfg(feature = "fxhash")]
pub type FastBuildHasher = rustc_hash::FxBuildHasher;

/// The [`BuildHasher`](std::hash::BuildHasher) used for membership sets.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type FastBuildHasher = ahash::RandomState;

/// The [`BuildHasher`](std::hash::BuildHasher) used for membership sets.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type FastBuildHasher = std::collections::hash_map::RandomState;

/// A hash set used to record which values have been seen.
pub type MembershipSet<T> = HashSet<T, FastBuildHasher>;

/// A hash map used to count occurrences during set algebra.
pub type MembershipMap<K, V> = HashMap<K, V, FastBuildHasher>;

/// Creates an empty membership set with room for `capacity` values.
#[inline]
pub fn membership_set<T>(capacity: usize) -> MembershipSet<T> {
    HashSet::with_capacity_and_hasher(capacity, FastBuildHasher::default())
}

/// Creates an empty membership map with room for `capacity` entries.
#[inline]
pub fn membership_map<K, V>(capacity: usize) -> MembershipMap<K, V> {
    HashMap::with_capacity_and_hasher(capacity, FastBuildHasher::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_membership_set_deduplicates() {
        let mut set = membership_set(4);
        assert!(set.insert("alpha"));
        assert!(set.insert("beta"));
        assert!(!set.insert("alpha"));
        assert_eq!(set.len(), 2);
    }

    #[rstest]
    fn test_membership_map_counts() {
        let mut counts: MembershipMap<i32, usize> = membership_map(0);
        for value in [1, 2, 1, 1] {
            *counts.entry(value).or_insert(0) += 1;
        }
        assert_eq!(counts.get(&1), Some(&3));
        assert_eq!(counts.get(&2), Some(&1));
        assert_eq!(counts.get(&3), None);
    }
}
