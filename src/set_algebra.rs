//! Set algebra and deduplication over slices.
//!
//! This module provides the operations that treat slices as sets of values:
//!
//! - [`difference`]: values of a base slice missing from every other slice
//! - [`intersection`]: values present in every slice
//! - [`union`]: values present in any slice
//! - [`uniq`]: first occurrences of each value, in input order
//!
//! Each operation builds a fresh membership set (see [`crate::hashing`]) per
//! call and never modifies its inputs. Outputs contain each value at most once.
//!
//! # Ordering
//!
//! Only [`uniq`] guarantees an order (first occurrence). The order of
//! [`difference`], [`intersection`] and [`union`] is derived from hash-set
//! iteration and must not be relied upon.
//!
//! # Variadic Inputs
//!
//! Operations over several collections take `&[S]` where `S: AsRef<[T]>`,
//! so vectors, arrays and borrowed slices can all be passed:
//!
//! ```rust
//! use fusion::set_algebra::union;
//!
//! let first = vec![1, 2];
//! let second = [2, 3];
//! let mut all = union(&[&first[..], &second[..]]);
//! all.sort_unstable();
//! assert_eq!(all, vec![1, 2, 3]);
//! ```

use std::hash::Hash;

use crate::hashing::{MembershipMap, MembershipSet, membership_map, membership_set};

/// Returns the values of `base` that appear in none of the `others`.
///
/// Duplicate values in `base` collapse to a single occurrence. The order of
/// the result is unspecified.
///
/// # Examples
///
/// ```rust
/// use fusion::set_algebra::difference;
///
/// let mut result = difference(&[1, 2, 3, 4, 5], &[vec![2, 4], vec![4, 6]]);
/// result.sort_unstable();
/// assert_eq!(result, vec![1, 3, 5]);
/// ```
pub fn difference<T, S>(base: &[T], others: &[S]) -> Vec<T>
where
    T: Eq + Hash + Clone,
    S: AsRef<[T]>,
{
    let mut remaining: MembershipSet<&T> = membership_set(base.len());
    remaining.extend(base);

    for other in others {
        for value in other.as_ref() {
            remaining.remove(value);
        }
    }

    remaining.into_iter().cloned().collect()
}

/// Returns the values present in every one of `collections`.
///
/// Repetitions within a single collection count once. Intersecting zero
/// collections yields an empty result: there is no universe to intersect
/// against. The order of the result is unspecified.
///
/// # Examples
///
/// ```rust
/// use fusion::set_algebra::intersection;
///
/// let result = intersection(&[
///     vec!["apple", "cherry", "cherry"],
///     vec!["cherry", "banana"],
///     vec!["grape", "cherry"],
/// ]);
/// assert_eq!(result, vec!["cherry"]);
///
/// let nothing: Vec<i32> = intersection::<i32, Vec<i32>>(&[]);
/// assert!(nothing.is_empty());
/// ```
pub fn intersection<T, S>(collections: &[S]) -> Vec<T>
where
    T: Eq + Hash + Clone,
    S: AsRef<[T]>,
{
    let Some(first) = collections.first() else {
        return Vec::new();
    };

    let mut counts: MembershipMap<&T, usize> = membership_map(first.as_ref().len());
    for collection in collections {
        let collection = collection.as_ref();
        let mut seen: MembershipSet<&T> = membership_set(collection.len());
        for value in collection {
            if seen.insert(value) {
                *counts.entry(value).or_insert(0) += 1;
            }
        }
    }

    counts
        .into_iter()
        .filter(|(_, count)| *count == collections.len())
        .map(|(value, _)| value.clone())
        .collect()
}

/// Returns every value present in any of `collections`, each once.
///
/// The order of the result is unspecified.
///
/// # Examples
///
/// ```rust
/// use fusion::set_algebra::union;
///
/// let mut result = union(&[vec![1, 2, 3], vec![3, 4], vec![5, 1]]);
/// result.sort_unstable();
/// assert_eq!(result, vec![1, 2, 3, 4, 5]);
/// ```
pub fn union<T, S>(collections: &[S]) -> Vec<T>
where
    T: Eq + Hash + Clone,
    S: AsRef<[T]>,
{
    let capacity = collections
        .iter()
        .map(|collection| collection.as_ref().len())
        .max()
        .unwrap_or(0);
    let mut unique: MembershipSet<&T> = membership_set(capacity);

    for collection in collections {
        unique.extend(collection.as_ref());
    }

    unique.into_iter().cloned().collect()
}

/// Returns the distinct values of `collection` in order of first occurrence.
///
/// # Examples
///
/// ```rust
/// use fusion::set_algebra::uniq;
///
/// assert_eq!(uniq(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// assert!(uniq::<i32>(&[]).is_empty());
/// ```
pub fn uniq<T>(collection: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen: MembershipSet<&T> = membership_set(collection.len());
    collection
        .iter()
        .filter(|value| seen.insert(*value))
        .cloned()
        .collect()
}
