//! Whole-slice helpers: splitting, joining, bounded views and in-place edits.
//!
//! This module provides the auxiliary slice operations:
//!
//! - [`chunk`] / [`try_chunk`]: consecutive fixed-size groups
//! - [`concat`]: linear concatenation
//! - [`fill`] / [`filled`]: overwrite an index range
//! - [`flatten`]: flatten arbitrarily deep [`Nested`] sequences
//! - [`includes`]: linear membership test
//! - [`join`]: render elements with a separator
//! - [`pull`]: drop every occurrence of the listed values
//! - [`reverse`] / [`reversed`]: reverse order
//! - [`slice`] / [`try_slice`]: bounds-clamped borrowed views
//! - [`zip`]: positional pairing
//! - [`shuffle`](crate::sequence::shuffle()) and friends (feature `shuffle`)
//!
//! # In-Place Operations
//!
//! [`fill`], [`reverse`] and [`shuffle`](crate::sequence::shuffle()) take
//! `&mut [T]` and modify the caller's storage. Each has a non-mutating
//! counterpart returning a new `Vec`: [`filled`], [`reversed`] and
//! [`shuffled`](crate::sequence::shuffled()).
//!
//! # Bounds
//!
//! Indices are `usize`. Upper bounds past the end are clamped to the length;
//! none of these operations panic on out-of-range input.

mod nested;
#[cfg(feature = "shuffle")]
mod shuffle;

pub use nested::{Children, Nested, flatten};
#[cfg(feature = "shuffle")]
pub use shuffle::{shuffle, shuffle_with, shuffled, shuffled_with};

use std::fmt::{Display, Write as _};
use std::hash::Hash;

use crate::error::CollectionError;
use crate::hashing::{MembershipSet, membership_set};

// =============================================================================
// Splitting and Joining
// =============================================================================

/// Splits `collection` into consecutive groups of `size` elements.
///
/// The trailing group holds the remainder and may be shorter. A `size` of
/// zero or an empty collection yields no groups.
///
/// # Examples
///
/// ```rust
/// use fusion::sequence::chunk;
///
/// let values = [1, 2, 3, 4, 5, 6, 7, 8];
/// let groups = chunk(&values, 3);
/// assert_eq!(groups, vec![&[1, 2, 3][..], &[4, 5, 6][..], &[7, 8][..]]);
/// assert!(chunk(&values, 0).is_empty());
/// ```
pub fn chunk<T>(collection: &[T], size: usize) -> Vec<&[T]> {
    if size == 0 {
        return Vec::new();
    }
    collection.chunks(size).collect()
}

/// Splits `collection` into consecutive groups of `size` elements.
///
/// # Errors
///
/// Returns [`CollectionError::ZeroChunkSize`] when `size` is zero.
///
/// # Examples
///
/// ```rust
/// use fusion::CollectionError;
/// use fusion::sequence::try_chunk;
///
/// assert_eq!(try_chunk(&[1, 2, 3], 2), Ok(vec![&[1, 2][..], &[3][..]]));
/// assert_eq!(try_chunk(&[1, 2, 3], 0), Err(CollectionError::ZeroChunkSize));
/// ```
pub fn try_chunk<T>(collection: &[T], size: usize) -> Result<Vec<&[T]>, CollectionError> {
    if size == 0 {
        return Err(CollectionError::ZeroChunkSize);
    }
    Ok(chunk(collection, size))
}

/// Concatenates `collections` in order into a single vector.
///
/// # Examples
///
/// ```rust
/// use fusion::sequence::concat;
///
/// assert_eq!(concat(&[vec![1, 2], vec![], vec![3, 4]]), vec![1, 2, 3, 4]);
/// ```
pub fn concat<T, S>(collections: &[S]) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let length = collections
        .iter()
        .map(|collection| collection.as_ref().len())
        .sum();
    let mut concatenated = Vec::with_capacity(length);
    for collection in collections {
        concatenated.extend_from_slice(collection.as_ref());
    }
    concatenated
}

/// Renders each element with [`Display`] and joins them with `separator`.
///
/// # Examples
///
/// ```rust
/// use fusion::sequence::join;
///
/// assert_eq!(join(&[1, 2, 3], ", "), "1, 2, 3");
/// assert_eq!(join(&["hello"], "-"), "hello");
/// assert_eq!(join::<i32>(&[], ","), "");
/// ```
pub fn join<T>(collection: &[T], separator: &str) -> String
where
    T: Display,
{
    let mut joined = String::new();
    for (index, value) in collection.iter().enumerate() {
        if index > 0 {
            joined.push_str(separator);
        }
        // Writing into a `String` never fails.
        let _ = write!(joined, "{value}");
    }
    joined
}

/// Pairs the elements of `left` and `right` by position.
///
/// The result is as long as the shorter input.
///
/// # Examples
///
/// ```rust
/// use fusion::sequence::zip;
///
/// assert_eq!(zip(&[1, 2, 3], &["a", "b"]), vec![(1, "a"), (2, "b")]);
/// ```
pub fn zip<A, B>(left: &[A], right: &[B]) -> Vec<(A, B)>
where
    A: Clone,
    B: Clone,
{
    left.iter().cloned().zip(right.iter().cloned()).collect()
}

// =============================================================================
// Membership
// =============================================================================

/// Returns `true` if `collection` contains `value`.
///
/// # Examples
///
/// ```rust
/// use fusion::sequence::includes;
///
/// assert!(includes(&["apple", "banana"], &"banana"));
/// assert!(!includes(&[1, 2, 3], &4));
/// ```
pub fn includes<T>(collection: &[T], value: &T) -> bool
where
    T: PartialEq,
{
    collection.contains(value)
}

/// Returns a copy of `collection` without any occurrence of the listed `values`.
///
/// The order of the remaining elements is preserved.
///
/// # Examples
///
/// ```rust
/// use fusion::sequence::pull;
///
/// assert_eq!(pull(&[1, 2, 3, 4, 2, 5], &[2]), vec![1, 3, 4, 5]);
/// assert_eq!(pull(&[1, 2, 3, 4, 5], &[1, 3, 5]), vec![2, 4]);
/// ```
pub fn pull<T>(collection: &[T], values: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut excluded: MembershipSet<&T> = membership_set(values.len());
    excluded.extend(values);

    collection
        .iter()
        .filter(|item| !excluded.contains(item))
        .cloned()
        .collect()
}

// =============================================================================
// Bounded Views and Edits
// =============================================================================

/// Returns the view `start..end` of `collection`, with `end` clamped to its length.
///
/// Returns `None` when `start` lies past the clamped `end`.
///
/// # Examples
///
/// ```rust
/// use fusion::sequence::slice;
///
/// let letters = ["a", "b", "c", "d", "e"];
/// assert_eq!(slice(&letters, 1, 4), Some(&["b", "c", "d"][..]));
/// assert_eq!(slice(&letters, 0, 10), Some(&letters[..]));
/// assert_eq!(slice(&letters, 3, 2), None);
/// ```
pub fn slice<T>(collection: &[T], start: usize, end: usize) -> Option<&[T]> {
    let end = end.min(collection.len());
    if start > end {
        return None;
    }
    Some(&collection[start..end])
}

/// Returns the view `start..end` of `collection`, with `end` clamped to its length.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidRange`] when `start` lies past the clamped `end`.
///
/// # Examples
///
/// ```rust
/// use fusion::CollectionError;
/// use fusion::sequence::try_slice;
///
/// assert_eq!(try_slice(&[1, 2, 3], 1, 2), Ok(&[2][..]));
/// assert_eq!(
///     try_slice(&[1, 2, 3], 2, 1),
///     Err(CollectionError::InvalidRange { start: 2, end: 1, length: 3 })
/// );
/// ```
pub fn try_slice<T>(collection: &[T], start: usize, end: usize) -> Result<&[T], CollectionError> {
    slice(collection, start, end).ok_or(CollectionError::InvalidRange {
        start,
        end,
        length: collection.len(),
    })
}

/// Overwrites `collection[start..end]` with clones of `value`, in place.
///
/// `end` is clamped to the length; an empty or inverted range changes nothing.
///
/// # Examples
///
/// ```rust
/// use fusion::sequence::fill;
///
/// let mut values = vec!["1", "2", "3", "4", "5"];
/// fill(&mut values, "x", 1, 4);
/// assert_eq!(values, vec!["1", "x", "x", "x", "5"]);
///
/// fill(&mut values, "y", 0, 100);
/// assert_eq!(values, vec!["y"; 5]);
/// ```
pub fn fill<T>(collection: &mut [T], value: T, start: usize, end: usize)
where
    T: Clone,
{
    let end = end.min(collection.len());
    if start >= end {
        return;
    }
    collection[start..end].fill(value);

    #[cfg(feature = "tracing")]
    tracing::trace!(filled = end - start, length = collection.len(), "fill");
}

/// Returns a copy of `collection` with `start..end` overwritten by `value`.
///
/// Bounds behave as in [`fill`].
///
/// # Examples
///
/// ```rust
/// use fusion::sequence::filled;
///
/// let values = [0, 0, 0, 0];
/// assert_eq!(filled(&values, 7, 2, 9), vec![0, 0, 7, 7]);
/// assert_eq!(values, [0, 0, 0, 0]);
/// ```
pub fn filled<T>(collection: &[T], value: T, start: usize, end: usize) -> Vec<T>
where
    T: Clone,
{
    let mut copy = collection.to_vec();
    fill(&mut copy, value, start, end);
    copy
}

/// Reverses `collection` in place.
///
/// # Examples
///
/// ```rust
/// use fusion::sequence::reverse;
///
/// let mut values = [1, 2, 3, 4, 5];
/// reverse(&mut values);
/// assert_eq!(values, [5, 4, 3, 2, 1]);
/// ```
pub fn reverse<T>(collection: &mut [T]) {
    collection.reverse();
}

/// Returns a reversed copy of `collection`.
///
/// # Examples
///
/// ```rust
/// use fusion::sequence::reversed;
///
/// assert_eq!(reversed(&["a", "b", "c", "d"]), vec!["d", "c", "b", "a"]);
/// ```
pub fn reversed<T>(collection: &[T]) -> Vec<T>
where
    T: Clone,
{
    collection.iter().rev().cloned().collect()
}
