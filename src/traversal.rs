//! Higher-order traversal over slices.
//!
//! This module provides callback-driven operations:
//!
//! - [`map`], [`filter`], [`reduce`]: element-wise transformation, selection and
//!   folding, each with a typed `context` threaded into every call
//! - [`every`], [`some`], [`find_index`]: short-circuiting queries
//! - [`remove`]: in-place partition returning the removed elements
//! - [`partition_removed`]: the non-mutating counterpart of [`remove`]
//!
//! # Callback Shapes
//!
//! | Operation | Callback |
//! |-----------|----------|
//! | `map` | `FnMut(index, &value, &context) -> U` |
//! | `filter` | `FnMut(index, &value, &context) -> bool` |
//! | `reduce` | `FnMut(accumulator, &value, index, &context) -> R` |
//! | `every`, `some`, `remove` | `FnMut(&value, index, &[T]) -> bool` |
//! | `find_index` | `FnMut(&value) -> bool` |
//!
//! The `context` argument replaces an untyped "extra argument": pass `&()`
//! when the callback needs nothing, or capture state in the closure instead.
//!
//! # Short-Circuiting
//!
//! [`every`], [`some`] and [`find_index`] stop at the first element that
//! settles the answer, so the callback may not run for every element.
//!
//! # Examples
//!
//! ```rust
//! use fusion::traversal::{filter, map, reduce};
//!
//! let values = [1, 2, 3, 4, 5];
//! let doubled = map(&values, |_, value, _| value * 2, &());
//! let evens = filter(&doubled, |_, value, limit| value <= limit, &6);
//! let total = reduce(&evens, |accumulator, value, _, _| accumulator + value, 0, &());
//!
//! assert_eq!(doubled, vec![2, 4, 6, 8, 10]);
//! assert_eq!(evens, vec![2, 4, 6]);
//! assert_eq!(total, 12);
//! ```

/// Applies `transform` to every element, producing a new vector of the same length.
///
/// `transform` receives the index, the element and `context`.
///
/// # Examples
///
/// ```rust
/// use fusion::traversal::map;
///
/// let labels = map(&[1, 2, 3], |index, value, suffix| format!("{index}:{value}:{suffix}"), &"x");
/// assert_eq!(labels, vec!["0:1:x", "1:2:x", "2:3:x"]);
/// ```
pub fn map<T, U, C, F>(collection: &[T], mut transform: F, context: &C) -> Vec<U>
where
    C: ?Sized,
    F: FnMut(usize, &T, &C) -> U,
{
    collection
        .iter()
        .enumerate()
        .map(|(index, value)| transform(index, value, context))
        .collect()
}

/// Returns the elements for which `predicate` holds, in their original order.
///
/// `predicate` receives the index, the element and `context`.
///
/// # Examples
///
/// ```rust
/// use fusion::traversal::filter;
///
/// let large = filter(&[5, 10, 15, 20, 25], |_, value, threshold| value > threshold, &15);
/// assert_eq!(large, vec![20, 25]);
/// ```
pub fn filter<T, C, F>(collection: &[T], mut predicate: F, context: &C) -> Vec<T>
where
    T: Clone,
    C: ?Sized,
    F: FnMut(usize, &T, &C) -> bool,
{
    collection
        .iter()
        .enumerate()
        .filter(|(index, value)| predicate(*index, *value, context))
        .map(|(_, value)| value.clone())
        .collect()
}

/// Folds the collection from left to right, starting from `initial`.
///
/// `transform` receives the accumulator, the element, its index and
/// `context`, and is applied exactly once per element in index order.
/// An empty collection returns `initial` unchanged.
///
/// # Examples
///
/// ```rust
/// use fusion::traversal::reduce;
///
/// let product = reduce(&[1, 2, 3, 4, 5], |accumulator, value, _, _| accumulator * value, 1, &());
/// assert_eq!(product, 120);
/// ```
pub fn reduce<T, R, C, F>(collection: &[T], mut transform: F, initial: R, context: &C) -> R
where
    C: ?Sized,
    F: FnMut(R, &T, usize, &C) -> R,
{
    collection
        .iter()
        .enumerate()
        .fold(initial, |accumulator, (index, value)| {
            transform(accumulator, value, index, context)
        })
}

/// Returns `true` if `predicate` holds for every element.
///
/// Stops at the first failing element. An empty collection yields `true`.
///
/// # Examples
///
/// ```rust
/// use fusion::traversal::every;
///
/// assert!(every(&[2, 4, 6], |value, _, _| value % 2 == 0));
/// assert!(!every(&[2, 3, 6], |value, _, _| value % 2 == 0));
/// assert!(every::<i32, _>(&[], |_, _, _| false));
/// ```
pub fn every<T, F>(collection: &[T], mut predicate: F) -> bool
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    collection
        .iter()
        .enumerate()
        .all(|(index, value)| predicate(value, index, collection))
}

/// Returns `true` if `predicate` holds for at least one element.
///
/// Stops at the first matching element. An empty collection yields `false`.
///
/// # Examples
///
/// ```rust
/// use fusion::traversal::some;
///
/// assert!(!some(&[1, 3, 5], |value, _, _| value % 2 == 0));
/// assert!(some(&[1, 4, 5], |value, _, _| value % 2 == 0));
/// ```
pub fn some<T, F>(collection: &[T], mut predicate: F) -> bool
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    collection
        .iter()
        .enumerate()
        .any(|(index, value)| predicate(value, index, collection))
}

/// Returns the index of the first element satisfying `predicate`.
///
/// Returns `None` when nothing matches or the collection is empty.
///
/// # Examples
///
/// ```rust
/// use fusion::traversal::find_index;
///
/// assert_eq!(find_index(&["a", "b", "c", "d"], |value| *value == "d"), Some(3));
/// assert_eq!(find_index(&["a", "b"], |value| *value == "z"), None);
/// ```
pub fn find_index<T, F>(collection: &[T], predicate: F) -> Option<usize>
where
    F: FnMut(&T) -> bool,
{
    collection.iter().position(predicate)
}

/// Removes, in place, every element for which `predicate` holds, and returns them.
///
/// After the call `collection` holds only the kept elements. Kept and removed
/// elements both retain their original relative order, and together account
/// for every original element.
///
/// `predicate` receives the element, its index and the whole collection as it
/// was before the call: every decision is taken before any element moves.
/// A first pass records the predicate over that snapshot, and a second pass
/// moves the removed elements out. Kept elements stay in the caller's
/// allocation.
///
/// # Examples
///
/// ```rust
/// use fusion::traversal::remove;
///
/// let mut values = vec![1, 2, 3, 4, 5];
/// let removed = remove(&mut values, |value, _, _| value % 2 == 0);
///
/// assert_eq!(values, vec![1, 3, 5]);
/// assert_eq!(removed, vec![2, 4]);
/// ```
pub fn remove<T, F>(collection: &mut Vec<T>, mut predicate: F) -> Vec<T>
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    let snapshot = collection.as_slice();
    let decisions: Vec<bool> = snapshot
        .iter()
        .enumerate()
        .map(|(index, value)| predicate(value, index, snapshot))
        .collect();

    let mut decisions = decisions.into_iter();
    let removed: Vec<T> = collection
        .extract_if(.., |_| decisions.next().unwrap_or(false))
        .collect();

    #[cfg(feature = "tracing")]
    tracing::trace!(removed = removed.len(), kept = collection.len(), "remove");

    removed
}

/// Splits `collection` into `(kept, removed)` without modifying it.
///
/// `removed` holds the elements for which `predicate` holds; `kept` holds the
/// rest. This is [`remove`] for callers who do not own the collection.
///
/// # Examples
///
/// ```rust
/// use fusion::traversal::partition_removed;
///
/// let fruits = ["apple", "banana", "cherry", "orange"];
/// let (kept, removed) = partition_removed(&fruits, |fruit, _, _| fruit.ends_with('e'));
///
/// assert_eq!(kept, vec!["banana", "cherry"]);
/// assert_eq!(removed, vec!["apple", "orange"]);
/// assert_eq!(fruits.len(), 4);
/// ```
pub fn partition_removed<T, F>(collection: &[T], mut predicate: F) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    F: FnMut(&T, usize, &[T]) -> bool,
{
    let mut kept = Vec::with_capacity(collection.len());
    let mut removed = Vec::new();
    for (index, value) in collection.iter().enumerate() {
        if predicate(value, index, collection) {
            removed.push(value.clone());
        } else {
            kept.push(value.clone());
        }
    }
    (kept, removed)
}
