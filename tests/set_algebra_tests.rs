#![cfg(feature = "set-algebra")]
//! Integration tests for the set-algebra operations.

use fusion::set_algebra::{difference, intersection, union, uniq};
use rstest::rstest;

fn sorted<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    values.sort();
    values
}

// =============================================================================
// Mixed collection kinds
// =============================================================================

#[rstest]
fn test_operations_accept_arrays_vectors_and_slices() {
    let vector = vec![1, 2, 3, 4];
    let array = [3, 4, 5];
    let slice: &[i32] = &[4, 3, 9];

    assert_eq!(
        sorted(intersection(&[&vector[..], &array[..], slice])),
        vec![3, 4]
    );
    assert_eq!(
        sorted(union(&[&vector[..], &array[..], slice])),
        vec![1, 2, 3, 4, 5, 9]
    );
    assert_eq!(sorted(difference(&vector, &[&array[..], slice])), vec![1, 2]);
}

// =============================================================================
// Owned, non-Copy values
// =============================================================================

#[rstest]
fn test_intersection_of_strings() {
    let result = intersection(&[
        vec!["apple".to_string(), "banana".to_string(), "cherry".to_string()],
        vec!["cherry".to_string(), "banana".to_string(), "kiwi".to_string()],
        vec!["cherry".to_string(), "mango".to_string()],
    ]);
    assert_eq!(result, vec!["cherry".to_string()]);
}

#[rstest]
fn test_difference_of_strings() {
    let base = vec!["red".to_string(), "green".to_string(), "blue".to_string()];
    let result = difference(&base, &[vec!["green".to_string()]]);
    assert_eq!(sorted(result), vec!["blue".to_string(), "red".to_string()]);
}

#[rstest]
fn test_uniq_of_tuples_keeps_first_occurrence() {
    let events = [("login", 1), ("logout", 1), ("login", 1), ("login", 2)];
    assert_eq!(uniq(&events), vec![("login", 1), ("logout", 1), ("login", 2)]);
}

// =============================================================================
// Edge cases
// =============================================================================

#[rstest]
fn test_all_operations_on_empty_inputs() {
    let empty: Vec<i32> = Vec::new();

    assert!(difference(&empty, &[&empty]).is_empty());
    assert!(intersection(&[&empty, &empty]).is_empty());
    assert!(union(&[&empty]).is_empty());
    assert!(uniq(&empty).is_empty());
}

#[rstest]
fn test_intersection_of_single_collection_is_its_distinct_values() {
    let result = intersection(&[vec![2, 1, 2, 3]]);
    assert_eq!(sorted(result), vec![1, 2, 3]);
}
