//! Assertion functions for pipeline outputs.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Assert two slices are equal element by element.
///
/// # Panics
/// On a length or content mismatch, naming the first differing index.
///
/// ```
/// use seqflow::testing::assert_collections_equal;
/// assert_collections_equal(&[1, 2, 3], &[1, 2, 3]);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    if let Some(i) = actual.iter().zip(expected).position(|(a, e)| a != e) {
        panic!(
            "mismatch at index {i}: expected {:?}, got {:?}\n  expected: {expected:?}\n  actual:   {actual:?}",
            expected[i], actual[i]
        );
    }
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch\n  expected: {expected:?}\n  actual:   {actual:?}"
    );
}

/// Assert two slices hold the same elements with the same multiplicities,
/// in any order.
///
/// # Panics
/// When some element occurs a different number of times.
///
/// ```
/// use seqflow::testing::assert_collections_unordered_equal;
/// assert_collections_unordered_equal(&[3, 1, 1], &[1, 3, 1]);
/// ```
pub fn assert_collections_unordered_equal<T: Debug + Eq + Hash>(actual: &[T], expected: &[T]) {
    let mut counts: HashMap<&T, i64> = HashMap::new();
    for a in actual {
        *counts.entry(a).or_default() += 1;
    }
    for e in expected {
        *counts.entry(e).or_default() -= 1;
    }
    let diff: Vec<_> = counts.into_iter().filter(|(_, n)| *n != 0).collect();
    assert!(
        diff.is_empty(),
        "multiset mismatch (element, actual - expected): {diff:?}\n  expected: {expected:?}\n  actual:   {actual:?}"
    );
}

/// Assert the collection has exactly `expected` elements.
///
/// # Panics
/// On a size mismatch.
pub fn assert_collection_size<T: Debug>(actual: &[T], expected: usize) {
    assert_eq!(
        actual.len(),
        expected,
        "expected {expected} elements, got {}: {actual:?}",
        actual.len()
    );
}

/// Assert every element satisfies `pred`.
///
/// # Panics
/// Naming the first element that fails.
pub fn assert_all<T: Debug>(actual: &[T], pred: impl Fn(&T) -> bool) {
    if let Some((i, bad)) = actual.iter().enumerate().find(|(_, x)| !pred(x)) {
        panic!("element {i} fails the predicate: {bad:?}");
    }
}

/// Assert at least one element satisfies `pred`.
///
/// # Panics
/// When none does.
pub fn assert_any<T: Debug>(actual: &[T], pred: impl Fn(&T) -> bool) {
    assert!(
        actual.iter().any(pred),
        "no element satisfies the predicate: {actual:?}"
    );
}

/// Assert no element satisfies `pred`.
///
/// # Panics
/// Naming the first element that does.
pub fn assert_none<T: Debug>(actual: &[T], pred: impl Fn(&T) -> bool) {
    if let Some((i, bad)) = actual.iter().enumerate().find(|(_, x)| pred(x)) {
        panic!("element {i} unexpectedly satisfies the predicate: {bad:?}");
    }
}
