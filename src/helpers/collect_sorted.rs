//! Sorted collection helpers for [`Seq`].
//!
//! - [`Seq::collect_sorted`] -- materialize and sort by natural order.
//! - [`Seq::collect_sorted_by_key`] -- materialize and stable-sort by a key.
//!
//! Handy in tests and final sinks where a deterministic order matters more
//! than the source order.

use crate::collection::{Seq, SeqBound};
use crate::error::Result;

impl<T: SeqBound + Ord> Seq<T> {
    /// Collect every element and return them sorted.
    ///
    /// # Example
    /// ```
    /// use seqflow::from_vec;
    ///
    /// let sorted = from_vec(vec![3, 1, 2]).collect_sorted()?;
    /// assert_eq!(sorted, vec![1, 2, 3]);
    /// # Ok::<_, seqflow::SeqError>(())
    /// ```
    ///
    /// # Errors
    /// - [`SeqError::UnboundedSource`](crate::SeqError::UnboundedSource) on an
    ///   infinite source without `limit`.
    /// - [`SeqError::AlreadyConsumed`](crate::SeqError::AlreadyConsumed) on reuse.
    pub fn collect_sorted(&self) -> Result<Vec<T>> {
        let mut v: Vec<T> = self.start_finite("collect_sorted")?.iter.collect();
        v.sort();
        Ok(v)
    }
}

impl<T: SeqBound> Seq<T> {
    /// Collect every element and stable-sort them by `key`.
    ///
    /// # Errors
    /// Same as [`collect_sorted`](Seq::collect_sorted).
    pub fn collect_sorted_by_key<K, F>(&self, key: F) -> Result<Vec<T>>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let mut v: Vec<T> = self.start_finite("collect_sorted_by_key")?.iter.collect();
        v.sort_by_key(key);
        Ok(v)
    }
}
