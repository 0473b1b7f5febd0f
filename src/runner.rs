//! Terminal operations.
//!
//! Each terminal takes the pipeline's stage (consuming the pipeline) and pulls
//! elements through the recorded steps one at a time. Short-circuiting
//! terminals (`find_first`, `any_match`, `all_match`, `none_match`) stop
//! pulling as soon as the answer is known, which makes them safe on infinite
//! sources that contain a witness. All others drive the stage to exhaustion
//! and never return on an unlimited `iterate`/`generate` source.

use crate::collection::{Seq, SeqBound};
use crate::combiners::{CombineFn, Joining, SummaryStatistics, SummaryStats, ToF64, fold_with};
use crate::error::{Result, SeqError};
use std::cmp::Ordering;
use tracing::debug;

impl<T: SeqBound> Seq<T> {
    /// Apply `f` to every element in order.
    ///
    /// # Errors
    /// [`SeqError::AlreadyConsumed`] on reuse.
    pub fn for_each<F>(&self, f: F) -> Result<()>
    where
        F: FnMut(T),
    {
        self.start("for_each")?.iter.for_each(f);
        Ok(())
    }

    /// Materialize every element in order.
    ///
    /// # Errors
    /// [`SeqError::AlreadyConsumed`] on reuse.
    pub fn to_list(&self) -> Result<Vec<T>> {
        let out: Vec<T> = self.start("to_list")?.iter.collect();
        debug!(seq = %self.id(), len = out.len(), "to_list finished");
        Ok(out)
    }

    /// Number of elements.
    ///
    /// # Errors
    /// [`SeqError::AlreadyConsumed`] on reuse.
    pub fn count(&self) -> Result<usize> {
        Ok(self.start("count")?.iter.count())
    }

    /// Left fold from `identity` in source order.
    ///
    /// `combine(acc, x)` is called once per element, the first call
    /// receiving `identity`. An empty sequence returns `identity` unchanged.
    ///
    /// # Type bounds
    /// - `F: FnMut(R, T) -> R` -- the accumulator type `R` may differ from `T`.
    ///
    /// # Returns
    /// The final accumulator.
    ///
    /// # Example
    /// ```
    /// use seqflow::*;
    /// use seqflow::testing::*;
    ///
    /// let total = from_vec(sample_employees())
    ///     .map(|e: &Employee| e.salary + 100)
    ///     .reduce(0, |acc, s| acc + s)?;
    /// assert_eq!(total, 11_400);
    /// # Ok::<_, seqflow::SeqError>(())
    /// ```
    ///
    /// # Errors
    /// [`SeqError::AlreadyConsumed`] on reuse.
    pub fn reduce<R, F>(&self, identity: R, combine: F) -> Result<R>
    where
        F: FnMut(R, T) -> R,
    {
        Ok(self.start("reduce")?.iter.fold(identity, combine))
    }

    /// Left fold seeded with the first element; `None` when empty.
    ///
    /// # Errors
    /// [`SeqError::AlreadyConsumed`] on reuse.
    pub fn reduce_opt<F>(&self, combine: F) -> Result<Option<T>>
    where
        F: FnMut(T, T) -> T,
    {
        Ok(self.start("reduce_opt")?.iter.reduce(combine))
    }

    /// The first element, pulling nothing past it.
    ///
    /// Safe on infinite sources: upstream steps run only until one element
    /// reaches the end of the chain.
    ///
    /// # Example
    /// ```
    /// use seqflow::*;
    ///
    /// let first_square = iterate(1u32, |n: &u32| n + 1)
    ///     .map(|n: &u32| n * n)
    ///     .filter(|sq: &u32| *sq > 50)
    ///     .find_first()?;
    /// assert_eq!(first_square, Some(64));
    /// # Ok::<_, seqflow::SeqError>(())
    /// ```
    ///
    /// # Errors
    /// [`SeqError::AlreadyConsumed`] on reuse.
    pub fn find_first(&self) -> Result<Option<T>> {
        Ok(self.start("find_first")?.iter.next())
    }

    /// Element with the largest key; the last one wins a tie.
    ///
    /// # Errors
    /// - [`SeqError::EmptySequence`] when there are no elements.
    /// - [`SeqError::AlreadyConsumed`] on reuse.
    pub fn max_by_key<K, F>(&self, key: F) -> Result<T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.start("max_by_key")?
            .iter
            .max_by_key(key)
            .ok_or(SeqError::EmptySequence { op: "max_by_key" })
    }

    /// Element with the smallest key; the first one wins a tie.
    ///
    /// # Errors
    /// - [`SeqError::EmptySequence`] when there are no elements.
    /// - [`SeqError::AlreadyConsumed`] on reuse.
    pub fn min_by_key<K, F>(&self, key: F) -> Result<T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.start("min_by_key")?
            .iter
            .min_by_key(key)
            .ok_or(SeqError::EmptySequence { op: "min_by_key" })
    }

    /// [`max_by_key`](Self::max_by_key), returning `default` for an empty
    /// sequence.
    ///
    /// # Errors
    /// [`SeqError::AlreadyConsumed`] on reuse.
    pub fn max_by_key_or<K, F>(&self, default: T, key: F) -> Result<T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        Ok(self.start("max_by_key_or")?.iter.max_by_key(key).unwrap_or(default))
    }

    /// [`min_by_key`](Self::min_by_key), returning `default` for an empty
    /// sequence.
    ///
    /// # Errors
    /// [`SeqError::AlreadyConsumed`] on reuse.
    pub fn min_by_key_or<K, F>(&self, default: T, key: F) -> Result<T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        Ok(self.start("min_by_key_or")?.iter.min_by_key(key).unwrap_or(default))
    }

    /// Largest element under `cmp`.
    ///
    /// # Errors
    /// - [`SeqError::EmptySequence`] when there are no elements.
    /// - [`SeqError::AlreadyConsumed`] on reuse.
    pub fn max_by<C>(&self, cmp: C) -> Result<T>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        self.start("max_by")?
            .iter
            .max_by(cmp)
            .ok_or(SeqError::EmptySequence { op: "max_by" })
    }

    /// Smallest element under `cmp`.
    ///
    /// # Errors
    /// - [`SeqError::EmptySequence`] when there are no elements.
    /// - [`SeqError::AlreadyConsumed`] on reuse.
    pub fn min_by<C>(&self, cmp: C) -> Result<T>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        self.start("min_by")?
            .iter
            .min_by(cmp)
            .ok_or(SeqError::EmptySequence { op: "min_by" })
    }

    /// `true` if every element satisfies `pred`; `true` for an empty sequence.
    ///
    /// # Errors
    /// [`SeqError::AlreadyConsumed`] on reuse.
    pub fn all_match<P>(&self, mut pred: P) -> Result<bool>
    where
        P: FnMut(&T) -> bool,
    {
        Ok(self.start("all_match")?.iter.all(|x| pred(&x)))
    }

    /// `true` if some element satisfies `pred`; `false` for an empty sequence.
    ///
    /// # Errors
    /// [`SeqError::AlreadyConsumed`] on reuse.
    pub fn any_match<P>(&self, mut pred: P) -> Result<bool>
    where
        P: FnMut(&T) -> bool,
    {
        Ok(self.start("any_match")?.iter.any(|x| pred(&x)))
    }

    /// `true` if no element satisfies `pred`; `true` for an empty sequence.
    ///
    /// # Errors
    /// [`SeqError::AlreadyConsumed`] on reuse.
    pub fn none_match<P>(&self, mut pred: P) -> Result<bool>
    where
        P: FnMut(&T) -> bool,
    {
        Ok(!self.start("none_match")?.iter.any(|x| pred(&x)))
    }

    /// Concatenate `to_string(x)` for each element with `separator` in between.
    ///
    /// # Errors
    /// [`SeqError::AlreadyConsumed`] on reuse.
    pub fn join<S, F>(&self, mut to_string: F, separator: &str) -> Result<String>
    where
        S: AsRef<str>,
        F: FnMut(&T) -> S,
    {
        let stage = self.start("join")?;
        Ok(fold_with(&Joining::new(separator), stage.iter.map(|x| to_string(&x))))
    }

    /// Count, sum, min, max and mean of `key(x)` in a single pass.
    ///
    /// `key` may return any primitive number; see [`ToF64`].
    ///
    /// # Errors
    /// [`SeqError::AlreadyConsumed`] on reuse. An empty sequence is not an
    /// error here; see [`SummaryStats::min`].
    pub fn summary_stats<V, F>(&self, mut key: F) -> Result<SummaryStats>
    where
        V: ToF64,
        F: FnMut(&T) -> V,
    {
        let stage = self.start("summary_stats")?;
        let stats = fold_with(&SummaryStatistics, stage.iter.map(|x| key(&x)));
        debug!(seq = %self.id(), count = stats.count(), "summary_stats finished");
        Ok(stats)
    }

    /// Fold every element with a [`CombineFn`].
    ///
    /// # Errors
    /// [`SeqError::AlreadyConsumed`] on reuse.
    pub fn combine<C, A, O>(&self, comb: C) -> Result<O>
    where
        C: CombineFn<T, A, O>,
    {
        Ok(fold_with(&comb, self.start("combine")?.iter))
    }
}
