use crate::error::{Result, SeqError};
use crate::node::{Bound, Stage, Step};
use crate::pipeline::Pipeline;
use crate::seq_id::SeqId;
use crate::stream_ops::SortedBy;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;
use tracing::{debug, trace, warn};

/// Bound every pipeline element satisfies.
///
/// Elements are owned by the pipeline and may be moved to another thread
/// together with it, hence `Send + 'static`.
pub trait SeqBound: 'static + Send {}
impl<T> SeqBound for T where T: 'static + Send {}

/// A lazy, single-use sequence of `T`.
///
/// Intermediate operations (`map`, `filter`, `limit`, ...) record a step and
/// return a new `Seq`; nothing runs until a terminal operation (`to_list`,
/// `reduce`, `group_by`, ...) pulls elements through the chain.
///
/// Handles are cheap to clone and every clone refers to the same pipeline, so
/// after any operation consumes it, the other clones report
/// [`SeqError::AlreadyConsumed`].
pub struct Seq<T> {
    pub(crate) pipeline: Pipeline<T>,
}

impl<T> Clone for Seq<T> {
    fn clone(&self) -> Self {
        Seq {
            pipeline: self.pipeline.clone(),
        }
    }
}

impl<T: SeqBound> Seq<T> {
    pub(crate) fn from_stage(stage: Stage<T>) -> Self {
        Seq {
            pipeline: Pipeline::new(stage, None),
        }
    }

    /// Identifier of this pipeline, as it appears in errors and log events.
    pub fn id(&self) -> SeqId {
        self.pipeline.id()
    }

    /// Attach a label shown in log events and [`describe`](Self::describe).
    /// Pipelines derived from this one inherit it.
    #[must_use]
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.pipeline.set_label(label.into());
        self
    }

    /// `true` once a terminal or intermediate operation has taken this pipeline.
    pub fn is_consumed(&self) -> bool {
        self.pipeline.is_consumed()
    }

    /// Render the pending step chain, e.g. `source:vec -> map -> limit(3)`.
    ///
    /// Does not consume the pipeline.
    ///
    /// # Errors
    /// [`SeqError::AlreadyConsumed`] if the pipeline was already taken.
    pub fn describe(&self) -> Result<String> {
        self.pipeline.describe()
    }

    /// Take the stage for an intermediate step. A failure is carried into the
    /// returned pipeline and surfaces at its terminal operation.
    fn derive<U: SeqBound>(&self, op: &'static str, build: impl FnOnce(Stage<T>) -> Stage<U>) -> Seq<U> {
        let label = self.pipeline.label();
        match self.pipeline.take(op) {
            Ok(stage) => self.chain(op, build(stage), label),
            Err(e) => Seq {
                pipeline: Pipeline::failed(e, label),
            },
        }
    }

    /// Like `derive`, but reuse is reported to the caller right away.
    fn derive_checked<U: SeqBound>(
        &self,
        op: &'static str,
        build: impl FnOnce(Stage<T>) -> Stage<U>,
    ) -> Result<Seq<U>> {
        let label = self.pipeline.label();
        let stage = self.pipeline.take(op)?;
        Ok(self.chain(op, build(stage), label))
    }

    /// For steps that must see the whole input: unbounded stages are refused
    /// and left in place.
    fn derive_finite<U: SeqBound>(
        &self,
        op: &'static str,
        build: impl FnOnce(Stage<T>) -> Stage<U>,
    ) -> Result<Seq<U>> {
        let label = self.pipeline.label();
        let stage = self.pipeline.take_finite(op)?;
        Ok(self.chain(op, build(stage), label))
    }

    fn chain<U: SeqBound>(&self, op: &'static str, stage: Stage<U>, label: Option<String>) -> Seq<U> {
        let next = Pipeline::new(stage, label);
        trace!(from = %self.id(), to = %next.id(), step = op, "derived pipeline");
        Seq { pipeline: next }
    }

    /// Take the stage for a terminal operation.
    pub(crate) fn start(&self, op: &'static str) -> Result<Stage<T>> {
        let stage = self.pipeline.take(op)?;
        self.log_start(op, &stage);
        Ok(stage)
    }

    /// Take the stage for a terminal operation that must see every element.
    pub(crate) fn start_finite(&self, op: &'static str) -> Result<Stage<T>> {
        let stage = self.pipeline.take_finite(op)?;
        self.log_start(op, &stage);
        Ok(stage)
    }

    fn log_start(&self, op: &'static str, stage: &Stage<T>) {
        let label = self.pipeline.label().unwrap_or_default();
        debug!(
            seq = %self.id(),
            label = %label,
            op,
            steps = %stage.describe(),
            "running terminal operation"
        );
    }

    /// Apply `f` to each element, producing a pipeline of the results.
    ///
    /// Nothing runs until a terminal operation pulls elements; `f` is then
    /// called once per element, in source order.
    ///
    /// # Type bounds
    /// - `U: SeqBound` -- the output element type.
    /// - `F: FnMut(&T) -> U + Send + 'static` -- the closure travels with the
    ///   pipeline.
    ///
    /// # Returns
    /// A new `Seq<U>`. This handle is consumed; calling a terminal on it
    /// afterwards fails with [`SeqError::AlreadyConsumed`], and so does any
    /// pipeline derived from it again.
    ///
    /// # Example
    /// ```
    /// use seqflow::*;
    /// use seqflow::testing::*;
    ///
    /// let ages = from_vec(sample_employees()).map(|e: &Employee| e.age).to_list()?;
    /// assert_eq!(ages, vec![23, 40, 55]);
    /// # Ok::<_, seqflow::SeqError>(())
    /// ```
    pub fn map<U, F>(&self, mut f: F) -> Seq<U>
    where
        U: SeqBound,
        F: FnMut(&T) -> U + Send + 'static,
    {
        self.derive("map", move |s| {
            s.then(Step::Map, move |it| Box::new(it.map(move |x| f(&x))))
        })
    }

    /// Keep elements for which `pred` holds, preserving their relative order.
    ///
    /// # Example
    /// ```
    /// use seqflow::*;
    ///
    /// let evens = from_vec(vec![2, 4, 5, 6, 8]).filter(|i: &i32| i % 2 == 0).to_list()?;
    /// assert_eq!(evens, vec![2, 4, 6, 8]);
    /// # Ok::<_, seqflow::SeqError>(())
    /// ```
    pub fn filter<P>(&self, mut pred: P) -> Seq<T>
    where
        P: FnMut(&T) -> bool + Send + 'static,
    {
        self.derive("filter", move |s| {
            s.then(Step::Filter, move |it| Box::new(it.filter(move |x| pred(x))))
        })
    }

    /// Expand each element into zero or more outputs.
    pub fn flat_map<U, F>(&self, mut f: F) -> Seq<U>
    where
        U: SeqBound,
        F: FnMut(&T) -> Vec<U> + Send + 'static,
    {
        self.derive("flat_map", move |s| {
            s.then(Step::FlatMap, move |it| Box::new(it.flat_map(move |x| f(&x))))
        })
    }

    /// Observe each element as a terminal operation pulls it through.
    ///
    /// `side_effect` runs once per element reaching this step, in source order,
    /// and never if the pipeline is not consumed.
    ///
    /// # Example
    /// ```
    /// use seqflow::*;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let log = Arc::clone(&seen);
    /// let first = from_vec(vec![1, 2, 3, 4])
    ///     .peek(move |x: &i32| log.lock().unwrap().push(*x))
    ///     .filter(|x: &i32| *x > 1)
    ///     .find_first()?;
    /// assert_eq!(first, Some(2));
    /// assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    /// # Ok::<_, seqflow::SeqError>(())
    /// ```
    pub fn peek<F>(&self, mut side_effect: F) -> Seq<T>
    where
        F: FnMut(&T) + Send + 'static,
    {
        self.derive("peek", move |s| {
            s.then(Step::Peek, move |it| Box::new(it.inspect(move |x| side_effect(x))))
        })
    }

    /// Stable sort with a three-way comparator. The sort happens when the
    /// first element is pulled.
    ///
    /// # Errors
    /// - [`SeqError::UnboundedSource`] on an infinite source without `limit`;
    ///   the pipeline is left untouched.
    /// - [`SeqError::AlreadyConsumed`] if the pipeline was already taken.
    pub fn sorted_by<C>(&self, cmp: C) -> Result<Seq<T>>
    where
        C: FnMut(&T, &T) -> Ordering + Send + 'static,
    {
        self.derive_finite("sorted_by", move |s| {
            s.then(Step::Sorted, move |it| Box::new(SortedBy::new(it, cmp)))
        })
    }

    /// Stable sort by an extracted key.
    ///
    /// # Errors
    /// Same as [`sorted_by`](Self::sorted_by).
    pub fn sorted_by_key<K, F>(&self, mut key: F) -> Result<Seq<T>>
    where
        K: Ord,
        F: FnMut(&T) -> K + Send + 'static,
    {
        self.sorted_by(move |a, b| key(a).cmp(&key(b)))
    }

    /// Discard the first `n` elements.
    ///
    /// # Errors
    /// - [`SeqError::InvalidArgument`] when `n` is negative; the pipeline is
    ///   left untouched.
    /// - [`SeqError::AlreadyConsumed`] if the pipeline was already taken.
    pub fn skip(&self, n: i64) -> Result<Seq<T>> {
        let n = count_arg("skip", n)?;
        self.derive_checked("skip", move |s| skip_stage(s, n))
    }

    /// Yield at most `n` elements. This bounds infinite sources.
    ///
    /// # Errors
    /// Same as [`skip`](Self::skip).
    ///
    /// # Example
    /// ```
    /// use seqflow::*;
    ///
    /// let powers = iterate(2u64, |x: &u64| x * 2);
    /// assert_eq!(powers.limit(3)?.to_list()?, vec![2, 4, 8]);
    /// assert!(powers.limit(3).is_err());
    /// # Ok::<_, seqflow::SeqError>(())
    /// ```
    pub fn limit(&self, n: i64) -> Result<Seq<T>> {
        let n = count_arg("limit", n)?;
        self.derive_checked("limit", move |s| limit_stage(s, n))
    }

    /// [`skip`](Self::skip) for an unsigned count. Reuse surfaces at the
    /// terminal operation.
    pub fn skip_n(&self, n: usize) -> Seq<T> {
        self.derive("skip", move |s| skip_stage(s, n))
    }

    /// [`limit`](Self::limit) for an unsigned count. Reuse surfaces at the
    /// terminal operation.
    pub fn limit_n(&self, n: usize) -> Seq<T> {
        self.derive("limit", move |s| limit_stage(s, n))
    }
}

fn skip_stage<T: SeqBound>(s: Stage<T>, n: usize) -> Stage<T> {
    s.then(Step::Skip(n), move |it| Box::new(it.skip(n)))
}

fn limit_stage<T: SeqBound>(s: Stage<T>, n: usize) -> Stage<T> {
    let mut s = s.then(Step::Limit(n), move |it| Box::new(it.take(n)));
    s.bound = Bound::Finite;
    s
}

impl<T: SeqBound + Eq + Hash + Clone> Seq<T> {
    /// Remove duplicates, keeping the first occurrence of each value.
    ///
    /// Elements stream through a seen-set, so nothing is buffered beyond the
    /// distinct values themselves.
    ///
    /// # Errors
    /// [`SeqError::UnboundedSource`] on an infinite source without `limit`.
    pub fn distinct(&self) -> Result<Seq<T>> {
        self.derive_finite("distinct", |s| {
            s.then(Step::Distinct, |it| {
                let mut seen: HashSet<T> = HashSet::new();
                Box::new(it.filter(move |x| seen.insert(x.clone())))
            })
        })
    }
}

impl<T: SeqBound + Ord> Seq<T> {
    /// Stable sort by natural order.
    ///
    /// # Errors
    /// Same as [`sorted_by`](Self::sorted_by).
    pub fn sorted(&self) -> Result<Seq<T>> {
        self.sorted_by(|a: &T, b: &T| a.cmp(b))
    }
}

fn count_arg(op: &'static str, n: i64) -> Result<usize> {
    if n < 0 {
        warn!(op, value = n, "negative count");
        return Err(SeqError::InvalidArgument { op, value: n });
    }
    Ok(usize::try_from(n).unwrap_or(usize::MAX))
}
