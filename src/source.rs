//! Pipeline constructors.
//!
//! Finite sources (`from_vec`, `from_slice`, `from_iter`, `empty`) own a
//! snapshot of their input, so later changes to the caller's data are never
//! observed. Infinite sources (`iterate`, `generate`) must be bounded with
//! [`Seq::limit`] before any operation that has to see every element.

use crate::collection::{Seq, SeqBound};
use crate::node::{Bound, Stage};
use crate::stream_ops::Iterate;

/// Wrap an owned, ordered collection.
///
/// # Example
/// ```
/// use seqflow::from_vec;
///
/// let ages = from_vec(vec![23, 40, 55]).map(|a: &i32| a + 1).to_list()?;
/// assert_eq!(ages, vec![24, 41, 56]);
/// # Ok::<_, seqflow::SeqError>(())
/// ```
pub fn from_vec<T: SeqBound>(items: Vec<T>) -> Seq<T> {
    Seq::from_stage(Stage::source("vec", Box::new(items.into_iter()), Bound::Finite))
}

/// Copy a borrowed slice into a new pipeline.
pub fn from_slice<T: SeqBound + Clone>(items: &[T]) -> Seq<T> {
    Seq::from_stage(Stage::source(
        "slice",
        Box::new(items.to_vec().into_iter()),
        Bound::Finite,
    ))
}

/// Wrap any finite iterator, e.g. a `BTreeSet` or a range.
///
/// The iterator is trusted to end; use [`iterate`] or [`generate`] for
/// sequences that do not.
pub fn from_iter<I>(items: I) -> Seq<I::Item>
where
    I: IntoIterator,
    I::IntoIter: Send + 'static,
    I::Item: SeqBound,
{
    Seq::from_stage(Stage::source("iter", Box::new(items.into_iter()), Bound::Finite))
}

/// A finite pipeline with no elements.
pub fn empty<T: SeqBound>() -> Seq<T> {
    Seq::from_stage(Stage::source("empty", Box::new(std::iter::empty()), Bound::Finite))
}

/// Infinite sequence `seed, step(seed), step(step(seed)), ...`.
///
/// # Example
/// ```
/// use seqflow::iterate;
///
/// let powers = iterate(2u64, |x: &u64| x * 2).skip(4)?.limit(5)?.to_list()?;
/// assert_eq!(powers, vec![32, 64, 128, 256, 512]);
/// # Ok::<_, seqflow::SeqError>(())
/// ```
pub fn iterate<T, F>(seed: T, step: F) -> Seq<T>
where
    T: SeqBound + Clone,
    F: FnMut(&T) -> T + Send + 'static,
{
    Seq::from_stage(Stage::source(
        "iterate",
        Box::new(Iterate::new(seed, step)),
        Bound::Unbounded,
    ))
}

/// Infinite sequence where every element comes from a fresh `supplier()` call.
pub fn generate<T, F>(supplier: F) -> Seq<T>
where
    T: SeqBound,
    F: FnMut() -> T + Send + 'static,
{
    Seq::from_stage(Stage::source(
        "generate",
        Box::new(std::iter::repeat_with(supplier)),
        Bound::Unbounded,
    ))
}
