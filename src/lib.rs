//! # seqflow
//!
//! Lazy, single-use **sequence pipelines** for in-memory data. Build a chain of
//! transformations over a collection or an infinite generator, then run it
//! once with a terminal operation.
//!
//! ## Key Features
//!
//! - **Lazy evaluation** - nothing runs until a terminal operation pulls elements
//! - **Pull-based** - one element at a time; only sorting and grouping buffer
//! - **Infinite sources** - `iterate` and `generate`, made safe with `limit`
//! - **Single-use pipelines** - reuse is reported as [`SeqError::AlreadyConsumed`]
//! - **Grouping and folding** - `group_by`, `partition`, `summary_stats`, [`combiners`]
//! - **Explicit errors** - no panics for empty input or misuse, every failure is a [`SeqError`]
//!
//! ## Quick Start
//!
//! ```
//! use seqflow::*;
//!
//! let salaries = from_vec(vec![100, 1000, 10000]);
//! let total = salaries.map(|s: &i32| s + 100).reduce(0, |acc, s| acc + s)?;
//! assert_eq!(total, 11_400);
//! # Ok::<_, seqflow::SeqError>(())
//! ```
//!
//! ## Core Concepts
//!
//! ### Seq
//!
//! A [`Seq<T>`] owns its source and a chain of pending steps. Every operation
//! takes `&self`; the first one to run takes the pipeline, and any later call on
//! the same handle (or a clone of it) fails with
//! [`SeqError::AlreadyConsumed`].
//!
//! ### Sources
//!
//! - [`from_vec`], [`from_slice`], [`from_iter`], [`empty`] - finite
//! - [`iterate`] - `seed, f(seed), f(f(seed)), ...`
//! - [`generate`] - one fresh `supplier()` call per element
//!
//! ### Intermediate operations
//!
//! [`map`](Seq::map), [`filter`](Seq::filter), [`flat_map`](Seq::flat_map),
//! [`peek`](Seq::peek), [`distinct`](Seq::distinct),
//! [`sorted_by`](Seq::sorted_by), [`skip`](Seq::skip), [`limit`](Seq::limit).
//!
//! `distinct` and `sorted_by` have to see every element and are rejected with
//! [`SeqError::UnboundedSource`] on an infinite source that has not been
//! limited.
//!
//! ### Terminal operations
//!
//! [`for_each`](Seq::for_each), [`to_list`](Seq::to_list),
//! [`reduce`](Seq::reduce), [`find_first`](Seq::find_first),
//! [`max_by_key`](Seq::max_by_key), [`min_by_key`](Seq::min_by_key),
//! [`all_match`](Seq::all_match), [`any_match`](Seq::any_match),
//! [`none_match`](Seq::none_match), [`group_by`](Seq::group_by),
//! [`group_by_then_map`](Seq::group_by_then_map), [`partition`](Seq::partition),
//! [`summary_stats`](Seq::summary_stats), [`join`](Seq::join),
//! [`combine`](Seq::combine).
//!
//! ## Infinite sequences
//!
//! ```
//! use seqflow::*;
//!
//! let evens = iterate(0u32, |n: &u32| n + 2);
//! assert_eq!(
//!     evens.sorted_by(|a: &u32, b: &u32| a.cmp(b)).err(),
//!     Some(SeqError::UnboundedSource { op: "sorted_by" })
//! );
//! // The rejected pipeline is still usable once bounded.
//! assert_eq!(evens.limit(3)?.to_list()?, vec![0, 2, 4]);
//! # Ok::<_, seqflow::SeqError>(())
//! ```
//!
//! ## Logging
//!
//! Pipelines emit `tracing` events: `debug` when a terminal operation starts
//! (with the step chain), `warn` when an operation is rejected. Install any
//! subscriber to see them.
//!
//! ## Module Overview
//!
//! - [`collection`] - `Seq` and intermediate operations
//! - [`source`] - constructors
//! - [`runner`] - terminal operations
//! - [`combiners`] - reusable folds (`Count`, `Sum`, `Joining`, `SummaryStatistics`, ...)
//! - [`extensions`] - reusable composite transforms
//! - [`testing`] - assertions and fixtures for tests

pub mod collection;
pub mod combiners;
pub mod error;
pub mod extensions;
pub mod runner;
pub mod seq_id;
pub mod source;
pub mod testing;
pub mod utils;

mod helpers;
mod node;
mod pipeline;
mod stream_ops;

// General re-exports
pub use collection::{Seq, SeqBound};
pub use combiners::{
    AverageF64, CombineFn, Count, Joining, Max, Min, Sum, SummaryStatistics, SummaryStats, ToF64,
    ToVec,
};
pub use error::{Result, SeqError};
pub use seq_id::SeqId;
pub use source::{empty, from_iter, from_slice, from_vec, generate, iterate};
