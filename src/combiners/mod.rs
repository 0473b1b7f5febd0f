//! Reusable folds for [`Seq::combine`](crate::Seq::combine) and
//! [`Seq::group_by_then_map`](crate::Seq::group_by_then_map).
//!
//! A [`CombineFn`] describes a fold as three steps: create an empty
//! accumulator, add one input at a time, finish into the output. Built-ins:
//!
//! - [`Count`] -- number of inputs.
//! - [`Sum<T>`] -- sum of values.
//! - [`Min<T>`] / [`Max<T>`] -- extremum, `None` when there were no inputs.
//! - [`AverageF64`] -- mean as `f64`, `0.0` when empty.
//! - [`SummaryStatistics`] -- count, sum, min, max and mean in one pass.
//! - [`Joining`] -- concatenate strings with a separator.
//! - [`ToVec`] -- collect the inputs in order.
//!
//! `AverageF64` and `SummaryStatistics` take any primitive number through
//! [`ToF64`].
//!
//! # Examples
//! ```
//! use seqflow::*;
//!
//! let total = from_vec(vec![1u64, 2, 3]).combine(Sum::<u64>::new())?;
//! assert_eq!(total, 6);
//!
//! let by_parity = from_vec(vec![1u32, 2, 3, 4, 5])
//!     .group_by_then_map(|n: &u32| n % 2 == 0, |n: &u32| *n, Count)?;
//! assert_eq!(by_parity, vec![(false, 3), (true, 2)]);
//! # Ok::<_, seqflow::SeqError>(())
//! ```

mod basic;
mod collect;
mod statistical;

pub use basic::{Count, Max, Min, Sum};
pub use collect::{Joining, ToVec};
pub use statistical::{AverageF64, SummaryStatistics, SummaryStats, ToF64};

/// A fold over values of type `V` with accumulator `A` and output `O`.
pub trait CombineFn<V, A, O> {
    /// A fresh, empty accumulator.
    fn create(&self) -> A;
    /// Fold one value into the accumulator.
    fn add_input(&self, acc: &mut A, v: V);
    /// Turn the accumulator into the output.
    fn finish(&self, acc: A) -> O;
}

/// Run `comb` over `values` from start to end.
pub(crate) fn fold_with<V, A, O, C>(comb: &C, values: impl Iterator<Item = V>) -> O
where
    C: CombineFn<V, A, O>,
{
    let mut acc = comb.create();
    for v in values {
        comb.add_input(&mut acc, v);
    }
    comb.finish(acc)
}
