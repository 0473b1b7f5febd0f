//! Counting and arithmetic combiners: Count, Sum, Min, Max

use super::CombineFn;
use std::marker::PhantomData;
use std::mem::take;
use std::ops::Add;

/* ===================== Count ===================== */

/// Number of inputs, whatever their type.
#[derive(Clone, Copy, Debug, Default)]
pub struct Count;

impl<V> CombineFn<V, u64, u64> for Count {
    fn create(&self) -> u64 {
        0
    }

    fn add_input(&self, acc: &mut u64, _v: V) {
        *acc += 1;
    }

    fn finish(&self, acc: u64) -> u64 {
        acc
    }
}

/* ===================== Sum<T> ===================== */

/// Sum of values, starting from `T::default()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sum<T>(pub PhantomData<T>);

impl<T> Sum<T> {
    /// Same as `Default`.
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> CombineFn<T, T, T> for Sum<T>
where
    T: Add<Output = T> + Default,
{
    fn create(&self) -> T {
        T::default()
    }

    fn add_input(&self, acc: &mut T, v: T) {
        *acc = take(acc) + v;
    }

    fn finish(&self, acc: T) -> T {
        acc
    }
}

/* ===================== Min<T> / Max<T> ===================== */

/// Smallest value; the first one wins a tie. `None` for no inputs.
#[derive(Clone, Copy, Debug, Default)]
pub struct Min<T>(pub PhantomData<T>);

impl<T> Min<T> {
    /// Same as `Default`.
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: Ord> CombineFn<T, Option<T>, Option<T>> for Min<T> {
    fn create(&self) -> Option<T> {
        None
    }

    fn add_input(&self, acc: &mut Option<T>, v: T) {
        match acc {
            Some(cur) if v >= *cur => {}
            _ => *acc = Some(v),
        }
    }

    fn finish(&self, acc: Option<T>) -> Option<T> {
        acc
    }
}

/// Largest value; the last one wins a tie. `None` for no inputs.
#[derive(Clone, Copy, Debug, Default)]
pub struct Max<T>(pub PhantomData<T>);

impl<T> Max<T> {
    /// Same as `Default`.
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: Ord> CombineFn<T, Option<T>, Option<T>> for Max<T> {
    fn create(&self) -> Option<T> {
        None
    }

    fn add_input(&self, acc: &mut Option<T>, v: T) {
        match acc {
            Some(cur) if v < *cur => {}
            _ => *acc = Some(v),
        }
    }

    fn finish(&self, acc: Option<T>) -> Option<T> {
        acc
    }
}
