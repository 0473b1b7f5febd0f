//! Small helpers for working with floating-point keys.

use std::cmp::Ordering;

/// `f64` with a total order (`f64::total_cmp`), so float fields can feed the
/// `Ord`-keyed operations such as [`Seq::max_by_key`](crate::Seq::max_by_key)
/// or [`Seq::sorted_by_key`](crate::Seq::sorted_by_key).
///
/// ```
/// use seqflow::{from_vec, utils::OrdF64};
///
/// let top = from_vec(vec![0.25, 0.75, 0.5]).max_by_key(|x: &f64| OrdF64(*x))?;
/// assert_eq!(top, 0.75);
/// # Ok::<_, seqflow::SeqError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrdF64(pub f64);

impl Eq for OrdF64 {}

impl PartialOrd for OrdF64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrdF64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for OrdF64 {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

/// Turn an `f64` projection into an `Ord` key.
///
/// ```
/// use seqflow::{from_vec, utils::f64_key};
///
/// let asc = from_vec(vec![2.5, -1.0, 0.0]).collect_sorted_by_key(f64_key(|x: &f64| *x))?;
/// assert_eq!(asc, vec![-1.0, 0.0, 2.5]);
/// # Ok::<_, seqflow::SeqError>(())
/// ```
pub fn f64_key<T>(mut f: impl FnMut(&T) -> f64) -> impl FnMut(&T) -> OrdF64 {
    move |t| OrdF64(f(t))
}
