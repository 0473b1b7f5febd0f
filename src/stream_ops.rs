//! Iterator adapters that std does not provide in the shape pipelines need.

use crate::node::ElemIter;
use std::cmp::Ordering;

/// `seed, step(seed), step(step(seed)), ...`
///
/// Unlike `std::iter::successors`, the next term is computed only when it is
/// requested, so `limit(n)` calls `step` exactly `n - 1` times.
pub(crate) struct Iterate<T, F> {
    state: Option<T>,
    step: F,
    primed: bool,
}

impl<T, F> Iterate<T, F> {
    pub fn new(seed: T, step: F) -> Self {
        Self {
            state: Some(seed),
            step,
            primed: false,
        }
    }
}

impl<T, F> Iterator for Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.primed {
            let prev = self.state.as_ref()?;
            let next = (self.step)(prev);
            self.state = Some(next);
        } else {
            self.primed = true;
        }
        self.state.clone()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Stable sort deferred until the first element is pulled.
pub(crate) struct SortedBy<T, C> {
    pending: Option<ElemIter<T>>,
    cmp: C,
    sorted: std::vec::IntoIter<T>,
}

impl<T, C> SortedBy<T, C> {
    pub fn new(upstream: ElemIter<T>, cmp: C) -> Self {
        Self {
            pending: Some(upstream),
            cmp,
            sorted: Vec::new().into_iter(),
        }
    }
}

impl<T, C> Iterator for SortedBy<T, C>
where
    C: FnMut(&T, &T) -> Ordering,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if let Some(upstream) = self.pending.take() {
            let mut buf: Vec<T> = upstream.collect();
            buf.sort_by(|a, b| (self.cmp)(a, b));
            self.sorted = buf.into_iter();
        }
        self.sorted.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

    #[test]
    fn iterate_calls_step_only_on_demand() {
        let calls = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&calls);
        let it = Iterate::new(1u64, move |x: &u64| {
            c.fetch_add(1, AtomicOrdering::SeqCst);
            x * 3
        });
        let out: Vec<u64> = it.take(4).collect();
        assert_eq!(out, vec![1, 3, 9, 27]);
        assert_eq!(calls.load(AtomicOrdering::SeqCst), 3);
    }

    #[test]
    fn sorted_by_is_stable_and_deferred() {
        let upstream: ElemIter<(u8, char)> =
            Box::new(vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')].into_iter());
        let mut it = SortedBy::new(upstream, |a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0));
        assert!(it.pending.is_some());
        assert_eq!(it.next(), Some((1, 'b')));
        assert!(it.pending.is_none());
        assert_eq!(it.collect::<Vec<_>>(), vec![(1, 'd'), (2, 'a'), (2, 'c')]);
    }
}
