use crate::collection::{Seq, SeqBound};
use crate::error::Result;

impl<T: SeqBound> Seq<T> {
    /// Split into `(matched, unmatched)` by `pred`, preserving order in both.
    ///
    /// # Errors
    /// - [`SeqError::UnboundedSource`](crate::SeqError::UnboundedSource) on an
    ///   infinite source without `limit`.
    /// - [`SeqError::AlreadyConsumed`](crate::SeqError::AlreadyConsumed) on reuse.
    pub fn partition<P>(&self, mut pred: P) -> Result<(Vec<T>, Vec<T>)>
    where
        P: FnMut(&T) -> bool,
    {
        let stage = self.start_finite("partition")?;
        Ok(stage.iter.partition(|x| pred(x)))
    }
}
