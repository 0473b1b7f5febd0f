//! Packaging reusable chains of operations.
//!
//! A [`CompositeTransform`] bundles several intermediate steps behind one
//! name, so the same cleanup or projection can be applied to many pipelines.

use crate::collection::{Seq, SeqBound};
use crate::error::Result;

/// A named, reusable sequence of intermediate operations.
///
/// # Example
/// ```
/// use seqflow::*;
/// use seqflow::extensions::CompositeTransform;
///
/// struct TopEarners(usize);
///
/// impl CompositeTransform<(String, u32), String> for TopEarners {
///     fn expand(&self, input: &Seq<(String, u32)>) -> Result<Seq<String>> {
///         Ok(input
///             .sorted_by(|a: &(String, u32), b: &(String, u32)| b.1.cmp(&a.1))?
///             .limit_n(self.0)
///             .map(|e: &(String, u32)| e.0.clone()))
///     }
/// }
///
/// let staff = from_vec(vec![
///     ("Rob".to_string(), 100),
///     ("Bill".to_string(), 1000),
///     ("Brian".to_string(), 10000),
/// ]);
/// let top = staff.apply(&TopEarners(2))?.to_list()?;
/// assert_eq!(top, vec!["Brian", "Bill"]);
/// # Ok::<_, seqflow::SeqError>(())
/// ```
pub trait CompositeTransform<I: SeqBound, O: SeqBound> {
    /// Build the output pipeline from `input`.
    ///
    /// # Errors
    /// Whatever the wrapped operations report.
    fn expand(&self, input: &Seq<I>) -> Result<Seq<O>>;
}

impl<T: SeqBound> Seq<T> {
    /// Apply a [`CompositeTransform`] to this pipeline.
    ///
    /// # Errors
    /// Whatever the transform reports.
    pub fn apply<O, CT>(&self, transform: &CT) -> Result<Seq<O>>
    where
        O: SeqBound,
        CT: CompositeTransform<T, O>,
    {
        transform.expand(self)
    }
}
