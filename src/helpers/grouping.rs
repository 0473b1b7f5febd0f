//! Grouping terminals for [`Seq`].
//!
//! - [`Seq::group_by`] -- partition elements by a derived key.
//! - [`Seq::group_by_then_map`] -- group, project each element, and fold every
//!   group with a [`CombineFn`].
//!
//! Groups come back as `Vec<(K, _)>` in the order each key was first seen,
//! and elements keep their source order inside a group. Both operations must
//! see every element, so they refuse infinite sources that lack a `limit`.

use crate::collection::{Seq, SeqBound};
use crate::combiners::CombineFn;
use crate::error::Result;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::debug;

impl<T: SeqBound> Seq<T> {
    /// Group elements by `key`.
    ///
    /// # Example
    /// ```
    /// use seqflow::from_vec;
    ///
    /// let groups = from_vec(vec!["Rob", "Bill", "Brian"])
    ///     .group_by(|name: &&str| name.chars().next())?;
    /// assert_eq!(groups, vec![
    ///     (Some('R'), vec!["Rob"]),
    ///     (Some('B'), vec!["Bill", "Brian"]),
    /// ]);
    /// # Ok::<_, seqflow::SeqError>(())
    /// ```
    ///
    /// # Errors
    /// - [`SeqError::UnboundedSource`](crate::SeqError::UnboundedSource) on an
    ///   infinite source without `limit`.
    /// - [`SeqError::AlreadyConsumed`](crate::SeqError::AlreadyConsumed) on reuse.
    pub fn group_by<K, F>(&self, key: F) -> Result<Vec<(K, Vec<T>)>>
    where
        K: Eq + Hash + Clone,
        F: FnMut(&T) -> K,
    {
        let stage = self.start_finite("group_by")?;
        let groups = group_ordered(stage.iter, key, Vec::new, |acc: &mut Vec<T>, t| acc.push(t));
        debug!(seq = %self.id(), groups = groups.len(), "group_by finished");
        Ok(groups)
    }

    /// Group by `key`, project each element with `value`, and fold the
    /// projections of every group with `comb`.
    ///
    /// # Example
    /// ```
    /// use seqflow::*;
    ///
    /// let people = vec![("Rob", "Schwartz"), ("Bill", "Gates"), ("Rob", "Pike")];
    /// let surnames = from_vec(people).group_by_then_map(
    ///     |p: &(&str, &str)| p.0,
    ///     |p: &(&str, &str)| p.1,
    ///     Joining::new("/"),
    /// )?;
    /// assert_eq!(surnames, vec![
    ///     ("Rob", "Schwartz/Pike".to_string()),
    ///     ("Bill", "Gates".to_string()),
    /// ]);
    /// # Ok::<_, seqflow::SeqError>(())
    /// ```
    ///
    /// # Errors
    /// Same as [`group_by`](Self::group_by).
    pub fn group_by_then_map<K, V, A, O, KF, VF, C>(
        &self,
        key: KF,
        mut value: VF,
        comb: C,
    ) -> Result<Vec<(K, O)>>
    where
        K: Eq + Hash + Clone,
        KF: FnMut(&T) -> K,
        VF: FnMut(&T) -> V,
        C: CombineFn<V, A, O>,
    {
        let stage = self.start_finite("group_by_then_map")?;
        let groups = group_ordered(
            stage.iter,
            key,
            || comb.create(),
            |acc: &mut A, t: T| comb.add_input(acc, value(&t)),
        );
        debug!(seq = %self.id(), groups = groups.len(), "group_by_then_map finished");
        Ok(groups
            .into_iter()
            .map(|(k, acc)| (k, comb.finish(acc)))
            .collect())
    }
}

/// Fold `items` into one accumulator per key, keeping first-seen key order.
fn group_ordered<T, K, A>(
    items: impl Iterator<Item = T>,
    mut key: impl FnMut(&T) -> K,
    mut create: impl FnMut() -> A,
    mut add: impl FnMut(&mut A, T),
) -> Vec<(K, A)>
where
    K: Eq + Hash + Clone,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, A)> = Vec::new();
    for item in items {
        let k = key(&item);
        let slot = match index.get(&k).copied() {
            Some(i) => i,
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, create()));
                groups.len() - 1
            }
        };
        add(&mut groups[slot].1, item);
    }
    groups
}
