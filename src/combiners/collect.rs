//! Collecting combiners: ToVec, Joining

use super::CombineFn;
use std::marker::PhantomData;

/// Collect inputs into a `Vec` in arrival order.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToVec<T>(pub PhantomData<T>);

impl<T> ToVec<T> {
    /// Same as `Default`.
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> CombineFn<T, Vec<T>, Vec<T>> for ToVec<T> {
    fn create(&self) -> Vec<T> {
        Vec::new()
    }

    fn add_input(&self, acc: &mut Vec<T>, v: T) {
        acc.push(v);
    }

    fn finish(&self, acc: Vec<T>) -> Vec<T> {
        acc
    }
}

/// Concatenate string-like inputs, placing `separator` between neighbours.
///
/// `Joining::default()` uses an empty separator.
#[derive(Clone, Debug, Default)]
pub struct Joining {
    separator: String,
}

impl Joining {
    /// Join with `separator` between neighbouring items.
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }
}

impl<S: AsRef<str>> CombineFn<S, Option<String>, String> for Joining {
    fn create(&self) -> Option<String> {
        None
    }

    fn add_input(&self, acc: &mut Option<String>, v: S) {
        match acc {
            Some(out) => {
                out.push_str(&self.separator);
                out.push_str(v.as_ref());
            }
            None => *acc = Some(v.as_ref().to_owned()),
        }
    }

    fn finish(&self, acc: Option<String>) -> String {
        acc.unwrap_or_default()
    }
}
