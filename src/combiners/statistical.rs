//! Statistical combiners: `AverageF64`, `SummaryStatistics`

use super::CombineFn;
use crate::error::{Result, SeqError};
use serde::{Deserialize, Serialize};

/* ===================== ToF64 ===================== */

/// Numeric values the statistical combiners accept.
///
/// Implemented for every primitive integer and float. Integers wider than
/// 53 bits round to the nearest representable `f64`.
pub trait ToF64 {
    /// Convert to `f64`, rounding if needed.
    fn to_f64(self) -> f64;
}

macro_rules! impl_to_f64 {
    ($($t:ty),*) => {
        $(
            impl ToF64 for $t {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_to_f64!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/* ===================== AverageF64 ===================== */

/// Mean of values as `f64`. Empty input produces `0.0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AverageF64;

impl<V: ToF64> CombineFn<V, (f64, u64), f64> for AverageF64 {
    fn create(&self) -> (f64, u64) {
        (0.0, 0)
    }

    fn add_input(&self, acc: &mut (f64, u64), v: V) {
        acc.0 += v.to_f64();
        acc.1 += 1;
    }

    #[allow(clippy::cast_precision_loss)]
    fn finish(&self, acc: (f64, u64)) -> f64 {
        if acc.1 == 0 { 0.0 } else { acc.0 / acc.1 as f64 }
    }
}

/* ===================== SummaryStatistics ===================== */

/// Count, sum, min, max and mean of a numeric projection, gathered in one pass.
///
/// `count` and `sum` are `0` for an empty input. [`min`](Self::min) and
/// [`max`](Self::max) have no meaningful value then and report
/// [`SeqError::EmptySequence`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    count: u64,
    sum: f64,
    min: Option<f64>,
    max: Option<f64>,
}

impl SummaryStats {
    /// Fold one value in.
    pub fn accept(&mut self, v: f64) {
        self.count += 1;
        self.sum += v;
        self.min = Some(self.min.map_or(v, |m| m.min(v)));
        self.max = Some(self.max.map_or(v, |m| m.max(v)));
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Arithmetic mean, `0.0` when empty.
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> f64 {
        if self.count == 0 { 0.0 } else { self.sum / self.count as f64 }
    }

    /// # Errors
    /// [`SeqError::EmptySequence`] when no values were seen.
    pub fn min(&self) -> Result<f64> {
        self.min.ok_or(SeqError::EmptySequence { op: "summary_stats.min" })
    }

    /// # Errors
    /// [`SeqError::EmptySequence`] when no values were seen.
    pub fn max(&self) -> Result<f64> {
        self.max.ok_or(SeqError::EmptySequence { op: "summary_stats.max" })
    }
}

/// [`CombineFn`] producing [`SummaryStats`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SummaryStatistics;

impl<V: ToF64> CombineFn<V, SummaryStats, SummaryStats> for SummaryStatistics {
    fn create(&self) -> SummaryStats {
        SummaryStats::default()
    }

    fn add_input(&self, acc: &mut SummaryStats, v: V) {
        acc.accept(v.to_f64());
    }

    fn finish(&self, acc: SummaryStats) -> SummaryStats {
        acc
    }
}
