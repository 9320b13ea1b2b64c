//! Bottom-up merge sort over `i32` slices.
//!
//! [`merge_sort`] is the entry point most callers want. [`sort_i32_with_ctx`]
//! selects a strategy explicitly and reuses a [`SortContext`] so repeated
//! sorts share one scratch buffer.

mod algorithms;
mod error;

use std::fmt;

use tracing::debug;

pub use error::SortError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    /// Merges adjacent runs `[l, l + w)` and `[l + w, l + 2w)` across the
    /// whole slice, doubling `w` each pass.
    MergeSortBottomUp,
    /// Merges runs of the two halves around a midpoint fixed at
    /// `ceil(len / 2)`. Only valid for lengths accepted by [`supports_len`].
    MergeSortFixedMid,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 2] = [
    SortAlgorithm::MergeSortBottomUp,
    SortAlgorithm::MergeSortFixedMid,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::MergeSortBottomUp => "merge_sort_bottom_up",
        SortAlgorithm::MergeSortFixedMid => "merge_sort_fixed_mid",
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(algorithm_name(*self))
    }
}

pub fn supports_len(algo: SortAlgorithm, len: usize) -> bool {
    match algo {
        SortAlgorithm::MergeSortBottomUp => true,
        SortAlgorithm::MergeSortFixedMid => algorithms::merge_sort_fixed_mid::supports_len(len),
    }
}

/// Scratch storage shared by consecutive sorts.
///
/// The buffer only grows, and growth goes through `try_reserve_exact` so an
/// allocation failure comes back as [`SortError::AllocationFailed`].
#[derive(Clone, Debug, Default)]
pub struct SortContext {
    scratch: Vec<i32>,
}

impl SortContext {
    pub fn with_capacity(len: usize) -> Result<Self, SortError> {
        let mut ctx = Self::default();
        ctx.try_ensure_scratch(len)?;
        Ok(ctx)
    }

    pub fn scratch_capacity(&self) -> usize {
        self.scratch.capacity()
    }

    #[inline]
    pub(crate) fn try_ensure_scratch(&mut self, len: usize) -> Result<&mut [i32], SortError> {
        if self.scratch.len() < len {
            self.scratch
                .try_reserve_exact(len - self.scratch.len())
                .map_err(|source| SortError::AllocationFailed { len, source })?;
            self.scratch.resize(len, 0);
        }
        Ok(&mut self.scratch[..len])
    }
}

pub fn is_sorted_non_decreasing(data: &[i32]) -> bool {
    algorithms::common::is_sorted_non_decreasing(data)
}

/// Sorts `data` in non-decreasing order with the bottom-up strategy.
///
/// Slices of length 0 or 1 are returned untouched. The only failure is the
/// scratch allocation.
pub fn merge_sort(data: &mut [i32]) -> Result<(), SortError> {
    sort_i32(SortAlgorithm::MergeSortBottomUp, data)
}

/// Sorts `data[..n]` in place and leaves `data[n..]` as it was.
pub fn merge_sort_prefix(data: &mut [i32], n: usize) -> Result<(), SortError> {
    let len = data.len();
    let prefix = data
        .get_mut(..n)
        .ok_or(SortError::PrefixOutOfBounds { n, len })?;
    merge_sort(prefix)
}

pub fn sort_i32(algo: SortAlgorithm, data: &mut [i32]) -> Result<(), SortError> {
    let mut ctx = SortContext::default();
    sort_i32_with_ctx(algo, data, &mut ctx)
}

pub fn sort_i32_with_ctx(
    algo: SortAlgorithm,
    data: &mut [i32],
    ctx: &mut SortContext,
) -> Result<(), SortError> {
    let len = data.len();
    if !supports_len(algo, len) {
        return Err(SortError::UnsupportedLength {
            algorithm: algo,
            len,
        });
    }

    debug!(algorithm = algorithm_name(algo), len, "sorting");
    match algo {
        SortAlgorithm::MergeSortBottomUp => algorithms::merge_sort_bottom_up::sort(data, ctx),
        SortAlgorithm::MergeSortFixedMid => algorithms::merge_sort_fixed_mid::sort(data, ctx),
    }
}
