//! Bottom-up merge that pairs runs from the two halves `[0, mid)` and
//! `[mid, len)` around a midpoint fixed at `ceil(len / 2)`.
//!
//! Every pass walks both halves in lockstep, merging the `k`-th run of the
//! left half with the `k`-th run of the right half. The output of one pass
//! is therefore the interleaving the next pass expects only when the two
//! halves split evenly into runs at every width, which holds for lengths of
//! the form `2^k` and `2^k - 1`. Other lengths are rejected before sorting,
//! see [`supports_len`].

use tracing::trace;

use crate::{SortContext, SortError};

/// Whether the fixed midpoint windowing produces a sorted permutation for
/// inputs of `len` elements.
#[inline]
pub fn supports_len(len: usize) -> bool {
    len.is_power_of_two() || len & len.wrapping_add(1) == 0
}

pub fn sort(data: &mut [i32], ctx: &mut SortContext) -> Result<(), SortError> {
    let len = data.len();
    if len < 2 {
        return Ok(());
    }

    let mid = len.div_ceil(2);
    let buf = ctx.try_ensure_scratch(len)?;

    let mut width = 1usize;
    while width < len {
        trace!(width, mid, "fixed-mid merge pass");
        merge_pass(data, buf, mid, width);
        data.copy_from_slice(buf);
        width = width.saturating_mul(2);
    }
    Ok(())
}

fn merge_pass(src: &[i32], dst: &mut [i32], mid: usize, width: usize) {
    let len = src.len();
    let mut i = 0usize;
    let mut j = mid;
    let mut k = 0usize;

    let mut step = width;
    while step <= mid {
        let right_end = (mid + step).min(len);

        while i < step && j < right_end {
            if src[i] <= src[j] {
                dst[k] = src[i];
                i += 1;
            } else {
                dst[k] = src[j];
                j += 1;
            }
            k += 1;
        }
        while i < step {
            dst[k] = src[i];
            i += 1;
            k += 1;
        }
        while j < right_end {
            dst[k] = src[j];
            j += 1;
            k += 1;
        }

        step += width;
    }

    debug_assert_eq!(k, len, "fixed-mid pass left {} slots unwritten", len - k);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_lengths() {
        let supported: Vec<usize> = (0..70).filter(|&len| supports_len(len)).collect();
        assert_eq!(
            supported,
            [0, 1, 2, 3, 4, 7, 8, 15, 16, 31, 32, 63, 64]
        );
        assert!(supports_len(usize::MAX));
        assert!(!supports_len(usize::MAX - 1));
    }

    #[test]
    fn first_pass_pairs_the_halves() {
        let src = [8, 4, 2, 1, 7, 6, 5, 4];
        let mut dst = [0; 8];
        merge_pass(&src, &mut dst, 4, 1);
        assert_eq!(dst, [7, 8, 4, 6, 2, 5, 1, 4]);
    }

    #[test]
    fn demo_input() {
        let mut data = [8, 4, 2, 1, 7, 6, 5, 4];
        let mut ctx = SortContext::default();
        sort(&mut data, &mut ctx).unwrap();
        assert_eq!(data, [1, 2, 4, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn odd_supported_length() {
        let mut data = [9, -3, 7, 0, 7, 2, -8];
        let mut ctx = SortContext::default();
        sort(&mut data, &mut ctx).unwrap();
        assert_eq!(data, [-8, -3, 0, 2, 7, 7, 9]);
    }
}
