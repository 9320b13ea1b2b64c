use tracing::trace;

use crate::{SortContext, SortError};

use super::common;

pub fn sort(data: &mut [i32], ctx: &mut SortContext) -> Result<(), SortError> {
    let len = data.len();
    if len < 2 {
        return Ok(());
    }
    if common::is_sorted_non_decreasing(data) {
        return Ok(());
    }

    let buf = ctx.try_ensure_scratch(len)?;

    let mut width = 1usize;
    let mut src_is_buf = false;
    while width < len {
        trace!(width, "merge pass");
        if src_is_buf {
            merge_pass(buf, data, width);
        } else {
            merge_pass(data, buf, width);
        }
        src_is_buf = !src_is_buf;
        width = width.saturating_mul(2);
    }

    if src_is_buf {
        data.copy_from_slice(buf);
    }
    Ok(())
}

fn merge_pass(src: &[i32], dst: &mut [i32], width: usize) {
    let len = src.len();
    let mut left = 0usize;
    while left < len {
        let mid = left.saturating_add(width).min(len);
        let right = mid.saturating_add(width).min(len);

        if mid >= right || src[mid - 1] <= src[mid] {
            dst[left..right].copy_from_slice(&src[left..right]);
        } else {
            common::merge_ranges(src, dst, left, mid, right);
        }

        left = right;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_pass_merges_adjacent_pairs() {
        let src = [8, 4, 2, 1, 7, 6, 5];
        let mut dst = [0; 7];
        merge_pass(&src, &mut dst, 1);
        assert_eq!(dst, [4, 8, 1, 2, 6, 7, 5]);

        let mut next = [0; 7];
        merge_pass(&dst, &mut next, 2);
        assert_eq!(next, [1, 2, 4, 8, 5, 6, 7]);
    }

    #[test]
    fn odd_lengths_carry_the_tail() {
        for len in [3_usize, 5, 6, 9, 17, 33] {
            let mut data: Vec<i32> = (0..len as i32).rev().collect();
            let mut ctx = SortContext::default();
            sort(&mut data, &mut ctx).unwrap();
            let expected: Vec<i32> = (0..len as i32).collect();
            assert_eq!(data, expected, "len={len}");
        }
    }

    #[test]
    fn presorted_input_skips_allocation() {
        let mut data = [1, 2, 3, 3, 10];
        let mut ctx = SortContext::default();
        sort(&mut data, &mut ctx).unwrap();
        assert_eq!(data, [1, 2, 3, 3, 10]);
        assert_eq!(ctx.scratch_capacity(), 0);
    }
}
