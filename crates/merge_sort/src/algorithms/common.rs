#[inline]
pub fn is_sorted_non_decreasing(data: &[i32]) -> bool {
    data.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Merges `src[left..mid]` and `src[mid..right]` into `dst[left..right]`.
///
/// On equal keys the left run wins, so the merge is stable.
#[inline]
pub fn merge_ranges(src: &[i32], dst: &mut [i32], left: usize, mid: usize, right: usize) {
    let mut i = left;
    let mut j = mid;
    let mut k = left;

    while i < mid && j < right {
        if src[i] <= src[j] {
            dst[k] = src[i];
            i += 1;
        } else {
            dst[k] = src[j];
            j += 1;
        }
        k += 1;
    }

    if i < mid {
        dst[k..(k + (mid - i))].copy_from_slice(&src[i..mid]);
    } else if j < right {
        dst[k..(k + (right - j))].copy_from_slice(&src[j..right]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_predicate() {
        assert!(is_sorted_non_decreasing(&[]));
        assert!(is_sorted_non_decreasing(&[3]));
        assert!(is_sorted_non_decreasing(&[1, 2, 2, 9]));
        assert!(!is_sorted_non_decreasing(&[2, 1]));
        assert!(!is_sorted_non_decreasing(&[i32::MIN, 0, i32::MAX, -1]));
    }

    #[test]
    fn merge_ranges_drains_both_sides() {
        let src = [9, 1, 4, 7, 2, 3, 8, 9];
        let mut dst = [0; 8];
        merge_ranges(&src, &mut dst, 1, 4, 7);
        assert_eq!(dst, [0, 1, 2, 3, 4, 7, 8, 0]);

        let src = [5, 6, 1, 2];
        let mut dst = [0; 4];
        merge_ranges(&src, &mut dst, 0, 2, 4);
        assert_eq!(dst, [1, 2, 5, 6]);
    }

    #[test]
    fn merge_ranges_with_empty_run() {
        let src = [3, 4, 5];
        let mut dst = [0; 3];
        merge_ranges(&src, &mut dst, 0, 3, 3);
        assert_eq!(dst, src);
    }
}
