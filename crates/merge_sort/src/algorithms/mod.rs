pub(crate) mod common;
pub(crate) mod merge_sort_bottom_up;
pub(crate) mod merge_sort_fixed_mid;
