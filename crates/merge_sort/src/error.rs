use std::collections::TryReserveError;

use thiserror::Error;

use crate::SortAlgorithm;

#[derive(Debug, Error)]
pub enum SortError {
    /// The scratch buffer could not be grown to `len` elements.
    #[error("failed to allocate a scratch buffer of {len} elements")]
    AllocationFailed {
        len: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("{algorithm} cannot sort {len} elements")]
    UnsupportedLength { algorithm: SortAlgorithm, len: usize },

    /// `n` was larger than the slice handed to the prefix sort.
    #[error("prefix length {n} exceeds slice length {len}")]
    PrefixOutOfBounds { n: usize, len: usize },
}
