//! Error types shared by the sorting engine and the harness.

use thiserror::Error;

/// Failures a sort call or a benchmark run can hit.
///
/// All input is generated internally, so these are the only two ways a run can
/// go wrong. Neither is retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Temporary buffer or dataset storage could not be reserved.
    #[error("allocation of {requested} elements failed")]
    AllocationFailure {
        /// Number of elements that were requested
        requested: usize,
    },

    /// A sub-range sort was asked for a range that is reversed or out of bounds.
    #[error("invalid range {start}..{end} for a slice of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },
}

/// Reserve exactly `additional` slots in `buf`, mapping exhaustion to
/// [`SortError::AllocationFailure`].
pub(crate) fn try_reserve<T>(buf: &mut Vec<T>, additional: usize) -> Result<(), SortError> {
    buf.try_reserve_exact(additional)
        .map_err(|_| SortError::AllocationFailure {
            requested: additional,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = SortError::AllocationFailure { requested: 42 };
        assert_eq!(err.to_string(), "allocation of 42 elements failed");

        let err = SortError::InvalidRange {
            start: 5,
            end: 2,
            len: 10,
        };
        assert_eq!(err.to_string(), "invalid range 5..2 for a slice of length 10");
    }

    #[test]
    fn test_try_reserve_small() {
        let mut buf: Vec<u64> = Vec::new();
        try_reserve(&mut buf, 16).unwrap();
        assert!(buf.capacity() >= 16);
    }

    #[test]
    fn test_try_reserve_overflow() {
        let mut buf: Vec<u64> = Vec::new();
        let err = try_reserve(&mut buf, usize::MAX).unwrap_err();
        assert_eq!(
            err,
            SortError::AllocationFailure {
                requested: usize::MAX
            }
        );
    }
}
