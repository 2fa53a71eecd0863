//! Error types for Vitrine.

use thiserror::Error;

/// Errors reported by carousel navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    /// A jump target was outside the visible items.
    ///
    /// The controller never clamps the index; the caller decides whether to
    /// ignore the request or pick a valid position.
    #[error("index {index} is out of range for {len} visible items")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Number of visible items at the time of the request.
        len: usize,
    },
}

/// Timer-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    /// The timer ID is invalid or has already been removed.
    #[error("Invalid or expired timer ID")]
    InvalidTimerId,
}

/// A specialized Result type for carousel operations.
pub type Result<T> = std::result::Result<T, CarouselError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = CarouselError::OutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 is out of range for 3 visible items");
    }
}
