//! Error types for hex grid operations.

/// Errors that can occur during hex grid operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum GridError {
    /// A side index outside `1..=6` was used as a direction.
    #[error("invalid side position: {0} (expected 1..=6)")]
    InvalidSide(i64),

    /// Integer overflow occurred during coordinate calculation.
    #[error("integer overflow stepping from ({column}, {row})")]
    CoordinateOverflow {
        /// Column of the coordinate being stepped from.
        column: i32,
        /// Row of the coordinate being stepped from.
        row: i32,
    },
}

impl GridError {
    /// Returns `true` if this error reports an invalid side.
    ///
    /// # Example
    ///
    /// ```
    /// use hex_grid::GridError;
    ///
    /// assert!(GridError::InvalidSide(7).is_invalid_side());
    /// ```
    #[must_use]
    pub const fn is_invalid_side(&self) -> bool {
        matches!(self, Self::InvalidSide(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_side_display() {
        let error = GridError::InvalidSide(0);
        let msg = error.to_string();
        assert!(msg.contains("invalid side"));
        assert!(msg.contains('0'));
    }

    #[test]
    fn test_overflow_display() {
        let error = GridError::CoordinateOverflow {
            column: i32::MAX,
            row: 0,
        };
        assert!(error.to_string().contains("overflow"));
        assert!(!error.is_invalid_side());
    }
}
