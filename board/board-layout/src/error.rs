//! Error types for layout.

use board_registry::RegistryError;
use board_types::RoomId;
use hex_grid::GridError;

/// Fatal layout failures.
///
/// Overlaps and conflicting placements are not errors; they are recorded as
/// [`Diagnostic`](board_types::Diagnostic) values on the
/// [`Placement`](crate::Placement).
///
/// # Example
///
/// ```
/// use board_layout::LayoutError;
/// use board_types::RoomId;
///
/// let error = LayoutError::DepthLimitExceeded {
///     room: RoomId::from("0:40"),
///     max_depth: 32,
/// };
/// assert!(error.is_depth_limit());
/// assert!(error.to_string().contains("32"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum LayoutError {
    /// The traversal nested deeper than the configured ceiling.
    #[error("layout exceeded max depth {max_depth} at room [{room}]")]
    DepthLimitExceeded {
        /// The room that would have been placed past the ceiling.
        room: RoomId,
        /// The configured ceiling.
        max_depth: usize,
    },

    /// A room or link lookup failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A grid step failed.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// The layout configuration is invalid.
    #[error("invalid layout configuration: {0}")]
    InvalidConfig(String),
}

impl LayoutError {
    /// Returns `true` if the depth ceiling was hit.
    #[must_use]
    pub const fn is_depth_limit(&self) -> bool {
        matches!(self, Self::DepthLimitExceeded { .. })
    }

    /// Returns `true` if a registry lookup failed.
    #[must_use]
    pub const fn is_registry(&self) -> bool {
        matches!(self, Self::Registry(_))
    }
}
