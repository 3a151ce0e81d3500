//! Error types for registry lookups.

use board_types::{LinkId, RoomId};

/// Errors returned when a registry operation names something it does not hold.
///
/// Problems with the ingested data itself are reported as
/// [`Diagnostic`](board_types::Diagnostic) values, never as errors.
///
/// # Example
///
/// ```
/// use board_registry::RegistryError;
/// use board_types::RoomId;
///
/// let error = RegistryError::UnknownRoom(RoomId::from("0:12"));
/// assert_eq!(error.to_string(), "room [0:12] not found");
/// assert!(error.is_unknown_room());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// No room with this identifier was accepted.
    #[error("room [{0}] not found")]
    UnknownRoom(RoomId),

    /// The room exists but does not hold the link.
    #[error("room [{room}] has no link {link}")]
    LinkNotInRoom {
        /// The room that was asked.
        room: RoomId,
        /// The link it was expected to hold.
        link: LinkId,
    },
}

impl RegistryError {
    /// Returns `true` if this is an unknown room error.
    #[must_use]
    pub const fn is_unknown_room(&self) -> bool {
        matches!(self, Self::UnknownRoom(_))
    }
}
