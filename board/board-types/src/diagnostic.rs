//! Recoverable anomalies found during ingestion and layout.
//!
//! None of these stop processing. Each is tied to the room it was found on
//! and renders as one `[room-id] message` line.

use std::fmt;

use hex_grid::{HexCoord, Side};

use crate::code::LinkCode;
use crate::link::Link;
use crate::room::RoomId;

/// A recoverable anomaly, tagged with the room it concerns.
///
/// # Example
///
/// ```
/// use board_types::{Diagnostic, RoomId};
/// use hex_grid::Side;
///
/// let diag = Diagnostic::InvalidLinkCode {
///     room: RoomId::from("0:7"),
///     side: Side::Two,
///     code: "QQ".into(),
/// };
/// assert_eq!(diag.to_string(), "[0:7] 'QQ' is not a valid link code (side 2)");
/// assert!(diag.is_anomaly());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Diagnostic {
    /// A slot's code failed validation after normalization; the slot was dropped.
    InvalidLinkCode {
        /// Room being ingested.
        room: RoomId,
        /// Side whose code was dropped.
        side: Side,
        /// Normalized text that failed validation.
        code: String,
    },

    /// The row shares more than one link with an existing room and was dropped.
    DuplicateRoom {
        /// Rejected candidate.
        room: RoomId,
        /// Room it duplicates.
        existing: RoomId,
        /// Codes the two share.
        codes: Vec<LinkCode>,
    },

    /// The row duplicates a room in the blacklist registry and was dropped.
    BlacklistedRoom {
        /// Rejected candidate.
        room: RoomId,
        /// Blacklist room it duplicates.
        existing: RoomId,
        /// Codes the two share.
        codes: Vec<LinkCode>,
    },

    /// A link already has two owners; this room was not recorded as a third.
    LinkOverflow {
        /// Room that could not be attached.
        room: RoomId,
        /// The crowded link.
        link: Link,
    },

    /// The room has an open blank edge.
    EntrypointFound {
        /// The entrypoint room.
        room: RoomId,
    },

    /// A neighbor's target cell is taken by another room.
    Overlap {
        /// Room being expanded.
        room: RoomId,
        /// Side the neighbor lies across.
        side: Side,
        /// Neighbor that wanted the cell.
        neighbor: RoomId,
        /// Room already in the cell.
        occupant: RoomId,
        /// The contested cell.
        at: HexCoord,
    },

    /// A neighbor is already placed somewhere other than where this link says.
    AlreadyPlaced {
        /// Room being expanded.
        room: RoomId,
        /// Side the neighbor lies across.
        side: Side,
        /// Neighbor already in the grid.
        neighbor: RoomId,
        /// Where this link would put it.
        expected: HexCoord,
        /// Where it actually is.
        actual: HexCoord,
    },

    /// Layout walked from one entrypoint into another.
    ReachedEntrypoint {
        /// The entrypoint that was reached.
        room: RoomId,
        /// Entrypoint the layout started from.
        origin: RoomId,
    },
}

impl Diagnostic {
    /// Returns the room this diagnostic is tagged with.
    #[must_use]
    pub const fn room(&self) -> &RoomId {
        match self {
            Self::InvalidLinkCode { room, .. }
            | Self::DuplicateRoom { room, .. }
            | Self::BlacklistedRoom { room, .. }
            | Self::LinkOverflow { room, .. }
            | Self::EntrypointFound { room }
            | Self::Overlap { room, .. }
            | Self::AlreadyPlaced { room, .. }
            | Self::ReachedEntrypoint { room, .. } => room,
        }
    }

    /// Returns `false` for purely informational entries.
    #[must_use]
    pub const fn is_anomaly(&self) -> bool {
        !matches!(
            self,
            Self::EntrypointFound { .. } | Self::ReachedEntrypoint { .. }
        )
    }

    /// Returns `true` if this diagnostic rejected a whole row.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::DuplicateRoom { .. } | Self::BlacklistedRoom { .. }
        )
    }
}

fn join_codes(codes: &[LinkCode]) -> String {
    codes
        .iter()
        .map(LinkCode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.room())?;
        match self {
            Self::InvalidLinkCode { side, code, .. } => {
                write!(f, "'{code}' is not a valid link code (side {side})")
            }
            Self::DuplicateRoom {
                existing, codes, ..
            } => write!(
                f,
                "room has more than one dupe link to room [{existing}]: {}",
                join_codes(codes)
            ),
            Self::BlacklistedRoom {
                existing, codes, ..
            } => write!(
                f,
                "disregarding blacklisted room [{existing}]: {}",
                join_codes(codes)
            ),
            Self::LinkOverflow { link, .. } => write!(f, "too many rooms for link '{link}'"),
            Self::EntrypointFound { .. } => write!(f, "found entrypoint"),
            Self::Overlap {
                side,
                neighbor,
                occupant,
                at,
                ..
            } => write!(
                f,
                "-> ({side}) [{neighbor}]@{at} overlaps with [{occupant}]@{at}"
            ),
            Self::AlreadyPlaced {
                side,
                neighbor,
                expected,
                actual,
                ..
            } => write!(
                f,
                "-> ({side}) [{neighbor}]@{expected} is already in grid at {actual}"
            ),
            Self::ReachedEntrypoint { origin, .. } => {
                write!(f, "reached another entrypoint from [{origin}]")
            }
        }
    }
}
