//! Links: the shared edges between tiles.

use std::fmt;

use crate::code::LinkCode;

/// A hexagon edge connector, identified by its code and openness.
///
/// The same code on a closed side and on an open side are different edge
/// types, so `Link` derives `Eq` and `Hash` over both fields and doubles as
/// the deduplication key inside a registry.
///
/// # Example
///
/// ```
/// use board_types::{Link, LinkCode};
///
/// let entry = Link::new(LinkCode::blank(), true);
/// assert!(entry.is_entrypoint());
/// assert!(!entry.is_wall());
///
/// let wall = Link::new(LinkCode::blank(), false);
/// assert!(wall.is_wall());
/// assert_ne!(entry, wall);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link {
    /// The edge code.
    pub code: LinkCode,
    /// Whether the edge was marked passable on the tile that declared it.
    pub is_opening: bool,
}

impl Link {
    /// Creates a new link.
    #[must_use]
    pub const fn new(code: LinkCode, is_opening: bool) -> Self {
        Self { code, is_opening }
    }

    /// Returns `true` if the code is the canonical blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.code.is_blank()
    }

    /// Returns `true` for an open blank edge: a way off the known map.
    #[must_use]
    pub fn is_entrypoint(&self) -> bool {
        self.is_opening && self.is_blank()
    }

    /// Returns `true` for a closed blank edge: a plain wall.
    #[must_use]
    pub fn is_wall(&self) -> bool {
        !self.is_opening && self.is_blank()
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opening {
            write!(f, "{}(open)", self.code)
        } else {
            write!(f, "{}", self.code)
        }
    }
}

/// Index of a link instance inside one registry.
///
/// Non-blank links with the same [`Link`] value share one id. Every blank
/// edge gets its own id, so unrelated walls never connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkId(pub usize);

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A link placed on one side of a room: the instance id plus its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotLink {
    /// Registry-wide instance id.
    pub id: LinkId,
    /// Code and openness.
    pub link: Link,
}

impl SlotLink {
    /// Creates a new slot entry.
    #[must_use]
    pub const fn new(id: LinkId, link: Link) -> Self {
        Self { id, link }
    }

    /// Shortcut for the link's code.
    #[must_use]
    pub const fn code(&self) -> LinkCode {
        self.link.code
    }
}
