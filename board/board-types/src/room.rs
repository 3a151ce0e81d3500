//! Rooms: hexagon tiles with six link slots.

use std::collections::BTreeSet;
use std::fmt;

use hex_grid::Side;

use crate::code::LinkCode;
use crate::link::{LinkId, SlotLink};

/// Opaque room identifier, conventionally `source-tag:row-number`.
///
/// # Example
///
/// ```
/// use board_types::RoomId;
///
/// let id = RoomId::from_source("phase1", 12);
/// assert_eq!(id.as_str(), "phase1:12");
/// assert_eq!(id.to_string(), "phase1:12");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RoomId(String);

impl RoomId {
    /// Creates an identifier from any string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates the `tag:row` identifier for a row of an input source.
    #[must_use]
    pub fn from_source(tag: &str, row: usize) -> Self {
        Self(format!("{tag}:{row}"))
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RoomId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Extracts a room's center symbol: the first non-whitespace character,
/// uppercased.
///
/// # Example
///
/// ```
/// use board_types::room::parse_symbol;
///
/// assert_eq!(parse_symbol("  x marks"), Some('X'));
/// assert_eq!(parse_symbol("   "), None);
/// ```
#[must_use]
pub fn parse_symbol(raw: &str) -> Option<char> {
    raw.trim().chars().next()?.to_uppercase().next()
}

/// A hexagon tile.
///
/// Holds up to six links, one per [`Side`]. Slots whose code was rejected at
/// ingestion stay empty. The slot assignment can be rotated as a whole; the
/// authored openings are kept as entered, and [`Room::current_side`] maps an
/// authored side onto the current orientation.
///
/// # Example
///
/// ```
/// use board_types::{Link, LinkCode, LinkId, Room, RoomId, SlotLink};
/// use hex_grid::Side;
///
/// let door = SlotLink::new(LinkId(0), Link::new(LinkCode::parse("CDHPSTB").unwrap(), true));
/// let mut room = Room::new(RoomId::from("0:2"), Some('A'), [(Side::One, door)], [Side::One]);
///
/// room.rotate(2);
/// assert_eq!(room.side_of(LinkId(0)), Some(Side::Three));
/// assert_eq!(room.current_side(Side::One), Side::Three);
///
/// room.rotate(-2);
/// assert_eq!(room.side_of(LinkId(0)), Some(Side::One));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    id: RoomId,
    symbol: Option<char>,
    slots: [Option<SlotLink>; 6],
    openings: BTreeSet<Side>,
    /// Accumulated rotation in `0..6`.
    rotation: i32,
}

impl Room {
    /// Creates a room from its side assignments and authored openings.
    ///
    /// If a side appears more than once, the last entry wins.
    #[must_use]
    pub fn new(
        id: RoomId,
        symbol: Option<char>,
        links: impl IntoIterator<Item = (Side, SlotLink)>,
        openings: impl IntoIterator<Item = Side>,
    ) -> Self {
        let mut slots = [None; 6];
        for (side, link) in links {
            slots[side.index()] = Some(link);
        }
        Self {
            id,
            symbol,
            slots,
            openings: openings.into_iter().collect(),
            rotation: 0,
        }
    }

    /// Returns the room identifier.
    #[must_use]
    pub const fn id(&self) -> &RoomId {
        &self.id
    }

    /// Returns the center symbol, if the tile had one.
    #[must_use]
    pub const fn symbol(&self) -> Option<char> {
        self.symbol
    }

    /// Returns the sides marked passable when the tile was entered.
    #[must_use]
    pub const fn openings(&self) -> &BTreeSet<Side> {
        &self.openings
    }

    /// Returns the accumulated rotation in `0..6`.
    #[must_use]
    pub const fn rotation(&self) -> i32 {
        self.rotation
    }

    /// Maps an authored side onto the room's current orientation.
    #[must_use]
    pub const fn current_side(&self, authored: Side) -> Side {
        authored.rotate(self.rotation)
    }

    /// Returns the link currently on `side`.
    #[must_use]
    pub const fn link_at(&self, side: Side) -> Option<&SlotLink> {
        self.slots[side.index()].as_ref()
    }

    /// Iterates over occupied slots in side order `1..=6`.
    pub fn links(&self) -> impl Iterator<Item = (Side, &SlotLink)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|link| (Side::from_index(i), link)))
    }

    /// Returns the number of occupied slots.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Returns the side currently holding link instance `id`.
    #[must_use]
    pub fn side_of(&self, id: LinkId) -> Option<Side> {
        self.links()
            .find_map(|(side, slot)| (slot.id == id).then_some(side))
    }

    /// Returns `true` if any link is an open blank edge.
    #[must_use]
    pub fn has_entrypoint(&self) -> bool {
        self.links().any(|(_, slot)| slot.link.is_entrypoint())
    }

    /// Returns this room's codes that also appear in `codes`, in side order.
    ///
    /// Blank codes match like any other.
    ///
    /// # Example
    ///
    /// ```
    /// use board_types::{Link, LinkCode, LinkId, Room, RoomId, SlotLink};
    /// use hex_grid::Side;
    ///
    /// let c = |s: &str| LinkCode::parse(s).unwrap();
    /// let slot = |i, s| SlotLink::new(LinkId(i), Link::new(c(s), false));
    /// let room = Room::new(
    ///     RoomId::from("0:2"),
    ///     None,
    ///     [(Side::One, slot(0, "CCCCCCC")), (Side::Two, slot(1, "DDDDDDD")), (Side::Three, slot(2, "BBBBBBB"))],
    ///     [],
    /// );
    ///
    /// let shared = room.matching_codes(&[c("DDDDDDD"), c("BBBBBBB"), c("TTTTTTT")]);
    /// assert_eq!(shared, vec![c("DDDDDDD"), c("BBBBBBB")]);
    /// ```
    #[must_use]
    pub fn matching_codes(&self, codes: &[LinkCode]) -> Vec<LinkCode> {
        self.links()
            .map(|(_, slot)| slot.code())
            .filter(|code| codes.contains(code))
            .collect()
    }

    /// Cyclically shifts every slot by `amount` sides.
    ///
    /// A link on side `p` moves to `((p - 1 + amount) mod 6) + 1`. Any integer
    /// is accepted; multiples of 6 leave the room unchanged.
    pub fn rotate(&mut self, amount: i32) {
        let amount = amount.rem_euclid(6);
        if amount == 0 {
            return;
        }

        let mut rotated = [None; 6];
        for side in Side::ALL {
            rotated[side.rotate(amount).index()] = self.slots[side.index()];
        }
        self.slots = rotated;
        self.rotation = (self.rotation + amount).rem_euclid(6);
    }

    /// Rotates the room so link `id` sits on `reference`.
    ///
    /// Returns the signed difference `reference - current` that was applied
    /// (zero when already aligned), or `None` if the room does not hold the
    /// link.
    pub fn align(&mut self, id: LinkId, reference: Side) -> Option<i32> {
        let current = self.side_of(id)?;
        let diff = i32::from(reference.position()) - i32::from(current.position());
        if diff != 0 {
            self.rotate(diff);
        }
        Some(diff)
    }

    /// Returns the codes of all occupied slots in side order.
    #[must_use]
    pub fn codes(&self) -> Vec<LinkCode> {
        self.links().map(|(_, slot)| slot.code()).collect()
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.id, self.symbol.unwrap_or(' '))?;
        for side in Side::ALL {
            match self.link_at(side) {
                Some(slot) => write!(f, " {side}:{}", slot.link)?,
                None => write!(f, " {side}:-")?,
            }
        }
        Ok(())
    }
}
