//! Link arena with deduplication index and owner table.

use board_types::{Link, LinkId, RoomId};
use hashbrown::HashMap;

/// Maximum number of rooms that can share one link: the two sides of an edge.
pub const MAX_OWNERS: usize = 2;

#[derive(Debug, Clone)]
struct LinkEntry {
    link: Link,
    owners: Vec<RoomId>,
}

/// All link instances of a registry.
///
/// Links are stored by [`LinkId`]. Non-blank links are indexed by value so
/// identical edge declarations resolve to the same instance; blank links are
/// never indexed, so each blank edge stays its own instance. Ownership is kept
/// here as plain room identifiers rather than references back into rooms.
#[derive(Debug, Clone, Default)]
pub struct LinkTable {
    entries: Vec<LinkEntry>,
    index: HashMap<Link, LinkId>,
}

impl LinkTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of link instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table holds no links.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the shared instance for a non-blank link value.
    ///
    /// Always `None` for blank links.
    #[must_use]
    pub fn find(&self, link: &Link) -> Option<LinkId> {
        self.index.get(link).copied()
    }

    /// Returns the existing instance for `link`, or creates one.
    ///
    /// New non-blank links are added to the index; blank links always get a
    /// fresh id.
    pub fn resolve(&mut self, link: Link) -> LinkId {
        if let Some(id) = self.find(&link) {
            return id;
        }

        let id = LinkId(self.entries.len());
        self.entries.push(LinkEntry {
            link,
            owners: Vec::with_capacity(MAX_OWNERS),
        });
        if !link.is_blank() {
            self.index.insert(link, id);
        }
        id
    }

    /// Returns the link value for an id.
    #[must_use]
    pub fn get(&self, id: LinkId) -> Option<&Link> {
        self.entries.get(id.0).map(|entry| &entry.link)
    }

    /// Records `room` as an owner of `id`.
    ///
    /// Returns `false` if the link already has [`MAX_OWNERS`] other owners (or
    /// does not exist). Attaching an existing owner again is a no-op that
    /// returns `true`.
    pub fn attach(&mut self, id: LinkId, room: &RoomId) -> bool {
        let Some(entry) = self.entries.get_mut(id.0) else {
            return false;
        };
        if entry.owners.contains(room) {
            return true;
        }
        if entry.owners.len() >= MAX_OWNERS {
            return false;
        }
        entry.owners.push(room.clone());
        true
    }

    /// Returns the rooms owning a link.
    #[must_use]
    pub fn owners(&self, id: LinkId) -> &[RoomId] {
        self.entries
            .get(id.0)
            .map_or(&[], |entry| entry.owners.as_slice())
    }

    /// Returns the owner of `id` that is not `room`.
    ///
    /// `None` unless `room` is itself an owner, so a room whose claim on the
    /// link overflowed is not connected through it.
    #[must_use]
    pub fn other_owner(&self, id: LinkId, room: &RoomId) -> Option<&RoomId> {
        let owners = self.owners(id);
        if !owners.contains(room) {
            return None;
        }
        owners.iter().find(|owner| *owner != room)
    }

    /// Returns the number of links with two owners.
    #[must_use]
    pub fn connected_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.owners.len() == MAX_OWNERS)
            .count()
    }
}
