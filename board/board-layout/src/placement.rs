//! The result of laying out one entrypoint.

use board_types::{Diagnostic, RoomId};
use hex_grid::{HexBounds, HexCoord, HexGrid};
use indexmap::IndexMap;
use tracing::{info, warn};

/// Rooms placed on the hex grid from one entrypoint.
///
/// The entrypoint sits at the origin. Rooms are remembered in the order they
/// were placed, together with the rotation applied to bring them into line
/// with the room they were reached from.
#[derive(Debug, Clone)]
pub struct Placement {
    entrypoint: RoomId,
    grid: HexGrid<RoomId>,
    placed: IndexMap<RoomId, (HexCoord, i32)>,
    diagnostics: Vec<Diagnostic>,
}

impl Placement {
    pub(crate) fn new(entrypoint: RoomId) -> Self {
        Self {
            entrypoint,
            grid: HexGrid::new(),
            placed: IndexMap::new(),
            diagnostics: Vec::new(),
        }
    }

    pub(crate) fn insert(&mut self, room: RoomId, coord: HexCoord, rotation: i32) {
        self.grid.set(coord, room.clone());
        self.placed.insert(room, (coord, rotation));
    }

    pub(crate) fn report(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_anomaly() {
            warn!("{diagnostic}");
        } else {
            info!("{diagnostic}");
        }
        self.diagnostics.push(diagnostic);
    }

    /// Returns the room the layout started from.
    #[must_use]
    pub const fn entrypoint(&self) -> &RoomId {
        &self.entrypoint
    }

    /// Returns the number of placed rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.placed.len()
    }

    /// Returns `true` if nothing was placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// Returns the occupancy grid.
    #[must_use]
    pub const fn grid(&self) -> &HexGrid<RoomId> {
        &self.grid
    }

    /// Returns the room at `coord`.
    #[must_use]
    pub fn room_at(&self, coord: HexCoord) -> Option<&RoomId> {
        self.grid.get(coord)
    }

    /// Returns where `room` was placed.
    #[must_use]
    pub fn coord_of(&self, room: &RoomId) -> Option<HexCoord> {
        self.placed.get(room).map(|(coord, _)| *coord)
    }

    /// Returns `true` if `room` was placed.
    #[must_use]
    pub fn contains(&self, room: &RoomId) -> bool {
        self.placed.contains_key(room)
    }

    /// Returns the rotation applied to `room` when it was placed.
    ///
    /// Always zero for the entrypoint.
    #[must_use]
    pub fn rotation_of(&self, room: &RoomId) -> Option<i32> {
        self.placed.get(room).map(|(_, rotation)| *rotation)
    }

    /// Iterates over `(room, coord)` in placement order.
    pub fn placed(&self) -> impl Iterator<Item = (&RoomId, HexCoord)> {
        self.placed.iter().map(|(room, (coord, _))| (room, *coord))
    }

    /// Returns the bounding box of all placed rooms.
    #[must_use]
    pub fn bounds(&self) -> Option<HexBounds> {
        self.grid.bounds()
    }

    /// Returns every placed room sorted by column, then row.
    #[must_use]
    pub fn rows(&self) -> Vec<(HexCoord, &RoomId)> {
        self.grid.sorted()
    }

    /// Returns the diagnostics reported during this layout.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
