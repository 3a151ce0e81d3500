//! Depth-first flood-fill layout.

use board_registry::Registry;
use board_types::{Diagnostic, LayoutConfig, LinkId, RoomId};
use hex_grid::{HexCoord, Side};
use tracing::{debug, info};

use crate::error::LayoutError;
use crate::placement::Placement;

/// Places connected rooms on a hex grid, starting from an entrypoint.
///
/// Each room is visited once. For every side with a link that another room
/// also owns, the neighbor is rotated so the shared link faces back across
/// the edge, then placed one step away and visited in turn. Conflicts are
/// reported as diagnostics and the conflicting neighbor is skipped.
///
/// Layout rotates rooms in the registry, so it needs a mutable borrow.
///
/// # Example
///
/// ```
/// use board_layout::GridLayout;
/// use board_registry::Registry;
/// use board_types::{ColumnMapping, LayoutConfig, Row, RoomId};
/// use hex_grid::HexCoord;
///
/// let mut registry = Registry::new();
/// registry.ingest(
///     vec![
///         Row::from_pairs([("Center", "e"), ("Openings", "6"), ("Link1", "CCCCCCC"), ("Link3", "DDDDDDD"), ("Link6", "blank")]),
///         Row::from_pairs([("Center", "a"), ("Openings", ""), ("Link1", "DDDDDDD")]),
///     ],
///     "0",
///     &ColumnMapping::default(),
/// );
///
/// let mut layout = GridLayout::new(&mut registry, LayoutConfig::default());
/// let placement = layout.layout(&RoomId::from("0:2")).unwrap();
///
/// let neighbor = RoomId::from("0:3");
/// assert_eq!(placement.coord_of(&neighbor), Some(HexCoord::new(0, 1)));
///
/// assert_eq!(registry.room(&neighbor).unwrap().rotation(), 5);
/// ```
#[derive(Debug)]
pub struct GridLayout<'r, 'b> {
    registry: &'r mut Registry<'b>,
    config: LayoutConfig,
}

impl<'r, 'b> GridLayout<'r, 'b> {
    /// Creates a layout engine over a registry.
    #[must_use]
    pub fn new(registry: &'r mut Registry<'b>, config: LayoutConfig) -> Self {
        Self { registry, config }
    }

    /// Returns the layout configuration.
    #[must_use]
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lays out everything reachable from `entrypoint`, placed at the origin.
    ///
    /// The entrypoint itself is never rotated.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfig`] if the configuration does not
    /// validate, [`LayoutError::Registry`] if `entrypoint` is not in the
    /// registry, [`LayoutError::DepthLimitExceeded`] if the traversal nests
    /// deeper than [`LayoutConfig::max_depth`], or [`LayoutError::Grid`] if a
    /// step leaves the coordinate range.
    pub fn layout(&mut self, entrypoint: &RoomId) -> Result<Placement, LayoutError> {
        if let Some(issue) = self.config.validate().into_iter().next() {
            return Err(LayoutError::InvalidConfig(issue));
        }
        self.registry.room(entrypoint)?;

        info!(room = %entrypoint, "laying out from entrypoint");
        let mut placement = Placement::new(entrypoint.clone());
        self.fill(entrypoint, &mut placement)?;
        info!(
            room = %entrypoint,
            placed = placement.len(),
            diagnostics = placement.diagnostics().len(),
            "layout complete"
        );

        Ok(placement)
    }

    /// Lays out every entrypoint of the registry in ingestion order.
    ///
    /// Rotations accumulate: rooms reached from an earlier entrypoint keep
    /// their orientation when a later layout starts.
    ///
    /// # Errors
    ///
    /// Stops at the first failing layout; see [`GridLayout::layout`].
    pub fn layout_all(&mut self) -> Result<Vec<Placement>, LayoutError> {
        let entrypoints: Vec<RoomId> = self.registry.entrypoint_ids().cloned().collect();
        entrypoints.iter().map(|id| self.layout(id)).collect()
    }

    fn fill(&mut self, entrypoint: &RoomId, placement: &mut Placement) -> Result<(), LayoutError> {
        let max_depth = self.config.max_depth();
        placement.insert(entrypoint.clone(), HexCoord::origin(), 0);
        let mut stack = vec![self.frame(entrypoint, HexCoord::origin(), 1)?];

        while let Some(frame) = stack.last_mut() {
            let Some((side, link, neighbor)) = frame.neighbors.next() else {
                stack.pop();
                continue;
            };
            let room = frame.room.clone();
            let (coord, depth) = (frame.coord, frame.depth);
            let target = coord.checked_neighbor(side)?;

            if let Some(occupant) = placement.room_at(target).cloned() {
                if occupant == neighbor {
                    debug!("[{room}]@{coord} -> ({side}) [{neighbor}]@{target} already linked");
                } else {
                    placement.report(Diagnostic::Overlap {
                        room,
                        side,
                        neighbor,
                        occupant,
                        at: target,
                    });
                }
                continue;
            }

            if let Some(actual) = placement.coord_of(&neighbor) {
                placement.report(Diagnostic::AlreadyPlaced {
                    room,
                    side,
                    neighbor,
                    expected: target,
                    actual,
                });
                continue;
            }

            if depth >= max_depth {
                return Err(LayoutError::DepthLimitExceeded {
                    room: neighbor,
                    max_depth,
                });
            }

            let applied = self.registry.align_room(&neighbor, link, side.opposite())?;
            debug!("[{room}]@{coord} -> ({side}) [{neighbor}]@{target} linked, rotated {applied}");
            if self.registry.is_entrypoint(&neighbor) {
                placement.report(Diagnostic::ReachedEntrypoint {
                    room: neighbor.clone(),
                    origin: room,
                });
            }

            placement.insert(neighbor.clone(), target, applied.rem_euclid(6));
            stack.push(self.frame(&neighbor, target, depth + 1)?);
        }

        Ok(())
    }

    fn frame(&self, room: &RoomId, coord: HexCoord, depth: usize) -> Result<Frame, LayoutError> {
        Ok(Frame {
            room: room.clone(),
            coord,
            depth,
            neighbors: self.registry.neighbors(room)?.into_iter(),
        })
    }
}

/// A placed room whose remaining neighbors are still to be visited.
///
/// Neighbors are captured once the room is aligned and placed, in side order.
#[derive(Debug)]
struct Frame {
    room: RoomId,
    coord: HexCoord,
    /// Rooms on the path from the entrypoint, this one included.
    depth: usize,
    neighbors: std::vec::IntoIter<(Side, LinkId, RoomId)>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use board_types::config::DEFAULT_MAX_DEPTH;
    use board_types::{ColumnMapping, Row};

    fn row(center: &str, openings: &str, links: &[(Side, &str)]) -> Row {
        let mut row = Row::from_pairs([("Center", center), ("Openings", openings)]);
        for (side, code) in links {
            row.insert(format!("Link{side}"), *code);
        }
        row
    }

    fn registry(rows: Vec<Row>) -> Registry<'static> {
        let mut registry = Registry::new();
        registry.ingest(rows, "t", &ColumnMapping::default());
        registry
    }

    fn id(row: usize) -> RoomId {
        RoomId::from_source("t", row)
    }

    #[test]
    fn test_slot_three_neighbor_lands_below() {
        let mut registry = registry(vec![
            row("e", "1", &[(Side::One, "blank"), (Side::Three, "CDHPSTB")]),
            row("a", "", &[(Side::One, "CDHPSTB")]),
        ]);

        let placement = GridLayout::new(&mut registry, LayoutConfig::default())
            .layout(&id(2))
            .unwrap();

        assert_eq!(placement.coord_of(&id(2)), Some(HexCoord::origin()));
        assert_eq!(placement.coord_of(&id(3)), Some(HexCoord::new(0, 1)));
        let neighbor = registry.room(&id(3)).unwrap();
        let link = registry.room(&id(2)).unwrap().link_at(Side::Three).unwrap().id;
        assert_eq!(neighbor.side_of(link), Some(Side::Six));
        assert_eq!(placement.rotation_of(&id(3)), Some(5));
        assert_eq!(registry.room(&id(2)).unwrap().rotation(), 0);
    }

    #[test]
    fn test_already_aligned_neighbor_not_rotated() {
        let mut registry = registry(vec![
            row("e", "1", &[(Side::One, "blank"), (Side::Two, "CCCCCCC")]),
            row("a", "", &[(Side::One, "TTTTTTT"), (Side::Five, "CCCCCCC")]),
        ]);

        let placement = GridLayout::new(&mut registry, LayoutConfig::default())
            .layout(&id(2))
            .unwrap();

        assert_eq!(placement.coord_of(&id(3)), Some(HexCoord::new(1, 1)));
        assert_eq!(placement.rotation_of(&id(3)), Some(0));
        assert_eq!(registry.room(&id(3)).unwrap().rotation(), 0);
    }

    #[test]
    fn test_chain_follows_link_sides() {
        // e -(1)-> a -(2)-> b, each link realigned onto the opposite side.
        let mut registry = registry(vec![
            row("e", "6", &[(Side::One, "CCCCCCC"), (Side::Six, "blank")]),
            row("a", "", &[(Side::One, "DDDDDDD"), (Side::Three, "CCCCCCC")]),
            row("b", "", &[(Side::One, "DDDDDDD")]),
        ]);

        let placement = GridLayout::new(&mut registry, LayoutConfig::default())
            .layout(&id(2))
            .unwrap();

        assert_eq!(placement.len(), 3);
        // a is rotated so CCCCCCC sits on side 4, moving DDDDDDD to side 2.
        assert_eq!(placement.coord_of(&id(3)), Some(HexCoord::new(1, 0)));
        let a = registry.room(&id(3)).unwrap();
        assert_eq!(a.rotation(), 1);
        let d_link = a.link_at(Side::Two).unwrap().id;
        assert_eq!(registry.room(&id(4)).unwrap().side_of(d_link), Some(Side::Five));
        // (1, 0) is an odd column: side 2 steps straight right.
        assert_eq!(placement.coord_of(&id(4)), Some(HexCoord::new(2, 0)));
    }

    #[test]
    fn test_overlap_reported() {
        // b belongs at (1,1) below e's side 2, but c reaches that cell
        // first through a.
        let mut registry = registry(vec![
            row(
                "e",
                "4",
                &[(Side::One, "CCCCCCC"), (Side::Two, "DDDDDDD"), (Side::Four, "blank")],
            ),
            row("a", "", &[(Side::One, "HHHHHHH"), (Side::Four, "CCCCCCC"), (Side::Three, "PPPPPPP")]),
            row("b", "", &[(Side::One, "SSSSSSS"), (Side::Five, "DDDDDDD")]),
            row("c", "", &[(Side::One, "PPPPPPP")]),
        ]);

        let placement = GridLayout::new(&mut registry, LayoutConfig::default())
            .layout(&id(2))
            .unwrap();

        assert_eq!(placement.coord_of(&id(3)), Some(HexCoord::new(1, 0)));
        assert_eq!(placement.coord_of(&id(5)), Some(HexCoord::new(1, 1)));
        assert!(!placement.contains(&id(4)));
        assert!(placement.diagnostics().iter().any(|d| matches!(
            d,
            Diagnostic::Overlap { neighbor, occupant, .. } if *neighbor == id(4) && *occupant == id(5)
        )));
    }

    #[test]
    fn test_already_placed_reported() {
        // A loop e -> a -> b -> e where b's link back to e points at the
        // wrong cell.
        let mut registry = registry(vec![
            row("e", "6", &[(Side::One, "CCCCCCC"), (Side::Three, "HHHHHHH"), (Side::Six, "blank")]),
            row("a", "", &[(Side::One, "DDDDDDD"), (Side::Four, "CCCCCCC")]),
            row("b", "", &[(Side::One, "DDDDDDD"), (Side::Four, "HHHHHHH")]),
        ]);

        let placement = GridLayout::new(&mut registry, LayoutConfig::default())
            .layout(&id(2))
            .unwrap();

        assert_eq!(placement.len(), 3);
        assert!(placement.diagnostics().iter().any(|d| matches!(
            d,
            Diagnostic::AlreadyPlaced { .. }
        )));
        let coords: Vec<_> = placement.placed().map(|(_, coord)| coord).collect();
        let mut unique = coords.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), coords.len());
    }

    #[test]
    fn test_depth_limit_exceeded() {
        let mut registry = registry(vec![
            row("e", "6", &[(Side::One, "CCCCCCC"), (Side::Six, "blank")]),
            row("a", "", &[(Side::Four, "CCCCCCC"), (Side::One, "DDDDDDD")]),
            row("b", "", &[(Side::Four, "DDDDDDD"), (Side::One, "HHHHHHH")]),
        ]);

        let config = LayoutConfig::default().with_max_depth(2);
        let error = GridLayout::new(&mut registry, config)
            .layout(&id(2))
            .unwrap_err();

        assert!(matches!(
            error,
            LayoutError::DepthLimitExceeded { ref room, max_depth: 2 } if *room == id(4)
        ));
    }

    /// A distinct non-blank code per index, spelled in base 6 over `CDHPST`.
    fn chain_code(index: usize) -> String {
        let mut n = index;
        (0..7)
            .map(|_| {
                let letter = char::from(b"CDHPST"[n % 6]);
                n /= 6;
                letter
            })
            .collect()
    }

    /// `len` rooms in a line: room `i` links to room `i + 1` through its
    /// side 1 and to room `i - 1` through its side 4.
    fn chain(len: usize) -> Vec<Row> {
        (0..len)
            .map(|i| {
                let next = chain_code(i);
                if i == 0 {
                    row("e", "6", &[(Side::One, next.as_str()), (Side::Six, "blank")])
                } else {
                    let prev = chain_code(i - 1);
                    row("c", "", &[(Side::One, next.as_str()), (Side::Four, prev.as_str())])
                }
            })
            .collect()
    }

    #[test]
    fn test_chain_at_default_ceiling() {
        let mut registry = registry(chain(DEFAULT_MAX_DEPTH));
        assert_eq!(registry.len(), DEFAULT_MAX_DEPTH);

        let placement = GridLayout::new(&mut registry, LayoutConfig::default())
            .layout(&id(2))
            .unwrap();
        assert_eq!(placement.len(), DEFAULT_MAX_DEPTH);

        let config = LayoutConfig::default().with_max_depth(DEFAULT_MAX_DEPTH - 1);
        let error = GridLayout::new(&mut registry, config)
            .layout(&id(2))
            .unwrap_err();
        assert!(error.is_depth_limit());
    }

    #[test]
    fn test_zero_depth_rejected() {
        let mut registry = registry(vec![row("e", "1", &[(Side::One, "blank")])]);
        let config = LayoutConfig::default().with_max_depth(0);
        let error = GridLayout::new(&mut registry, config)
            .layout(&id(2))
            .unwrap_err();
        assert!(matches!(error, LayoutError::InvalidConfig(_)));
    }

    #[test]
    fn test_unknown_entrypoint() {
        let mut registry = registry(vec![]);
        let error = GridLayout::new(&mut registry, LayoutConfig::default())
            .layout(&id(2))
            .unwrap_err();
        assert!(error.is_registry());
    }

    #[test]
    fn test_reached_entrypoint_and_layout_all() {
        // Two entrypoints joined through a: each shares only its blank with
        // the other, so neither is a duplicate.
        let mut registry = registry(vec![
            row("e", "6", &[(Side::One, "CCCCCCC"), (Side::Six, "blank")]),
            row("a", "", &[(Side::One, "DDDDDDD"), (Side::Four, "CCCCCCC")]),
            row("f", "1", &[(Side::One, "blank"), (Side::Four, "DDDDDDD")]),
        ]);

        let placements = GridLayout::new(&mut registry, LayoutConfig::default())
            .layout_all()
            .unwrap();

        assert_eq!(placements.len(), 2);
        assert_eq!(placements[0].entrypoint(), &id(2));
        assert_eq!(placements[1].entrypoint(), &id(4));
        assert!(placements[0].diagnostics().iter().any(|d| matches!(
            d,
            Diagnostic::ReachedEntrypoint { room, origin } if *room == id(4) && *origin == id(3)
        )));
        assert_eq!(placements[0].coord_of(&id(4)), Some(HexCoord::new(2, -1)));
        assert_eq!(placements[1].coord_of(&id(2)), Some(HexCoord::new(-2, 1)));
    }
}
