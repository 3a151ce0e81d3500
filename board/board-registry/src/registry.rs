//! The room and link registry.
//!
//! A [`Registry`] turns rows into rooms. Identical non-blank edges collapse
//! into one shared link, which is how two rooms become neighbors; rows that
//! repeat an existing room, or match a blacklist room, are rejected.

use board_types::mapping::parse_openings;
use board_types::room::parse_symbol;
use board_types::{
    ColumnMapping, Diagnostic, IngestConfig, Link, LinkCode, LinkId, Room, RoomId, Row, SlotLink,
    normalize,
};
use hex_grid::Side;
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, info, warn};

use crate::error::RegistryError;
use crate::links::LinkTable;
use crate::outcome::{IngestSummary, RegistryStats, RowOutcome};
use crate::sequence::RoomIdSequence;

/// Rooms, links, and entrypoints built from ingested rows.
///
/// Rooms and entrypoints are kept in ingestion order. An optional blacklist
/// registry is consulted, read-only, before accepting each row.
///
/// # Example
///
/// ```
/// use board_registry::{Registry, RowOutcome};
/// use board_types::{ColumnMapping, Row, RoomId};
///
/// let mapping = ColumnMapping::default();
/// let mut registry = Registry::new();
///
/// let row = Row::from_pairs([
///     ("Center", "e"),
///     ("Openings", "1"),
///     ("Link1", "blank"),
///     ("Link2", "CDHPSTB"),
/// ]);
/// let outcome = registry.add_row(&row, RoomId::from("0:2"), &mapping);
///
/// assert_eq!(outcome, RowOutcome::Accepted);
/// assert!(registry.is_entrypoint(&RoomId::from("0:2")));
/// ```
#[derive(Debug, Clone)]
pub struct Registry<'b> {
    config: IngestConfig,
    rooms: IndexMap<RoomId, Room>,
    entrypoints: IndexSet<RoomId>,
    links: LinkTable,
    blacklist: Option<&'b Registry<'b>>,
    diagnostics: Vec<Diagnostic>,
    rejected: usize,
}

impl<'b> Registry<'b> {
    /// Creates an empty registry with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(IngestConfig::default())
    }

    /// Creates an empty registry with the given settings.
    #[must_use]
    pub fn with_config(config: IngestConfig) -> Self {
        Self {
            config,
            rooms: IndexMap::new(),
            entrypoints: IndexSet::new(),
            links: LinkTable::new(),
            blacklist: None,
            diagnostics: Vec::new(),
            rejected: 0,
        }
    }

    /// Rejects future rows that duplicate a room of `blacklist`.
    ///
    /// Blacklist rooms whose symbol is the configured blank symbol never
    /// reject anything.
    #[must_use]
    pub fn with_blacklist(mut self, blacklist: &'b Registry<'b>) -> Self {
        self.blacklist = Some(blacklist);
        self
    }

    /// Returns the ingestion settings.
    #[must_use]
    pub const fn config(&self) -> &IngestConfig {
        &self.config
    }

    /// Ingests one row as room `id`.
    ///
    /// The row is skipped when its slot-1 column is missing or empty. Slots
    /// whose code does not normalize to a valid code are dropped with an
    /// [`Diagnostic::InvalidLinkCode`]. Identifiers must be unique within a
    /// registry; a repeated identifier is skipped with a warning.
    pub fn add_row(&mut self, row: &Row, id: RoomId, mapping: &ColumnMapping) -> RowOutcome {
        if row.get_or_empty(mapping.link(Side::One)).trim().is_empty() {
            debug!(room = %id, "skipping row without a first link");
            return RowOutcome::Skipped;
        }
        if self.rooms.contains_key(&id) {
            warn!(room = %id, "room identifier already registered, skipping row");
            return RowOutcome::Skipped;
        }

        let openings = parse_openings(row.get_or_empty(&mapping.openings));
        let symbol = parse_symbol(row.get_or_empty(&mapping.center));

        let mut candidate = Vec::with_capacity(6);
        for side in Side::ALL {
            let is_opening = openings.contains(&side);
            let code = normalize(row.get_or_empty(mapping.link(side)), is_opening);
            match LinkCode::parse(&code) {
                Ok(code) => candidate.push((side, Link::new(code, is_opening))),
                Err(_) => self.report(Diagnostic::InvalidLinkCode {
                    room: id.clone(),
                    side,
                    code,
                }),
            }
        }
        let codes: Vec<LinkCode> = candidate.iter().map(|(_, link)| link.code).collect();

        let duplicate = self
            .find_duplicate(&codes)
            .map(|(existing, shared)| (existing.id().clone(), shared));
        if let Some((existing, codes)) = duplicate {
            self.rejected += 1;
            self.report(Diagnostic::DuplicateRoom {
                room: id,
                existing: existing.clone(),
                codes,
            });
            return RowOutcome::Duplicate { existing };
        }

        let blank_symbol = self.config.blank_symbol();
        let blacklisted = self
            .blacklist
            .and_then(|blacklist| blacklist.find_duplicate(&codes))
            .filter(|(existing, _)| existing.symbol() != Some(blank_symbol))
            .map(|(existing, shared)| (existing.id().clone(), shared));
        if let Some((existing, codes)) = blacklisted {
            self.rejected += 1;
            self.report(Diagnostic::BlacklistedRoom {
                room: id,
                existing: existing.clone(),
                codes,
            });
            return RowOutcome::Blacklisted { existing };
        }

        let slots: Vec<(Side, SlotLink)> = candidate
            .into_iter()
            .map(|(side, link)| (side, SlotLink::new(self.links.resolve(link), link)))
            .collect();
        for (_, slot) in &slots {
            if !self.links.attach(slot.id, &id) {
                self.report(Diagnostic::LinkOverflow {
                    room: id.clone(),
                    link: slot.link,
                });
            }
        }

        let room = Room::new(id.clone(), symbol, slots, openings);
        let is_entrypoint = room.has_entrypoint();
        debug!("registered {room}");
        self.rooms.insert(id.clone(), room);

        if is_entrypoint {
            self.entrypoints.insert(id.clone());
            self.report(Diagnostic::EntrypointFound { room: id });
        }

        RowOutcome::Accepted
    }

    /// Ingests consecutive data rows of one source.
    ///
    /// Identifiers are `tag:row`, where `row` is the sheet row number given
    /// the configured header row count.
    pub fn ingest<I>(&mut self, rows: I, tag: &str, mapping: &ColumnMapping) -> IngestSummary
    where
        I: IntoIterator<Item = Row>,
    {
        let mut summary = IngestSummary::default();
        let ids = RoomIdSequence::new(tag, self.config.header_rows());
        for (row, id) in rows.into_iter().zip(ids) {
            let outcome = self.add_row(&row, id, mapping);
            summary.record(&outcome);
        }
        info!(source = tag, "{summary}");
        summary
    }

    /// Finds the first room, in ingestion order, sharing more than one
    /// code with `codes`.
    ///
    /// Returns the room and the shared codes in that room's side order.
    #[must_use]
    pub fn find_duplicate(&self, codes: &[LinkCode]) -> Option<(&Room, Vec<LinkCode>)> {
        self.rooms.values().find_map(|room| {
            let shared = room.matching_codes(codes);
            (shared.len() > 1).then_some((room, shared))
        })
    }

    /// Returns the number of accepted rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns `true` if no room has been accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Returns `true` if a room with this identifier was accepted.
    #[must_use]
    pub fn contains(&self, id: &RoomId) -> bool {
        self.rooms.contains_key(id)
    }

    /// Looks up a room.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownRoom`] if no such room was accepted.
    pub fn room(&self, id: &RoomId) -> Result<&Room, RegistryError> {
        self.rooms
            .get(id)
            .ok_or_else(|| RegistryError::UnknownRoom(id.clone()))
    }

    /// Iterates over rooms in ingestion order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Iterates over entrypoint rooms in ingestion order.
    pub fn entrypoints(&self) -> impl Iterator<Item = &Room> {
        self.entrypoints.iter().filter_map(|id| self.rooms.get(id))
    }

    /// Iterates over entrypoint identifiers in ingestion order.
    pub fn entrypoint_ids(&self) -> impl Iterator<Item = &RoomId> {
        self.entrypoints.iter()
    }

    /// Returns `true` if `id` is an entrypoint.
    #[must_use]
    pub fn is_entrypoint(&self, id: &RoomId) -> bool {
        self.entrypoints.contains(id)
    }

    /// Returns the link value of an instance.
    #[must_use]
    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.get(id)
    }

    /// Returns the rooms owning a link.
    #[must_use]
    pub fn owners(&self, id: LinkId) -> &[RoomId] {
        self.links.owners(id)
    }

    /// Returns the room on the other end of `link` as seen from `room`.
    #[must_use]
    pub fn other_room(&self, link: LinkId, room: &RoomId) -> Option<&RoomId> {
        self.links.other_owner(link, room)
    }

    /// Lists the connected neighbors of a room as `(side, link, neighbor)` in
    /// side order, using the room's current orientation.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownRoom`] if no such room was accepted.
    pub fn neighbors(&self, id: &RoomId) -> Result<Vec<(Side, LinkId, RoomId)>, RegistryError> {
        let room = self.room(id)?;
        Ok(room
            .links()
            .filter_map(|(side, slot)| {
                self.other_room(slot.id, id)
                    .map(|other| (side, slot.id, other.clone()))
            })
            .collect())
    }

    /// Rotates room `id` so that `link` sits on `reference`.
    ///
    /// Returns the rotation that was applied (zero if already aligned).
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownRoom`] if the room does not exist, or
    /// [`RegistryError::LinkNotInRoom`] if it does not hold `link`.
    pub fn align_room(
        &mut self,
        id: &RoomId,
        link: LinkId,
        reference: Side,
    ) -> Result<i32, RegistryError> {
        let room = self
            .rooms
            .get_mut(id)
            .ok_or_else(|| RegistryError::UnknownRoom(id.clone()))?;
        room.align(link, reference)
            .ok_or_else(|| RegistryError::LinkNotInRoom {
                room: id.clone(),
                link,
            })
    }

    /// Returns every diagnostic reported so far, in order.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns a summary of the registry's contents.
    #[must_use]
    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            rooms: self.rooms.len(),
            links: self.links.len(),
            connected_links: self.links.connected_count(),
            entrypoints: self.entrypoints.len(),
            rejected: self.rejected,
        }
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_anomaly() {
            warn!("{diagnostic}");
        } else {
            info!("{diagnostic}");
        }
        self.diagnostics.push(diagnostic);
    }
}

impl Default for Registry<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn row(center: &str, openings: &str, links: [&str; 6]) -> Row {
        let mut row = Row::from_pairs([("Center", center), ("Openings", openings)]);
        for (i, link) in links.iter().enumerate() {
            row.insert(format!("Link{}", i + 1), *link);
        }
        row
    }

    fn add(registry: &mut Registry<'_>, id: &str, row: &Row) -> RowOutcome {
        registry.add_row(row, RoomId::from(id), &ColumnMapping::default())
    }

    #[test]
    fn test_entrypoint_detected() {
        let mut registry = Registry::new();
        let outcome = add(
            &mut registry,
            "0:2",
            &row("a", "1", ["blank", "CDHPSTB", "TTTTTTT", "", "", ""]),
        );

        assert!(outcome.is_accepted());
        let entries: Vec<_> = registry.entrypoint_ids().collect();
        assert_eq!(entries, vec![&RoomId::from("0:2")]);
        assert!(matches!(
            registry.diagnostics().last(),
            Some(Diagnostic::EntrypointFound { room }) if room.as_str() == "0:2"
        ));
    }

    #[test]
    fn test_closed_blank_is_not_entrypoint() {
        let mut registry = Registry::new();
        add(
            &mut registry,
            "0:2",
            &row("a", "", ["blank", "CDHPSTB", "", "", "", ""]),
        );
        assert_eq!(registry.entrypoint_ids().count(), 0);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut registry = Registry::new();
        let links = ["CCCCCCC", "DDDDDDD", "HHHHHHH", "PPPPPPP", "SSSSSSS", "TTTTTTT"];
        assert!(add(&mut registry, "0:2", &row("a", "", links)).is_accepted());

        let outcome = add(&mut registry, "0:3", &row("a", "", links));

        assert_eq!(
            outcome,
            RowOutcome::Duplicate {
                existing: RoomId::from("0:2")
            }
        );
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.stats().rejected, 1);
        assert!(registry.room(&RoomId::from("0:3")).is_err());
    }

    #[test]
    fn test_single_shared_code_connects() {
        let mut registry = Registry::new();
        add(
            &mut registry,
            "0:2",
            &row("a", "", ["CCCCCCC", "", "DDDDDDD", "", "", ""]),
        );
        add(
            &mut registry,
            "0:3",
            &row("b", "", ["HHHHHHH", "", "", "", "", "DDDDDDD"]),
        );

        assert_eq!(registry.len(), 2);
        let a = RoomId::from("0:2");
        let b = RoomId::from("0:3");
        let link = registry.room(&a).unwrap().link_at(Side::Three).unwrap().id;
        assert_eq!(registry.other_room(link, &a), Some(&b));
        assert_eq!(registry.other_room(link, &b), Some(&a));
        assert_eq!(registry.stats().connected_links, 1);
    }

    #[test]
    fn test_shared_blanks_count_as_duplicate() {
        let mut registry = Registry::new();
        add(
            &mut registry,
            "0:2",
            &row("a", "", ["CCCCCCC", "BBBBBBB", "BBBBBBB", "DDDDDDD", "HHHHHHH", "PPPPPPP"]),
        );
        let outcome = add(
            &mut registry,
            "0:3",
            &row("b", "", ["SSSSSSS", "BBBBBBB", "BBBBBBB", "TTTTTTT", "CCCCCCT", "CCCCCCS"]),
        );

        assert_eq!(
            outcome,
            RowOutcome::Duplicate {
                existing: RoomId::from("0:2")
            }
        );
        assert_eq!(registry.len(), 1);
        assert!(registry.diagnostics().iter().any(|d| matches!(
            d,
            Diagnostic::DuplicateRoom { codes, .. } if codes.iter().all(LinkCode::is_blank) && codes.len() == 2
        )));
    }

    #[test]
    fn test_invalid_code_drops_slot() {
        let mut registry = Registry::new();
        add(
            &mut registry,
            "0:2",
            &row(
                "a",
                "",
                ["CCCCCCC", "DDDDDDD", "ZZZZZZZ", "HHHHHHH", "PPPPPPP", "SSSSSSS"],
            ),
        );

        let room = registry.room(&RoomId::from("0:2")).unwrap();
        assert_eq!(room.link_count(), 5);
        assert!(room.link_at(Side::Three).is_none());
        assert!(registry.diagnostics().iter().any(|d| matches!(
            d,
            Diagnostic::InvalidLinkCode { side: Side::Three, code, .. } if code.is_empty()
        )));
    }

    #[test]
    fn test_missing_first_link_skipped() {
        let mut registry = Registry::new();
        let outcome = add(
            &mut registry,
            "0:2",
            &row("a", "", ["", "CCCCCCC", "DDDDDDD", "", "", ""]),
        );
        assert_eq!(outcome, RowOutcome::Skipped);
        assert!(registry.is_empty());
        assert!(registry.diagnostics().is_empty());
    }

    #[test]
    fn test_repeated_identifier_skipped() {
        let mut registry = Registry::new();
        add(&mut registry, "0:2", &row("a", "", ["CCCCCCC", "", "", "", "", ""]));
        let outcome = add(&mut registry, "0:2", &row("b", "", ["DDDDDDD", "", "", "", "", ""]));
        assert_eq!(outcome, RowOutcome::Skipped);
        assert_eq!(registry.room(&RoomId::from("0:2")).unwrap().symbol(), Some('A'));

        let mut summary = IngestSummary::default();
        summary.record(&outcome);
        assert_eq!(summary.skipped, 1);
        assert_eq!(registry.stats().rejected, 0);
    }

    #[test]
    fn test_blacklist_rejects() {
        let mut blacklist = Registry::new();
        add(
            &mut blacklist,
            "blacklist:1",
            &row("x", "", ["CCCCCCC", "DDDDDDD", "", "", "", ""]),
        );

        let mut registry = Registry::new().with_blacklist(&blacklist);
        let outcome = add(
            &mut registry,
            "0:2",
            &row("a", "", ["DDDDDDD", "CCCCCCC", "", "", "", ""]),
        );

        assert_eq!(
            outcome,
            RowOutcome::Blacklisted {
                existing: RoomId::from("blacklist:1")
            }
        );
        assert!(registry.is_empty());
        assert!(matches!(
            registry.diagnostics().last(),
            Some(Diagnostic::BlacklistedRoom { .. })
        ));
    }

    #[test]
    fn test_blank_symbol_blacklist_room_exempt() {
        let mut blacklist = Registry::new();
        add(
            &mut blacklist,
            "blacklist:1",
            &row("b", "", ["CCCCCCC", "DDDDDDD", "", "", "", ""]),
        );

        let mut registry = Registry::new().with_blacklist(&blacklist);
        let outcome = add(
            &mut registry,
            "0:2",
            &row("a", "", ["CCCCCCC", "DDDDDDD", "", "", "", ""]),
        );
        assert!(outcome.is_accepted());
    }

    #[test]
    fn test_custom_blank_symbol() {
        let mut blacklist = Registry::new();
        add(
            &mut blacklist,
            "blacklist:1",
            &row("b", "", ["CCCCCCC", "DDDDDDD", "", "", "", ""]),
        );

        let config = IngestConfig::new().with_blank_symbol('w');
        let mut registry = Registry::with_config(config).with_blacklist(&blacklist);
        let outcome = add(
            &mut registry,
            "0:2",
            &row("a", "", ["CCCCCCC", "DDDDDDD", "", "", "", ""]),
        );
        assert!(outcome.is_rejected());
    }

    #[test]
    fn test_link_overflow_reported() {
        let mut registry = Registry::new();
        for (id, first) in [("0:2", "CCCCCCC"), ("0:3", "DDDDDDD"), ("0:4", "HHHHHHH")] {
            add(&mut registry, id, &row("a", "", [first, "", "", "", "", "TTTTTTT"]));
        }

        assert_eq!(registry.len(), 3);
        assert!(registry.diagnostics().iter().any(|d| matches!(
            d,
            Diagnostic::LinkOverflow { room, .. } if room.as_str() == "0:4"
        )));
    }

    #[test]
    fn test_ingest_assigns_sheet_rows() {
        let mut registry = Registry::new();
        let rows = vec![
            row("a", "", ["CCCCCCC", "", "", "", "", ""]),
            row("", "", ["", "", "", "", "", ""]),
            row("c", "", ["DDDDDDD", "", "", "", "", ""]),
        ];

        let summary = registry.ingest(rows, "0", &ColumnMapping::default());

        assert_eq!(summary.accepted, 2);
        assert_eq!(summary.skipped, 1);
        let ids: Vec<_> = registry.rooms().map(|room| room.id().as_str()).collect();
        assert_eq!(ids, vec!["0:2", "0:4"]);
    }

    #[test]
    fn test_align_room() {
        let mut registry = Registry::new();
        add(&mut registry, "0:2", &row("a", "", ["CCCCCCC", "", "", "", "", ""]));
        let id = RoomId::from("0:2");
        let link = registry.room(&id).unwrap().link_at(Side::One).unwrap().id;

        let applied = registry.align_room(&id, link, Side::Four).unwrap();

        assert_eq!(applied, 3);
        assert_eq!(registry.room(&id).unwrap().side_of(link), Some(Side::Four));
        assert!(registry.align_room(&id, LinkId(99), Side::One).is_err());
        assert!(
            registry
                .align_room(&RoomId::from("0:9"), link, Side::One)
                .unwrap_err()
                .is_unknown_room()
        );
    }

    #[test]
    fn test_neighbors_in_side_order() {
        let mut registry = Registry::new();
        add(
            &mut registry,
            "0:2",
            &row("a", "", ["CCCCCCC", "", "DDDDDDD", "", "", ""]),
        );
        add(&mut registry, "0:3", &row("b", "", ["DDDDDDD", "", "", "", "", ""]));
        add(&mut registry, "0:4", &row("c", "", ["HHHHHHH", "CCCCCCC", "", "", "", ""]));

        let neighbors = registry.neighbors(&RoomId::from("0:2")).unwrap();
        let sides: Vec<_> = neighbors.iter().map(|(side, _, other)| (*side, other.as_str())).collect();
        assert_eq!(sides, vec![(Side::One, "0:4"), (Side::Three, "0:3")]);
    }
}
