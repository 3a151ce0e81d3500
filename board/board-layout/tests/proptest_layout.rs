//! Property-based tests for grid layout.
//!
//! Run with: cargo test -p board-layout -- proptest

#![allow(clippy::unwrap_used)]

use board_layout::GridLayout;
use board_registry::Registry;
use board_types::{ColumnMapping, LayoutConfig, Row, RoomId};
use proptest::prelude::*;

const POOL: [&str; 8] = [
    "CCCCCCC", "DDDDDDD", "HHHHHHH", "PPPPPPP", "SSSSSSS", "TTTTTTT", "CDHPSTB", "TSPHDCB",
];

fn build_row(openings: &str, links: &[&str]) -> Row {
    let mut row = Row::from_pairs([("Center", "x"), ("Openings", openings)]);
    for (i, link) in links.iter().enumerate() {
        row.insert(format!("Link{}", i + 1), *link);
    }
    row
}

/// An entry row followed by rows drawn from a small code pool, so that many
/// rooms connect and some layouts conflict.
fn arb_rows() -> impl Strategy<Value = Vec<Row>> {
    let code = prop_oneof![
        4 => prop::sample::select(POOL.to_vec()),
        1 => Just("blank"),
    ];
    let entry = prop::collection::vec(prop::sample::select(POOL.to_vec()), 5).prop_map(|rest| {
        let mut links = vec!["blank"];
        links.extend(rest);
        build_row("1", &links)
    });
    let others = prop::collection::vec(
        prop::collection::vec(code, 6).prop_map(|links| build_row("", &links)),
        0..16,
    );
    (entry, others).prop_map(|(entry, mut others)| {
        others.insert(0, entry);
        others
    })
}

proptest! {
    /// No cell holds two rooms and no room is placed twice.
    #[test]
    fn placement_is_injective(rows in arb_rows()) {
        let mut registry = Registry::new();
        registry.ingest(rows, "p", &ColumnMapping::default());

        let placement = GridLayout::new(&mut registry, LayoutConfig::default())
            .layout(&RoomId::from("p:2"))
            .unwrap();

        prop_assert_eq!(placement.grid().len(), placement.len());
        for (room, coord) in placement.placed() {
            prop_assert_eq!(placement.room_at(coord), Some(room));
        }
    }

    /// Every room after the entrypoint sits one step from a placed room,
    /// sharing a link across the facing sides of that step.
    #[test]
    fn placed_rooms_adjoin_through_shared_links(rows in arb_rows()) {
        let mut registry = Registry::new();
        registry.ingest(rows, "p", &ColumnMapping::default());

        let placement = GridLayout::new(&mut registry, LayoutConfig::default())
            .layout(&RoomId::from("p:2"))
            .unwrap();

        for (id, coord) in placement.placed().skip(1) {
            let room = registry.room(id).unwrap();
            let joined = placement.placed().any(|(other_id, other_coord)| {
                let Some(side) = other_coord.side_toward(coord) else {
                    return false;
                };
                let other = registry.room(other_id).unwrap();
                match (other.link_at(side), room.link_at(side.opposite())) {
                    (Some(a), Some(b)) => a.id == b.id,
                    _ => false,
                }
            });
            prop_assert!(joined, "room {} at {} has no linked neighbor", id, coord);
        }
    }
}
