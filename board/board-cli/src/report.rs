//! Text and JSON reports.

use board_layout::Placement;
use board_registry::Registry;
use board_types::{Diagnostic, Link, RoomId};
use hex_grid::{HexBounds, HexCoord, Side};
use serde::Serialize;

/// Everything `hexboard` found.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Registry totals.
    pub stats: StatsReport,
    /// Ingestion diagnostics, in order.
    pub diagnostics: Vec<Diagnostic>,
    /// One layout per entrypoint.
    pub boards: Vec<BoardReport>,
}

/// Registry totals.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatsReport {
    /// Accepted rooms.
    pub rooms: usize,
    /// Link instances.
    pub links: usize,
    /// Links joining two rooms.
    pub connected_links: usize,
    /// Entrypoint rooms.
    pub entrypoints: usize,
    /// Rejected rows.
    pub rejected: usize,
}

/// One laid-out board.
#[derive(Debug, Clone, Serialize)]
pub struct BoardReport {
    /// The room at the origin.
    pub entrypoint: RoomId,
    /// Extent of the placed rooms.
    pub bounds: Option<HexBounds>,
    /// Placed rooms sorted by column, then row.
    pub rooms: Vec<PlacedRoom>,
    /// Layout diagnostics, in order.
    pub diagnostics: Vec<Diagnostic>,
}

/// A room and where it ended up.
#[derive(Debug, Clone, Serialize)]
pub struct PlacedRoom {
    /// Room identifier.
    pub id: RoomId,
    /// Grid cell.
    pub coord: HexCoord,
    /// Center symbol.
    pub symbol: Option<char>,
    /// Accumulated rotation in `0..6`.
    pub rotation: i32,
    /// Links on sides 1 to 6 in the final orientation.
    pub links: Vec<Option<Link>>,
}

impl Report {
    /// Collects the report from a registry and its layouts.
    #[must_use]
    pub fn new(registry: &Registry<'_>, placements: &[Placement]) -> Self {
        let stats = registry.stats();
        Self {
            stats: StatsReport {
                rooms: stats.rooms,
                links: stats.links,
                connected_links: stats.connected_links,
                entrypoints: stats.entrypoints,
                rejected: stats.rejected,
            },
            diagnostics: registry.diagnostics().to_vec(),
            boards: placements
                .iter()
                .map(|placement| BoardReport::new(registry, placement))
                .collect(),
        }
    }

    /// Renders the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Fails if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Renders the report as a text listing.
    ///
    /// Ingestion diagnostics are left out; they go to the log.
    #[must_use]
    pub fn to_text(&self) -> String {
        let stats = &self.stats;
        let mut lines = vec![format!(
            "{} rooms, {} links ({} connected), {} entrypoints, {} rejected",
            stats.rooms, stats.links, stats.connected_links, stats.entrypoints, stats.rejected
        )];

        for board in &self.boards {
            let mut header = format!("[{}] ENTRYPOINT: {} rooms", board.entrypoint, board.rooms.len());
            if let Some(bounds) = board.bounds {
                let (columns, rows) = bounds.size();
                header += &format!(", {columns}x{rows} from {} to {}", bounds.min, bounds.max);
            }
            lines.push(String::new());
            lines.push(header);
            lines.extend(board.rooms.iter().map(PlacedRoom::line));
            lines.extend(board.diagnostics.iter().map(|diagnostic| format!("  ! {diagnostic}")));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

impl PlacedRoom {
    fn line(&self) -> String {
        let links: Vec<String> = Side::ALL
            .iter()
            .zip(&self.links)
            .map(|(side, link)| match link {
                Some(link) => format!("{side}:{link}"),
                None => format!("{side}:-"),
            })
            .collect();
        format!(
            "  {:>7}  [{}] {} r{} {}",
            self.coord.to_string(),
            self.id,
            self.symbol.unwrap_or('.'),
            self.rotation,
            links.join(" ")
        )
    }
}

impl BoardReport {
    fn new(registry: &Registry<'_>, placement: &Placement) -> Self {
        let rooms = placement
            .rows()
            .into_iter()
            .filter_map(|(coord, id)| {
                let room = registry.room(id).ok()?;
                Some(PlacedRoom {
                    id: id.clone(),
                    coord,
                    symbol: room.symbol(),
                    rotation: room.rotation(),
                    links: Side::ALL
                        .iter()
                        .map(|side| room.link_at(*side).map(|slot| slot.link))
                        .collect(),
                })
            })
            .collect();

        Self {
            entrypoint: placement.entrypoint().clone(),
            bounds: placement.bounds(),
            rooms,
            diagnostics: placement.diagnostics().to_vec(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use board_layout::GridLayout;
    use board_types::{ColumnMapping, LayoutConfig, Row};

    fn laid_out() -> (Registry<'static>, Vec<Placement>) {
        let mut registry = Registry::new();
        registry.ingest(
            vec![
                Row::from_pairs([
                    ("Center", "e"),
                    ("Openings", "6"),
                    ("Link1", "CCCCCCC"),
                    ("Link3", "DDDDDDD"),
                    ("Link6", "blank"),
                ]),
                Row::from_pairs([("Center", "a"), ("Openings", ""), ("Link1", "DDDDDDD")]),
            ],
            "0",
            &ColumnMapping::default(),
        );
        let placements = GridLayout::new(&mut registry, LayoutConfig::default())
            .layout_all()
            .unwrap();
        (registry, placements)
    }

    #[test]
    fn test_text_lines() {
        let (registry, placements) = laid_out();
        let text = Report::new(&registry, &placements).to_text();
        let lines: Vec<&str> = text.lines().collect();

        assert!(text.ends_with('\n'));
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "2 rooms, 3 links (1 connected), 1 entrypoints, 0 rejected");
        assert_eq!(lines[1], "");
        assert!(lines[2].starts_with("[0:2] ENTRYPOINT: 2 rooms"));
        assert!(lines[3].contains("[0:2] E r0"));
        assert!(lines[4].contains("[0:3] A r5"));
        assert!(lines[4].contains(" 1:- "));
    }

    #[test]
    fn test_json_boards() {
        let (registry, placements) = laid_out();
        let json: serde_json::Value =
            serde_json::from_str(&Report::new(&registry, &placements).to_json().unwrap()).unwrap();

        assert_eq!(json["stats"]["entrypoints"], 1);
        assert_eq!(json["boards"][0]["rooms"][1]["rotation"], 5);
        assert!(json["boards"][0]["rooms"][1]["links"][0].is_null());
    }
}
