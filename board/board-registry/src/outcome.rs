//! Per-row results and registry summaries.

use std::fmt;

use board_types::RoomId;

/// What happened to one ingested row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// The row became a room.
    Accepted,
    /// The row was ignored: it had no slot-1 value, or its identifier was
    /// already registered.
    Skipped,
    /// The row repeated an already accepted room.
    Duplicate {
        /// The room it repeated.
        existing: RoomId,
    },
    /// The row matched a non-blank blacklist room.
    Blacklisted {
        /// The blacklist room it matched.
        existing: RoomId,
    },
}

impl RowOutcome {
    /// Returns `true` if the row became a room.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Returns `true` if the row was a duplicate or blacklisted.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Duplicate { .. } | Self::Blacklisted { .. })
    }
}

/// Counts of row outcomes for one [`Registry::ingest`](crate::Registry::ingest) call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    /// Rows that became rooms.
    pub accepted: usize,
    /// Rows without a slot-1 value or with an already registered
    /// identifier.
    pub skipped: usize,
    /// Rows rejected as duplicates.
    pub duplicates: usize,
    /// Rows rejected by the blacklist.
    pub blacklisted: usize,
}

impl IngestSummary {
    /// Adds one outcome to the counts.
    pub fn record(&mut self, outcome: &RowOutcome) {
        match outcome {
            RowOutcome::Accepted => self.accepted += 1,
            RowOutcome::Skipped => self.skipped += 1,
            RowOutcome::Duplicate { .. } => self.duplicates += 1,
            RowOutcome::Blacklisted { .. } => self.blacklisted += 1,
        }
    }

    /// Returns the number of rows seen.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.accepted + self.skipped + self.duplicates + self.blacklisted
    }
}

impl fmt::Display for IngestSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rows: {} accepted, {} skipped, {} duplicate, {} blacklisted",
            self.total(),
            self.accepted,
            self.skipped,
            self.duplicates,
            self.blacklisted
        )
    }
}

/// Snapshot of a registry's contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryStats {
    /// Accepted rooms.
    pub rooms: usize,
    /// Link instances, blank ones included.
    pub links: usize,
    /// Links owned by two rooms.
    pub connected_links: usize,
    /// Rooms with an open blank edge.
    pub entrypoints: usize,
    /// Rows rejected as duplicates or by the blacklist.
    pub rejected: usize,
}

impl fmt::Display for RegistryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rooms, {} links ({} connected), {} entrypoints, {} rejected",
            self.rooms, self.links, self.connected_links, self.entrypoints, self.rejected
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let mut summary = IngestSummary::default();
        summary.record(&RowOutcome::Accepted);
        summary.record(&RowOutcome::Accepted);
        summary.record(&RowOutcome::Skipped);
        summary.record(&RowOutcome::Duplicate {
            existing: RoomId::from("0:2"),
        });
        assert_eq!(summary.total(), 4);
        assert_eq!(
            summary.to_string(),
            "4 rows: 2 accepted, 1 skipped, 1 duplicate, 0 blacklisted"
        );
    }

    #[test]
    fn test_outcome_predicates() {
        let blacklisted = RowOutcome::Blacklisted {
            existing: RoomId::from("blacklist:4"),
        };
        assert!(blacklisted.is_rejected());
        assert!(!blacklisted.is_accepted());
        assert!(!RowOutcome::Skipped.is_rejected());
    }
}
