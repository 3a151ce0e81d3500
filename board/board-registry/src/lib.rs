//! Room and link registry for hex board reconstruction.
//!
//! Rows go in, rooms come out. The registry normalizes each row's edge codes,
//! collapses identical non-blank edges into shared links, rejects rows that
//! repeat an existing room or a blacklisted one, and records the rooms with
//! an open blank edge as layout entrypoints.
//!
//! # Overview
//!
//! - [`Registry`]: ingestion, lookups, and room alignment
//! - [`LinkTable`]: link arena with owner table
//! - [`RoomIdSequence`]: `tag:row` identifiers for a source
//! - [`RowOutcome`], [`IngestSummary`], [`RegistryStats`]: results
//!
//! # Example
//!
//! ```
//! use board_registry::Registry;
//! use board_types::{ColumnMapping, Row};
//!
//! let rows = vec![
//!     Row::from_pairs([("Center", "e"), ("Openings", "1"), ("Link1", "blank"), ("Link3", "CDHPSTB")]),
//!     Row::from_pairs([("Center", "a"), ("Openings", ""), ("Link1", "TTTTTTT"), ("Link6", "CDHPSTB")]),
//! ];
//!
//! let mut registry = Registry::new();
//! let summary = registry.ingest(rows, "0", &ColumnMapping::default());
//!
//! assert_eq!(summary.accepted, 2);
//! assert_eq!(registry.stats().connected_links, 1);
//! assert_eq!(registry.entrypoint_ids().next().map(|id| id.as_str()), Some("0:2"));
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod links;
mod outcome;
mod registry;
mod sequence;

pub use error::RegistryError;
pub use links::{LinkTable, MAX_OWNERS};
pub use outcome::{IngestSummary, RegistryStats, RowOutcome};
pub use registry::Registry;
pub use sequence::RoomIdSequence;
