//! Hex grid layout for hex board reconstruction.
//!
//! Starting from an entrypoint room, [`GridLayout`] walks shared links
//! depth-first, rotating each newly reached room so the link it was reached
//! through faces back across the edge, and records every room's cell in a
//! [`Placement`].
//!
//! Cells use offset coordinates with column parity (see
//! [`hex_grid::HexCoord`]); the entrypoint sits at `(0, 0)`.
//!
//! # Example
//!
//! ```
//! use board_layout::GridLayout;
//! use board_registry::Registry;
//! use board_types::{ColumnMapping, LayoutConfig, Row};
//!
//! let mut registry = Registry::new();
//! registry.ingest(
//!     vec![
//!         Row::from_pairs([("Center", "e"), ("Openings", "1"), ("Link1", "blank"), ("Link2", "HHHHHHH")]),
//!         Row::from_pairs([("Center", "a"), ("Openings", ""), ("Link1", "HHHHHHH")]),
//!     ],
//!     "0",
//!     &ColumnMapping::default(),
//! );
//!
//! let placements = GridLayout::new(&mut registry, LayoutConfig::default())
//!     .layout_all()
//!     .unwrap();
//!
//! assert_eq!(placements.len(), 1);
//! assert_eq!(placements[0].len(), 2);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod layout;
mod placement;

pub use error::LayoutError;
pub use layout::GridLayout;
pub use placement::Placement;
