//! Hexagon geometry for board reconstruction.
//!
//! This crate provides the coordinate layer used by the board crates:
//!
//! - [`Side`] - The six sides of a hexagon, with rotation and opposites
//! - [`HexCoord`] - Signed offset coordinates with per-side neighbor steps
//! - [`HexBounds`] - Inclusive column/row bounds
//! - [`HexGrid`] - Sparse cell storage with bounds computation
//!
//! # Layer 0 Crate
//!
//! This crate knows nothing about tiles, links, or input formats. It can be
//! reused by any tool that needs column-offset hex grids.
//!
//! # Coordinate System
//!
//! Cells are addressed by `(column, row)`. Odd columns sit half a cell higher
//! than even columns, so the diagonal sides look at column parity to pick
//! their row offset. Side 3 points toward increasing rows.
//!
//! # Example
//!
//! ```
//! use hex_grid::{HexCoord, HexGrid, Side};
//!
//! let mut grid = HexGrid::new();
//! let mut cursor = HexCoord::origin();
//! for side in [Side::One, Side::Two, Side::Three] {
//!     grid.set(cursor, side);
//!     cursor = cursor.neighbor(side);
//! }
//!
//! assert_eq!(grid.len(), 3);
//! assert_eq!(cursor, HexCoord::new(2, 1));
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod coord;
mod error;
mod grid;
mod side;

pub use coord::HexCoord;
pub use error::GridError;
pub use grid::{HexBounds, HexGrid};
pub use side::Side;
