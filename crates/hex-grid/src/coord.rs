//! Offset hex coordinate types.

use std::fmt;

use crate::error::GridError;
use crate::side::Side;

/// A discrete hex cell in "column-offset" coordinates.
///
/// Columns alternate parity: cells in odd columns sit half a cell higher than
/// their even neighbors, so the diagonal sides (1, 2, 4, 5) pick their row
/// offset from the parity of the current column. Both axes are signed so the
/// layout origin can sit anywhere on the board.
///
/// | side | Δcolumn | Δrow |
/// |------|---------|------|
/// | 1 | +1 | `-parity` |
/// | 2 | +1 | `1 - parity` |
/// | 3 | 0 | +1 |
/// | 4 | -1 | `1 - parity` |
/// | 5 | -1 | `-parity` |
/// | 6 | 0 | -1 |
///
/// # Example
///
/// ```
/// use hex_grid::{HexCoord, Side};
///
/// let origin = HexCoord::origin();
/// assert_eq!(origin.neighbor(Side::Three), HexCoord::new(0, 1));
/// assert_eq!(origin.neighbor(Side::Two), HexCoord::new(1, 1));
///
/// // Odd columns shift the diagonals up by one row
/// let odd = HexCoord::new(1, 0);
/// assert_eq!(odd.neighbor(Side::One), HexCoord::new(2, -1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexCoord {
    /// Horizontal cell index.
    pub column: i32,
    /// Vertical cell index within the column.
    pub row: i32,
}

impl HexCoord {
    /// Creates a new hex coordinate.
    #[must_use]
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Creates a coordinate at the origin (0, 0).
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Returns the coordinate as a `(column, row)` tuple.
    #[must_use]
    pub const fn as_tuple(self) -> (i32, i32) {
        (self.column, self.row)
    }

    /// Returns `1` for odd columns and `0` for even ones, negatives included.
    #[must_use]
    pub const fn parity(self) -> i32 {
        self.column.rem_euclid(2)
    }

    /// Returns the `(Δcolumn, Δrow)` step toward `side` from this cell.
    #[must_use]
    pub const fn delta(self, side: Side) -> (i32, i32) {
        let parity = self.parity();
        match side {
            Side::One => (1, -parity),
            Side::Two => (1, 1 - parity),
            Side::Three => (0, 1),
            Side::Four => (-1, 1 - parity),
            Side::Five => (-1, -parity),
            Side::Six => (0, -1),
        }
    }

    /// Returns the adjacent cell across `side`.
    ///
    /// Wraps on overflow; use [`HexCoord::checked_neighbor`] near the `i32`
    /// limits.
    #[must_use]
    pub const fn neighbor(self, side: Side) -> Self {
        let (dc, dr) = self.delta(side);
        Self::new(self.column.wrapping_add(dc), self.row.wrapping_add(dr))
    }

    /// Returns the adjacent cell across `side`, failing on overflow.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CoordinateOverflow`] if the step leaves `i32` range.
    pub const fn checked_neighbor(self, side: Side) -> Result<Self, GridError> {
        let (dc, dr) = self.delta(side);
        match (self.column.checked_add(dc), self.row.checked_add(dr)) {
            (Some(column), Some(row)) => Ok(Self::new(column, row)),
            _ => Err(GridError::CoordinateOverflow {
                column: self.column,
                row: self.row,
            }),
        }
    }

    /// Returns the adjacent cell for a raw 1-based side position.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSide`] if `position` is not in `1..=6`, or
    /// [`GridError::CoordinateOverflow`] if the step leaves `i32` range.
    ///
    /// # Example
    ///
    /// ```
    /// use hex_grid::{GridError, HexCoord};
    ///
    /// let coord = HexCoord::origin();
    /// assert_eq!(coord.neighbor_at(6), Ok(HexCoord::new(0, -1)));
    /// assert_eq!(coord.neighbor_at(7), Err(GridError::InvalidSide(7)));
    /// ```
    pub fn neighbor_at(self, position: i64) -> Result<Self, GridError> {
        self.checked_neighbor(Side::from_position(position)?)
    }

    /// Returns all six neighbors in side order `1..=6`.
    #[must_use]
    pub fn neighbors(self) -> [Self; 6] {
        Side::ALL.map(|side| self.neighbor(side))
    }

    /// Returns the side through which `other` is adjacent, if it is a neighbor.
    ///
    /// # Example
    ///
    /// ```
    /// use hex_grid::{HexCoord, Side};
    ///
    /// let a = HexCoord::new(3, 2);
    /// let b = a.neighbor(Side::Four);
    /// assert_eq!(a.side_toward(b), Some(Side::Four));
    /// assert_eq!(b.side_toward(a), Some(Side::One));
    /// assert_eq!(a.side_toward(a), None);
    /// ```
    #[must_use]
    pub fn side_toward(self, other: Self) -> Option<Side> {
        Side::ALL
            .into_iter()
            .find(|&side| self.neighbor(side) == other)
    }
}

impl From<(i32, i32)> for HexCoord {
    fn from((column, row): (i32, i32)) -> Self {
        Self::new(column, row)
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.column, self.row)
    }
}
