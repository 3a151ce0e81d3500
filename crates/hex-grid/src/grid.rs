//! Sparse hex grid data structure.

use hashbrown::HashMap;

use crate::coord::HexCoord;

/// Inclusive bounds of a set of hex cells.
///
/// # Example
///
/// ```
/// use hex_grid::{HexBounds, HexCoord};
///
/// let mut bounds = HexBounds::from_point(HexCoord::new(0, 0));
/// bounds.expand_to_include(HexCoord::new(-2, 3));
///
/// assert_eq!(bounds.min, HexCoord::new(-2, 0));
/// assert_eq!(bounds.max, HexCoord::new(0, 3));
/// assert_eq!(bounds.size(), (3, 4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexBounds {
    /// Minimum column and row (inclusive).
    pub min: HexCoord,
    /// Maximum column and row (inclusive).
    pub max: HexCoord,
}

impl HexBounds {
    /// Creates bounds from two corners, ordering each axis so min ≤ max.
    #[must_use]
    pub fn new(a: HexCoord, b: HexCoord) -> Self {
        Self {
            min: HexCoord::new(a.column.min(b.column), a.row.min(b.row)),
            max: HexCoord::new(a.column.max(b.column), a.row.max(b.row)),
        }
    }

    /// Creates bounds containing a single cell.
    #[must_use]
    pub const fn from_point(coord: HexCoord) -> Self {
        Self {
            min: coord,
            max: coord,
        }
    }

    /// Returns the size of the bounds as `(columns, rows)`.
    ///
    /// Each dimension is at least 1.
    #[must_use]
    pub const fn size(&self) -> (u32, u32) {
        (
            self.max.column.abs_diff(self.min.column).saturating_add(1),
            self.max.row.abs_diff(self.min.row).saturating_add(1),
        )
    }

    /// Checks if the bounds contain a coordinate.
    #[must_use]
    pub const fn contains(&self, coord: HexCoord) -> bool {
        coord.column >= self.min.column
            && coord.column <= self.max.column
            && coord.row >= self.min.row
            && coord.row <= self.max.row
    }

    /// Expands the bounds to include a coordinate.
    pub fn expand_to_include(&mut self, coord: HexCoord) {
        self.min = HexCoord::new(
            self.min.column.min(coord.column),
            self.min.row.min(coord.row),
        );
        self.max = HexCoord::new(
            self.max.column.max(coord.column),
            self.max.row.max(coord.row),
        );
    }
}

impl Default for HexBounds {
    fn default() -> Self {
        Self::from_point(HexCoord::origin())
    }
}

/// A sparse hex grid mapping cells to values.
///
/// Only occupied cells are stored, so boards spread across large signed
/// coordinates cost memory proportional to their tile count.
///
/// # Example
///
/// ```
/// use hex_grid::{HexCoord, HexGrid, Side};
///
/// let mut grid: HexGrid<&str> = HexGrid::new();
/// let origin = HexCoord::origin();
/// grid.set(origin, "start");
/// grid.set(origin.neighbor(Side::Three), "below");
///
/// assert_eq!(grid.get(HexCoord::new(0, 1)), Some(&"below"));
/// assert_eq!(grid.len(), 2);
///
/// let bounds = grid.bounds().unwrap();
/// assert_eq!(bounds.size(), (1, 2));
/// ```
#[derive(Debug, Clone)]
pub struct HexGrid<T> {
    cells: HashMap<HexCoord, T>,
}

impl<T> HexGrid<T> {
    /// Creates an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
        }
    }

    /// Returns the number of occupied cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no cell is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Gets the value at a cell.
    #[must_use]
    pub fn get(&self, coord: HexCoord) -> Option<&T> {
        self.cells.get(&coord)
    }

    /// Sets the value at a cell, returning the previous value if any.
    pub fn set(&mut self, coord: HexCoord, value: T) -> Option<T> {
        self.cells.insert(coord, value)
    }

    /// Removes the value at a cell.
    pub fn remove(&mut self, coord: HexCoord) -> Option<T> {
        self.cells.remove(&coord)
    }

    /// Checks if a cell is occupied.
    #[must_use]
    pub fn contains(&self, coord: HexCoord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Returns an iterator over occupied cells and their values, in no
    /// particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&HexCoord, &T)> {
        self.cells.iter()
    }

    /// Returns occupied cells sorted by column, then row.
    ///
    /// # Example
    ///
    /// ```
    /// use hex_grid::{HexCoord, HexGrid};
    ///
    /// let mut grid = HexGrid::new();
    /// grid.set(HexCoord::new(1, 0), 'b');
    /// grid.set(HexCoord::new(0, 5), 'a');
    /// grid.set(HexCoord::new(1, -1), 'c');
    ///
    /// let order: Vec<char> = grid.sorted().into_iter().map(|(_, v)| *v).collect();
    /// assert_eq!(order, vec!['a', 'c', 'b']);
    /// ```
    #[must_use]
    pub fn sorted(&self) -> Vec<(HexCoord, &T)> {
        let mut cells: Vec<_> = self.cells.iter().map(|(c, v)| (*c, v)).collect();
        cells.sort_by_key(|(coord, _)| *coord);
        cells
    }

    /// Returns an iterator over occupied coordinates.
    pub fn coords(&self) -> impl Iterator<Item = &HexCoord> {
        self.cells.keys()
    }

    /// Returns an iterator over stored values.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.cells.values()
    }

    /// Computes the bounds of all occupied cells.
    ///
    /// Returns `None` if the grid is empty.
    #[must_use]
    pub fn bounds(&self) -> Option<HexBounds> {
        let mut iter = self.cells.keys();
        let first = *iter.next()?;

        let mut bounds = HexBounds::from_point(first);
        for coord in iter {
            bounds.expand_to_include(*coord);
        }

        Some(bounds)
    }
}

impl<T: PartialEq> HexGrid<T> {
    /// Finds the cell holding `value` by scanning the grid.
    ///
    /// # Example
    ///
    /// ```
    /// use hex_grid::{HexCoord, HexGrid};
    ///
    /// let mut grid = HexGrid::new();
    /// grid.set(HexCoord::new(4, 2), "x");
    /// assert_eq!(grid.position_of(&"x"), Some(HexCoord::new(4, 2)));
    /// assert_eq!(grid.position_of(&"y"), None);
    /// ```
    #[must_use]
    pub fn position_of(&self, value: &T) -> Option<HexCoord> {
        self.cells
            .iter()
            .find_map(|(coord, v)| (v == value).then_some(*coord))
    }
}

impl<T> Default for HexGrid<T> {
    fn default() -> Self {
        Self::new()
    }
}
