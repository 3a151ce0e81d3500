//! Input rows.

use indexmap::IndexMap;

use crate::mapping::Column;

/// One record from a tabular source: ordered column name to raw value.
///
/// Columns can be read by header name or by 1-based position, so the same
/// row works with both named and positional mappings.
///
/// # Example
///
/// ```
/// use board_types::{Column, Row};
///
/// let row = Row::from_pairs([("Center", "A"), ("Openings", "12")]);
/// assert_eq!(row.get(&Column::name("Center")), Some("A"));
/// assert_eq!(row.get(&Column::Position(2)), Some("12"));
/// assert_eq!(row.get(&Column::Position(3)), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    cells: IndexMap<String, String>,
}

impl Row {
    /// Creates an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a row from `(column, value)` pairs, keeping their order.
    ///
    /// A repeated column name keeps its first position and takes the last
    /// value.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            cells: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Builds a headerless row; columns are named `1`, `2`, ... by position.
    pub fn from_values<V: Into<String>>(values: impl IntoIterator<Item = V>) -> Self {
        Self::from_pairs(
            values
                .into_iter()
                .enumerate()
                .map(|(i, v)| ((i + 1).to_string(), v)),
        )
    }

    /// Appends or replaces a cell.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Reads a cell by column reference.
    #[must_use]
    pub fn get(&self, column: &Column) -> Option<&str> {
        let value = match column {
            Column::Name(name) => self.cells.get(name.as_str()),
            Column::Position(pos) => pos
                .checked_sub(1)
                .and_then(|i| self.cells.get_index(i))
                .map(|(_, v)| v),
        };
        value.map(String::as_str)
    }

    /// Reads a cell, treating a missing column as empty.
    #[must_use]
    pub fn get_or_empty(&self, column: &Column) -> &str {
        self.get(column).unwrap_or("")
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the row has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over `(column, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_positions() {
        let row = Row::from_values(["a", "b", "c"]);
        assert_eq!(row.get(&Column::Position(1)), Some("a"));
        assert_eq!(row.get(&Column::Position(3)), Some("c"));
        assert_eq!(row.get(&Column::name("2")), Some("b"));
    }

    #[test]
    fn test_position_zero_is_missing() {
        let row = Row::from_values(["a"]);
        assert_eq!(row.get(&Column::Position(0)), None);
        assert_eq!(row.get_or_empty(&Column::Position(0)), "");
    }

    #[test]
    fn test_insert_keeps_order() {
        let mut row = Row::new();
        row.insert("x", "1");
        row.insert("y", "2");
        row.insert("x", "3");
        let cells: Vec<_> = row.iter().collect();
        assert_eq!(cells, vec![("x", "3"), ("y", "2")]);
        assert_eq!(row.len(), 2);
        assert!(!row.is_empty());
    }
}
