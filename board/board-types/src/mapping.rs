//! Column mappings from tabular rows to tile fields.
//!
//! Tile sheets have been collected with different headers over time. A
//! [`ColumnMapping`] says which column feeds the center symbol, the openings
//! field and the six link slots. Three presets are built in:
//!
//! | name | Center | Openings | Link 1..6 |
//! |------|--------|----------|-----------|
//! | `default` | `Center` | `Openings` | `Link1` .. `Link6` |
//! | `legacy` | `Big Symbol` | `Openings` | `A Combo` .. `F Combo` |
//! | `off` | column 1 | column 2 | columns 3 .. 8 |

use std::collections::BTreeSet;
use std::fmt;

use hex_grid::Side;

use crate::error::BoardError;

/// A column reference: by header name or by 1-based position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Column {
    /// Header name.
    Name(String),
    /// 1-based column position.
    Position(usize),
}

impl Column {
    /// Shortcut for [`Column::Name`].
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "'{name}'"),
            Self::Position(pos) => write!(f, "#{pos}"),
        }
    }
}

/// Which columns hold a tile's center symbol, openings, and links.
///
/// # Example
///
/// ```
/// use board_types::{Column, ColumnMapping};
/// use hex_grid::Side;
///
/// let mapping = ColumnMapping::named("legacy").unwrap();
/// assert_eq!(mapping.center, Column::name("Big Symbol"));
/// assert_eq!(mapping.link(Side::Six), &Column::name("F Combo"));
///
/// assert!(ColumnMapping::named("nope").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnMapping {
    /// Column holding the center symbol.
    pub center: Column,
    /// Column holding the openings field.
    pub openings: Column,
    /// Columns holding link codes for sides 1 through 6.
    pub links: [Column; 6],
}

impl ColumnMapping {
    /// Names accepted by [`ColumnMapping::named`].
    pub const NAMES: [&'static str; 3] = ["default", "legacy", "off"];

    /// Looks up a built-in mapping by name.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownMapping`] for names other than
    /// `default`, `legacy`, and `off`.
    pub fn named(name: &str) -> Result<Self, BoardError> {
        match name {
            "default" => Ok(Self::standard()),
            "legacy" => Ok(Self::legacy()),
            "off" => Ok(Self::positional()),
            other => Err(BoardError::UnknownMapping(other.to_string())),
        }
    }

    /// `Center`, `Openings`, `Link1` .. `Link6`.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            center: Column::name("Center"),
            openings: Column::name("Openings"),
            links: std::array::from_fn(|i| Column::Name(format!("Link{}", i + 1))),
        }
    }

    /// Headers of the first-generation tile sheets.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            center: Column::name("Big Symbol"),
            openings: Column::name("Openings"),
            links: ["A", "B", "C", "D", "E", "F"].map(|l| Column::Name(format!("{l} Combo"))),
        }
    }

    /// Raw positions: center in column 1, openings in 2, links in 3 through 8.
    #[must_use]
    pub fn positional() -> Self {
        Self {
            center: Column::Position(1),
            openings: Column::Position(2),
            links: std::array::from_fn(|i| Column::Position(i + 3)),
        }
    }

    /// Returns the column for a side's link code.
    #[must_use]
    pub const fn link(&self, side: Side) -> &Column {
        &self.links[side.index()]
    }
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self::standard()
    }
}

/// Parses an openings field: each digit `1`..`6` anywhere in the text marks
/// that side as passable.
///
/// # Example
///
/// ```
/// use board_types::mapping::parse_openings;
/// use hex_grid::Side;
///
/// let open = parse_openings("1, 4 & 6");
/// assert_eq!(open.into_iter().collect::<Vec<_>>(), vec![Side::One, Side::Four, Side::Six]);
/// assert!(parse_openings("none").is_empty());
/// ```
#[must_use]
pub fn parse_openings(raw: &str) -> BTreeSet<Side> {
    raw.chars()
        .filter_map(|c| c.to_digit(10))
        .filter_map(|d| Side::from_position(i64::from(d)).ok())
        .collect()
}
