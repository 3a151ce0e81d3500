//! Configuration for ingestion and layout.
//!
//! # Example
//!
//! ```
//! use board_types::{IngestConfig, LayoutConfig};
//!
//! let ingest = IngestConfig::default().with_blank_symbol('W');
//! assert_eq!(ingest.blank_symbol(), 'W');
//!
//! let layout = LayoutConfig::default().with_max_depth(500);
//! assert!(layout.validate().is_empty());
//! ```

use crate::error::BoardError;

/// Default center symbol of plain wall tiles.
pub const DEFAULT_BLANK_SYMBOL: char = 'B';

/// Default layout depth ceiling.
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Settings for row ingestion.
///
/// # Example
///
/// ```
/// use board_types::IngestConfig;
///
/// let config = IngestConfig::new();
/// assert_eq!(config.blank_symbol(), 'B');
/// assert_eq!(config.header_rows(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IngestConfig {
    /// Center symbol of plain wall tiles. Blacklist rooms with this symbol do
    /// not reject new rows.
    blank_symbol: char,
    /// Header rows preceding the data; used to turn row indices into sheet
    /// row numbers.
    header_rows: usize,
}

impl IngestConfig {
    /// Creates a configuration with default settings.
    ///
    /// Defaults:
    /// - Blank symbol: `B`
    /// - Header rows: 1
    #[must_use]
    pub const fn new() -> Self {
        Self {
            blank_symbol: DEFAULT_BLANK_SYMBOL,
            header_rows: 1,
        }
    }

    /// Sets the blank sentinel symbol. It is uppercased to match parsed
    /// center symbols.
    #[must_use]
    pub fn with_blank_symbol(mut self, symbol: char) -> Self {
        self.blank_symbol = symbol.to_uppercase().next().unwrap_or(symbol);
        self
    }

    /// Sets the number of header rows.
    #[must_use]
    pub const fn with_header_rows(mut self, rows: usize) -> Self {
        self.header_rows = rows;
        self
    }

    /// Returns the blank sentinel symbol.
    #[must_use]
    pub const fn blank_symbol(&self) -> char {
        self.blank_symbol
    }

    /// Returns the number of header rows.
    #[must_use]
    pub const fn header_rows(&self) -> usize {
        self.header_rows
    }

    /// Returns the 1-based sheet row number of the data row at `index`.
    ///
    /// # Example
    ///
    /// ```
    /// use board_types::IngestConfig;
    ///
    /// assert_eq!(IngestConfig::new().row_number(0), 2);
    /// assert_eq!(IngestConfig::new().with_header_rows(0).row_number(0), 1);
    /// ```
    #[must_use]
    pub const fn row_number(&self, index: usize) -> usize {
        index + self.header_rows + 1
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings for grid layout.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    /// Maximum path length, in rooms, before layout fails.
    max_depth: usize,
}

impl LayoutConfig {
    /// Creates a configuration with default settings (depth ceiling 10 000).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the depth ceiling.
    #[must_use]
    pub const fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Returns the depth ceiling.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Validates the configuration, returning a list of issues.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.max_depth == 0 {
            issues.push("max_depth must be at least 1".to_string());
        }

        issues
    }

    /// Validates the configuration, failing on the first issue.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidConfig`] if [`LayoutConfig::validate`]
    /// reports anything.
    pub fn validated(self) -> Result<Self, BoardError> {
        match self.validate().into_iter().next() {
            Some(issue) => Err(BoardError::invalid_config(issue)),
            None => Ok(self),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new()
    }
}
