//! Room identifier generation.

use board_types::RoomId;

/// Generates `tag:row` identifiers for consecutive data rows of one source.
///
/// Row numbers follow the sheet: the first data row after `header_rows`
/// header lines is row `header_rows + 1`.
///
/// # Example
///
/// ```
/// use board_registry::RoomIdSequence;
///
/// let mut ids = RoomIdSequence::new("0", 1);
/// assert_eq!(ids.next().unwrap().as_str(), "0:2");
/// assert_eq!(ids.next().unwrap().as_str(), "0:3");
/// ```
#[derive(Debug, Clone)]
pub struct RoomIdSequence {
    tag: String,
    next_row: usize,
}

impl RoomIdSequence {
    /// Starts a sequence for a source.
    #[must_use]
    pub fn new(tag: impl Into<String>, header_rows: usize) -> Self {
        Self {
            tag: tag.into(),
            next_row: header_rows + 1,
        }
    }

    /// Returns the source tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the row number the next identifier will carry.
    #[must_use]
    pub const fn peek_row(&self) -> usize {
        self.next_row
    }
}

impl Iterator for RoomIdSequence {
    type Item = RoomId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = RoomId::from_source(&self.tag, self.next_row);
        self.next_row = self.next_row.checked_add(1)?;
        Some(id)
    }
}
