//! Link code normalization and validation.
//!
//! Link codes are seven letters over the alphabet `B C D H P S T`. Tiles are
//! keyed by hand, so raw cell values arrive in all shapes: lowercase,
//! underscores standing in for `B`, the word `blank`, truncated runs of `B`,
//! stray spaces and punctuation. [`normalize`] folds these into canonical form
//! without ever failing; [`is_valid_link_code`] decides whether the result is
//! usable.

use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;

/// Number of characters in a link code.
pub const CODE_LEN: usize = 7;

/// The canonical blank code: no connector on this edge.
pub const BLANK_CODE: &str = "BBBBBBB";

const ALPHABET: &[u8] = b"BCDHPST";

fn in_alphabet(c: char) -> bool {
    c.is_ascii() && ALPHABET.contains(&(c.to_ascii_uppercase() as u8))
}

fn is_partial_blank(s: &str) -> bool {
    (1..CODE_LEN).contains(&s.len()) && s.bytes().all(|b| b == b'B')
}

/// Normalizes a raw link code.
///
/// Uppercases, turns `_` into `B`, expands `BLANK` and runs of one to six `B`
/// into [`BLANK_CODE`], and drops every character outside the alphabet. The
/// result is not guaranteed to be valid; check with [`is_valid_link_code`].
///
/// The second argument carries the edge's openness alongside its code;
/// openness does not currently change normalization.
///
/// # Example
///
/// ```
/// use board_types::code::{normalize, BLANK_CODE};
///
/// assert_eq!(normalize("cdh_pst", false), "CDHBPST");
/// assert_eq!(normalize("blank", true), BLANK_CODE);
/// assert_eq!(normalize("bbb", false), BLANK_CODE);
/// assert_eq!(normalize(" c-d-h-p-s-t-b ", false), "CDHPSTB");
/// assert_eq!(normalize("xyz", false), "");
/// ```
#[must_use]
pub fn normalize(raw: &str, _is_opening: bool) -> String {
    let upper = raw.to_uppercase().replace('_', "B");
    if upper == "BLANK" || is_partial_blank(&upper) {
        return BLANK_CODE.to_string();
    }

    let stripped: String = upper.chars().filter(|&c| in_alphabet(c)).collect();
    // Stripping can expose a short run of B's ("B B" -> "BB"), which is blank too.
    if is_partial_blank(&stripped) {
        return BLANK_CODE.to_string();
    }
    stripped
}

/// Returns `true` if `code` matches `^[BCDHPST]{7}$`, ignoring case.
///
/// # Example
///
/// ```
/// use board_types::code::is_valid_link_code;
///
/// assert!(is_valid_link_code("BCDHPST"));
/// assert!(is_valid_link_code("bcdhpst"));
/// assert!(!is_valid_link_code("BCDHPS"));
/// assert!(!is_valid_link_code("ZZZZZZZ"));
/// ```
#[must_use]
pub fn is_valid_link_code(code: &str) -> bool {
    code.chars().count() == CODE_LEN && code.chars().all(in_alphabet)
}

/// A validated, uppercase link code.
///
/// # Example
///
/// ```
/// use board_types::LinkCode;
///
/// let code = LinkCode::parse("cdhpstb").unwrap();
/// assert_eq!(code.as_str(), "CDHPSTB");
/// assert!(!code.is_blank());
/// assert!(LinkCode::blank().is_blank());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct LinkCode([u8; CODE_LEN]);

impl LinkCode {
    /// Parses an already-normalized code.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidLinkCode`] if `code` does not match
    /// `^[BCDHPST]{7}$` (case-insensitive).
    pub fn parse(code: &str) -> Result<Self, BoardError> {
        if !is_valid_link_code(code) {
            return Err(BoardError::InvalidLinkCode(code.to_string()));
        }
        let mut bytes = [b'B'; CODE_LEN];
        for (slot, b) in bytes.iter_mut().zip(code.bytes()) {
            *slot = b.to_ascii_uppercase();
        }
        Ok(Self(bytes))
    }

    /// Normalizes a raw cell value and parses the result.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidLinkCode`] carrying the normalized text
    /// if it is not a valid code.
    pub fn from_raw(raw: &str, is_opening: bool) -> Result<Self, BoardError> {
        Self::parse(&normalize(raw, is_opening))
    }

    /// The canonical blank code.
    #[must_use]
    pub const fn blank() -> Self {
        Self([b'B'; CODE_LEN])
    }

    /// Returns `true` for the all-`B` code.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0 == [b'B'; CODE_LEN]
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only alphabet bytes are ever stored.
        std::str::from_utf8(&self.0).unwrap_or(BLANK_CODE)
    }
}

impl fmt::Display for LinkCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkCode {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LinkCode {
    type Error = BoardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LinkCode> for String {
    fn from(code: LinkCode) -> Self {
        code.as_str().to_string()
    }
}
