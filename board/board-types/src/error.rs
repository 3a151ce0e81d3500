//! Error types for board data.
//!
//! Field- and row-level anomalies found while ingesting tiles are not errors;
//! they are reported as [`Diagnostic`](crate::Diagnostic) values. [`BoardError`]
//! covers misuse of the types themselves: unparseable codes, unknown mappings,
//! and bad configuration.

/// Errors that can occur when constructing board types.
///
/// # Example
///
/// ```
/// use board_types::{BoardError, LinkCode};
///
/// let error = LinkCode::parse("ZZZZZZZ").unwrap_err();
/// assert!(error.is_invalid_link_code());
/// assert!(error.to_string().contains("ZZZZZZZ"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum BoardError {
    /// A link code does not match `^[BCDHPST]{7}$`.
    #[error("'{0}' is not a valid link code")]
    InvalidLinkCode(String),

    /// No built-in column mapping has this name.
    #[error("unknown column mapping '{0}' (expected default, legacy or off)")]
    UnknownMapping(String),

    /// An invalid configuration parameter was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl BoardError {
    /// Creates an invalid configuration error with the given message.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Returns `true` if this is an invalid link code error.
    #[must_use]
    pub const fn is_invalid_link_code(&self) -> bool {
        matches!(self, Self::InvalidLinkCode(_))
    }

    /// Returns `true` if this is an unknown mapping error.
    #[must_use]
    pub const fn is_unknown_mapping(&self) -> bool {
        matches!(self, Self::UnknownMapping(_))
    }
}
