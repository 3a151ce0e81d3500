//! Core types for hex board reconstruction: codes, links, rooms, and mappings.
//!
//! This crate provides the data model shared by the registry and layout
//! crates.
//!
//! # Overview
//!
//! - **Codes**: Normalization and validation of seven-letter edge codes
//!   ([`code::normalize`], [`LinkCode`])
//! - **Links**: Edge connectors keyed by code and openness ([`Link`],
//!   [`LinkId`], [`SlotLink`])
//! - **Rooms**: Hexagon tiles with six rotatable slots ([`Room`], [`RoomId`])
//! - **Input**: Rows and column mappings ([`Row`], [`ColumnMapping`], [`Column`])
//! - **Diagnostics**: Recoverable anomalies ([`Diagnostic`])
//! - **Configuration**: Ingestion and layout settings ([`IngestConfig`],
//!   [`LayoutConfig`])
//!
//! # Example
//!
//! ```
//! use board_types::{ColumnMapping, Link, LinkCode, Row};
//! use board_types::mapping::parse_openings;
//! use hex_grid::Side;
//!
//! let row = Row::from_pairs([
//!     ("Center", "a"),
//!     ("Openings", "1"),
//!     ("Link1", "blank"),
//! ]);
//! let mapping = ColumnMapping::default();
//!
//! let open = parse_openings(row.get_or_empty(&mapping.openings));
//! let is_opening = open.contains(&Side::One);
//! let code = LinkCode::from_raw(row.get_or_empty(mapping.link(Side::One)), is_opening).unwrap();
//!
//! assert!(Link::new(code, is_opening).is_entrypoint());
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization/deserialization for all types

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod code;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod link;
pub mod mapping;
pub mod room;
pub mod row;

pub use code::{BLANK_CODE, LinkCode, is_valid_link_code, normalize};
pub use config::{IngestConfig, LayoutConfig};
pub use diagnostic::Diagnostic;
pub use error::BoardError;
pub use link::{Link, LinkId, SlotLink};
pub use mapping::{Column, ColumnMapping};
pub use room::{Room, RoomId};
pub use row::Row;
