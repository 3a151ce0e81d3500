//! The `hexboard` command-line tool.
//!
//! Reads tile spreadsheets exported as CSV, builds a registry of rooms and
//! shared links, lays out every entrypoint on a hex grid, and prints a text
//! or JSON report. Logging goes to stderr through `tracing`.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod args;
pub mod input;
pub mod report;

use anyhow::{Context, Result, bail};
use board_layout::GridLayout;
use board_registry::Registry;
use board_types::{ColumnMapping, IngestConfig, LayoutConfig};
use tracing::info;

pub use args::{Cli, Format};
pub use report::Report;

/// Source tag of blacklist rooms.
pub const BLACKLIST_TAG: &str = "blacklist";

/// Runs the whole pipeline and returns the rendered report.
///
/// # Errors
///
/// Fails on bad arguments, unreadable input, or a fatal layout error.
pub fn run(cli: &Cli) -> Result<String> {
    let Some(delimiter) = u8::try_from(cli.delimiter).ok().filter(u8::is_ascii) else {
        bail!("delimiter '{}' is not a single ASCII character", cli.delimiter);
    };
    let mapping = ColumnMapping::named(&cli.mapping)?;
    let ingest_config = IngestConfig::new()
        .with_blank_symbol(cli.blank_symbol)
        .with_header_rows(cli.header_rows);
    let layout_config = LayoutConfig::new().with_max_depth(cli.max_depth).validated()?;

    let blacklist = match &cli.blacklist {
        Some(path) => {
            let mapping = ColumnMapping::named(&cli.blacklist_mapping)?;
            let rows = input::read_rows(path, cli.header_rows, delimiter)?;
            let mut blacklist = Registry::with_config(ingest_config.clone());
            blacklist.ingest(rows, BLACKLIST_TAG, &mapping);
            Some(blacklist)
        }
        None => None,
    };

    let mut registry = Registry::with_config(ingest_config);
    if let Some(blacklist) = &blacklist {
        registry = registry.with_blacklist(blacklist);
    }
    for (index, path) in cli.input.iter().enumerate() {
        let rows = input::read_rows(path, cli.header_rows, delimiter)?;
        registry.ingest(rows, &index.to_string(), &mapping);
    }
    info!("{}", registry.stats());

    let placements = GridLayout::new(&mut registry, layout_config)
        .layout_all()
        .context("layout failed")?;

    let report = Report::new(&registry, &placements);
    match cli.format {
        Format::Text => Ok(report.to_text()),
        Format::Json => report.to_json().context("failed to serialize report"),
    }
}
