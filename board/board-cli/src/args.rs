//! Command-line arguments.

use std::path::PathBuf;

use board_types::config::{DEFAULT_BLANK_SYMBOL, DEFAULT_MAX_DEPTH};
use clap::{Parser, ValueEnum};

/// Rebuild hex boards from tile spreadsheets
///
/// Each input row describes one hexagon tile by the codes on its six edges.
/// Tiles sharing an edge code are joined and laid out on a hex grid from
/// every tile with an open blank edge.
#[derive(Parser, Debug, Clone)]
#[command(name = "hexboard")]
#[command(version, long_about = None)]
pub struct Cli {
    /// CSV file of tiles (repeatable); each file is tagged by its position
    #[arg(short, long = "input", value_name = "FILE", required = true)]
    pub input: Vec<PathBuf>,

    /// Column mapping for the inputs: default, legacy or off
    #[arg(short, long, default_value = "default")]
    pub mapping: String,

    /// Header rows before the data; the last one names the columns
    #[arg(short = 'H', long, default_value_t = 1)]
    pub header_rows: usize,

    /// CSV file of known tiles whose repeats are rejected
    #[arg(long, value_name = "FILE")]
    pub blacklist: Option<PathBuf>,

    /// Column mapping for the blacklist file
    #[arg(long, default_value = "legacy")]
    pub blacklist_mapping: String,

    /// Center symbol of plain wall tiles, exempt from the blacklist
    #[arg(long, default_value_t = DEFAULT_BLANK_SYMBOL)]
    pub blank_symbol: char,

    /// Maximum layout depth (rooms on one path from the entrypoint)
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Field delimiter (a single ASCII character)
    #[arg(short, long, default_value_t = ',')]
    pub delimiter: char,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Returns the default log filter for the requested verbosity.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Report format.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Human-readable listing.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["hexboard", "-i", "tiles.csv"]).unwrap();
        assert_eq!(cli.input, vec![PathBuf::from("tiles.csv")]);
        assert_eq!(cli.mapping, "default");
        assert_eq!(cli.header_rows, 1);
        assert_eq!(cli.blacklist_mapping, "legacy");
        assert_eq!(cli.blank_symbol, 'B');
        assert_eq!(cli.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(cli.format, Format::Text);
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_repeated_inputs_and_flags() {
        let cli = Cli::try_parse_from([
            "hexboard", "-i", "a.csv", "-i", "b.csv", "-m", "off", "-H", "0", "--format", "json",
            "-d", ";", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.input.len(), 2);
        assert_eq!(cli.mapping, "off");
        assert_eq!(cli.header_rows, 0);
        assert_eq!(cli.format, Format::Json);
        assert_eq!(cli.delimiter, ';');
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn test_input_required() {
        assert!(Cli::try_parse_from(["hexboard"]).is_err());
    }
}
