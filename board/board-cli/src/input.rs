//! CSV input.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use board_types::Row;

/// Reads rows from a CSV file.
///
/// See [`read_rows_from`].
///
/// # Errors
///
/// Fails if the file cannot be opened or a record cannot be read.
pub fn read_rows(path: &Path, header_rows: usize, delimiter: u8) -> Result<Vec<Row>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    read_rows_from(file, header_rows, delimiter)
        .with_context(|| format!("failed to read {}", path.display()))
}

/// Reads rows from CSV data.
///
/// The first `header_rows` records are not data; the last of them names the
/// columns. Without header rows, columns are named by their 1-based position.
/// Unnamed header cells also fall back to their position. Records may have
/// differing lengths.
///
/// # Errors
///
/// Fails if a record cannot be parsed.
pub fn read_rows_from<R: Read>(reader: R, header_rows: usize, delimiter: u8) -> Result<Vec<Row>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    let mut names: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("bad record {}", index + 1))?;
        if index < header_rows {
            names = Some(
                record
                    .iter()
                    .enumerate()
                    .map(|(i, name)| match name.trim() {
                        "" => (i + 1).to_string(),
                        name => name.to_string(),
                    })
                    .collect(),
            );
            continue;
        }

        let row = match &names {
            Some(names) => Row::from_pairs(
                record
                    .iter()
                    .enumerate()
                    .map(|(i, value)| (names.get(i).cloned().unwrap_or_else(|| (i + 1).to_string()), value)),
            ),
            None => Row::from_values(record.iter()),
        };
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use board_types::{Column, ColumnMapping};
    use hex_grid::Side;

    #[test]
    fn test_named_columns_from_last_header() {
        let data = "Board export,,\nCenter,Openings,Link1\na,1,blank\nb,,CDHPSTB\n";
        let rows = read_rows_from(data.as_bytes(), 2, b',').unwrap();

        assert_eq!(rows.len(), 2);
        let mapping = ColumnMapping::default();
        assert_eq!(rows[0].get(&mapping.center), Some("a"));
        assert_eq!(rows[1].get(mapping.link(Side::One)), Some("CDHPSTB"));
    }

    #[test]
    fn test_positional_without_headers() {
        let data = "a;1;blank;CCCCCCC\n";
        let rows = read_rows_from(data.as_bytes(), 0, b';').unwrap();

        let mapping = ColumnMapping::positional();
        assert_eq!(rows[0].get(&mapping.center), Some("a"));
        assert_eq!(rows[0].get(mapping.link(Side::Two)), Some("CCCCCCC"));
        assert_eq!(rows[0].get(mapping.link(Side::Three)), None);
    }

    #[test]
    fn test_short_and_unnamed_header() {
        let data = "Center,,Link1\na,x,blank,extra\n";
        let rows = read_rows_from(data.as_bytes(), 1, b',').unwrap();

        assert_eq!(rows[0].get(&Column::name("2")), Some("x"));
        assert_eq!(rows[0].get(&Column::name("4")), Some("extra"));
    }

    #[test]
    fn test_missing_file() {
        let error = read_rows(Path::new("/nonexistent/tiles.csv"), 1, b',').unwrap_err();
        assert!(error.to_string().contains("failed to open"));
    }
}
