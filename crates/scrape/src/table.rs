// ABOUTME: Dimension table job: reads raw dimension strings from CSV and extracts height/width/depth.
// ABOUTME: Uses the "rawDim" column when present, otherwise the first column.

use std::io;
use std::path::Path;

use artscrape_extract::{extract_dimensions, DimensionRow};

use crate::error::ScrapeError;

/// Header of the column holding raw dimension strings.
pub const RAW_DIM_COLUMN: &str = "rawDim";

/// Reads a CSV with a header row and extracts dimensions from every row.
///
/// Row numbers in errors are 1-based and do not count the header.
pub fn read_dimension_table<R: io::Read>(reader: R) -> Result<Vec<DimensionRow>, ScrapeError> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(ScrapeError::EmptyTable);
    }
    let column = headers
        .iter()
        .position(|h| h.trim() == RAW_DIM_COLUMN)
        .unwrap_or(0);

    let mut rows = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        let record = record?;
        let raw = record.get(column).unwrap_or_default();
        let dims = extract_dimensions(raw).map_err(|source| ScrapeError::Row {
            row: idx + 1,
            source,
        })?;
        rows.push(DimensionRow::new(raw, dims));
    }

    tracing::debug!(rows = rows.len(), column, "dimension table read");
    Ok(rows)
}

/// Opens `path` and reads it with [`read_dimension_table`].
pub fn read_dimension_file(path: impl AsRef<Path>) -> Result<Vec<DimensionRow>, ScrapeError> {
    let file = std::fs::File::open(path.as_ref()).map_err(csv::Error::from)?;
    read_dimension_table(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_named_column() {
        let csv = ",rawDim\n0,19×52cm\n1,\"50 x 66,4 cm\"\n";
        let rows = read_dimension_table(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].raw_dim, "19×52cm");
        assert_eq!((rows[0].width, rows[0].height), (19.0, 52.0));
        assert_eq!((rows[1].width, rows[1].height), (50.0, 66.4));
    }

    #[test]
    fn test_falls_back_to_first_column() {
        let rows = read_dimension_table("dims\n5 by 5in\n".as_bytes()).unwrap();
        assert!((rows[0].width - 12.7).abs() < 1e-9);
    }

    #[test]
    fn test_row_without_dimensions_names_row() {
        let err = read_dimension_table("rawDim\n10 x 20cm\nuntitled\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ScrapeError::Row { row: 2, .. }));
    }

    #[test]
    fn test_reads_file_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("dims.csv");
        std::fs::write(&path, "rawDim\n100 x 80 x 4cm\n").unwrap();

        let rows = read_dimension_file(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].depth, Some(4.0));
    }

    #[test]
    fn test_missing_file_is_csv_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = read_dimension_file(dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, ScrapeError::Csv(_)));
    }

    #[test]
    fn test_empty_input() {
        let err = read_dimension_table("".as_bytes()).unwrap_err();
        assert!(matches!(err, ScrapeError::EmptyTable));
    }
}
