//! Dataset loading and extrema.
//!
//! The input is a header line followed by `category,id,x,y` rows. Rows are
//! stored as four parallel columns that stay index-aligned.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Number of fields in every data row.
const FIELD_COUNT: usize = 4;

/// Lines consumed by the header before csv parsing starts.
const HEADER_LINES: u64 = 1;

/// One data row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    /// Category label, used for color and legend
    pub category: String,
    /// Row identifier drawn next to the point
    pub id: String,
    /// Horizontal value
    pub x: f64,
    /// Vertical value
    pub y: f64,
}

/// All rows of a data file, kept as parallel columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    categories: Vec<String>,
    ids: Vec<String>,
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Dataset {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a data file from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_reader(file).map_err(|err| match err {
            Error::Read(source) => Error::Io {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        log::info!("Loaded {} records from {}", dataset.len(), path.display());
        Ok(dataset)
    }

    /// Parses data rows from any reader. The first line is a header and is discarded.
    ///
    /// The header is always the first physical line, even when it is blank.
    /// Fields are split on commas with no quoting, and surrounding whitespace
    /// is trimmed. Blank data lines are skipped. Reported line numbers count
    /// the header.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = BufReader::new(reader);
        let mut header = Vec::new();
        if reader.read_until(b'\n', &mut header).map_err(Error::Read)? == 0 {
            return Err(Error::EmptyData);
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut dataset = Self::new();
        for row in reader.records() {
            let row = row.map_err(csv_error)?;
            let line = row.position().map_or(0, |pos| pos.line()) + HEADER_LINES;
            if row.len() != FIELD_COUNT {
                return Err(Error::Parse {
                    line,
                    message: format!("expected {FIELD_COUNT} fields, found {}", row.len()),
                });
            }
            let record: Record = row.deserialize(None).map_err(|err| Error::Parse {
                line,
                message: deserialize_message(&err),
            })?;
            if !record.x.is_finite() || !record.y.is_finite() {
                return Err(Error::Parse {
                    line,
                    message: format!("non-finite coordinate ({}, {})", record.x, record.y),
                });
            }
            dataset.push(record);
        }

        if dataset.is_empty() {
            return Err(Error::EmptyData);
        }
        Ok(dataset)
    }

    /// Appends a record to all four columns.
    pub fn push(&mut self, record: Record) {
        self.categories.push(record.category);
        self.ids.push(record.id);
        self.xs.push(record.x);
        self.ys.push(record.y);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Category column.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Id column.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// x column.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// y column.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut dataset = Self::new();
        for record in iter {
            dataset.push(record);
        }
        dataset
    }
}

/// Observed minimum and maximum of both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrema {
    /// Smallest x
    pub x_min: f64,
    /// Largest x
    pub x_max: f64,
    /// Smallest y
    pub y_min: f64,
    /// Largest y
    pub y_max: f64,
}

impl Extrema {
    /// Computes the extrema of a dataset, or `None` when it is empty.
    pub fn of(dataset: &Dataset) -> Option<Self> {
        if dataset.is_empty() {
            return None;
        }
        let (x_min, x_max) = min_max(dataset.xs());
        let (y_min, y_max) = min_max(dataset.ys());
        Some(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

fn csv_error(err: csv::Error) -> Error {
    let line = err.position().map_or(0, |pos| pos.line()) + HEADER_LINES;
    match err.into_kind() {
        csv::ErrorKind::Io(source) => Error::Read(source),
        csv::ErrorKind::Utf8 { err, .. } => Error::Parse {
            line,
            message: format!("field {} is not valid UTF-8", err.field() + 1),
        },
        kind => Error::Parse {
            line,
            message: format!("malformed row: {kind:?}"),
        },
    }
}

fn deserialize_message(err: &csv::Error) -> String {
    match err.kind() {
        csv::ErrorKind::Deserialize { err, .. } => match err.field() {
            Some(field) => format!("field {}: {}", field + 1, err.kind()),
            None => err.kind().to_string(),
        },
        _ => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "category,id,x,y\nA,p1,0.0,0.0\nA,p2,10.0,10.0\nB,p3,5.0,5.0\n";

    #[test]
    fn test_reader_produces_aligned_columns() {
        let dataset = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.categories(), ["A", "A", "B"]);
        assert_eq!(dataset.ids(), ["p1", "p2", "p3"]);
        assert_eq!(dataset.xs(), [0.0, 10.0, 5.0]);
        assert_eq!(dataset.ys(), [0.0, 10.0, 5.0]);
    }

    #[test]
    fn test_header_is_discarded_even_if_numeric() {
        let dataset = Dataset::from_reader("c,i,1,2\nA,p1,3,4\n".as_bytes()).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.xs(), [3.0]);
    }

    #[test]
    fn test_blank_first_line_is_the_header() {
        let dataset = Dataset::from_reader("\nA,p1,1,2\nB,p2,3,4\n".as_bytes()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.ids(), ["p1", "p2"]);
    }

    #[test]
    fn test_line_numbers_count_blank_header() {
        match Dataset::from_reader("\nA,p1,1,2\nB,p2,x,4\n".as_bytes()) {
            Err(Error::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let input: &[u8] = b"header\nA,p1,1,2\nB,\xff\xfe,3,4\n";
        match Dataset::from_reader(input) {
            Err(Error::Parse { message, .. }) => {
                assert!(message.contains("field 2"), "{message}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "device gone"))
        }
    }

    #[test]
    fn test_reader_failure_is_read_error() {
        match Dataset::from_reader(FailingReader) {
            Err(err @ Error::Read(_)) => assert!(err.to_string().contains("device gone")),
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn test_whitespace_and_blank_lines() {
        let input = "header\r\n  A , p1 , 1.5 , -2 \r\n\r\nB,p2,3,4";
        let dataset = Dataset::from_reader(input.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.categories(), ["A", "B"]);
        assert_eq!(dataset.ids(), ["p1", "p2"]);
        assert_eq!(dataset.xs(), [1.5, 3.0]);
        assert_eq!(dataset.ys(), [-2.0, 4.0]);
    }

    #[test]
    fn test_quotes_are_ordinary_characters() {
        let dataset = Dataset::from_reader("h\n\"A,p1,1,2\n".as_bytes()).unwrap();
        assert_eq!(dataset.categories(), ["\"A"]);
    }

    #[test]
    fn test_wrong_field_count_reports_line() {
        let input = "header\nA,p1,1,2\nA,p2,3\n";
        match Dataset::from_reader(input.as_bytes()) {
            Err(Error::Parse { line, message }) => {
                assert_eq!(line, 3);
                assert!(message.contains("found 3"), "{message}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_value_reports_line() {
        let input = "header\nA,p1,1,2\nB,p2,3,4\nB,p3,abc,5\n";
        match Dataset::from_reader(input.as_bytes()) {
            Err(Error::Parse { line, .. }) => assert_eq!(line, 4),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_value_is_rejected() {
        let result = Dataset::from_reader("header\nA,p1,NaN,1\n".as_bytes());
        assert!(matches!(result, Err(Error::Parse { line: 2, .. })));
    }

    #[test]
    fn test_header_only_is_empty_data() {
        assert!(matches!(
            Dataset::from_reader("category,id,x,y\n".as_bytes()),
            Err(Error::EmptyData)
        ));
        assert!(matches!(
            Dataset::from_reader("".as_bytes()),
            Err(Error::EmptyData)
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        match Dataset::from_path(&path) {
            Err(Error::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        std::fs::write(&path, SAMPLE).unwrap();
        let dataset = Dataset::from_path(&path).unwrap();
        assert_eq!(dataset.len(), 3);
    }

    #[test]
    fn test_extrema_match_columns() {
        let dataset = Dataset::from_reader("h\nA,a,3,-1\nB,b,-2,8\nC,c,7,0.5\n".as_bytes()).unwrap();
        let extrema = Extrema::of(&dataset).unwrap();
        assert_eq!(extrema.x_min, -2.0);
        assert_eq!(extrema.x_max, 7.0);
        assert_eq!(extrema.y_min, -1.0);
        assert_eq!(extrema.y_max, 8.0);
    }

    #[test]
    fn test_extrema_of_empty_dataset() {
        assert!(Extrema::of(&Dataset::new()).is_none());
    }

    #[test]
    fn test_collect_records() {
        let dataset: Dataset = vec![Record {
            category: "A".into(),
            id: "p1".into(),
            x: 1.0,
            y: 2.0,
        }]
        .into_iter()
        .collect();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.ids(), ["p1"]);
    }
}
