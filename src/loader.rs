use csv::Trim;
use serde::Deserialize;

use std::{io, path::Path};

use crate::{diag::DiagnosticSink, error::ReportError, views::Views};

/// The canonical required column names, each paired with the label the
/// legacy dashboard export uses for the same column.
pub const REQUIRED_COLUMNS: [(&str, &str); 3] = [
    ("organization", "Parent org"),
    ("brand", "Brand"),
    ("view_count", "Product View Count"),
];

/// One input record: views of one brand's products, attributed to the
/// brand's parent organization.
#[derive(Debug, Clone, Deserialize, Eq, PartialEq)]
pub struct Row {
    #[serde(alias = "Parent org")]
    pub organization: String,
    #[serde(alias = "Brand")]
    pub brand: String,
    #[serde(alias = "Product View Count")]
    pub view_count: Views,
}

/// Reads view-count rows from the CSV file at `path`.
///
/// Column labels are trimmed of surrounding whitespace before the schema
/// check, so padded headers in hand-edited exports do not trip it. Cell
/// values are left untouched. Each required column may appear under its
/// canonical name or its legacy label; see [`REQUIRED_COLUMNS`].
///
/// One diagnostic naming the columns found is sent to `diag`.
///
/// # Errors
///
/// * [`ReportError::NotFound`] if `path` does not exist
/// * [`ReportError::Io`] for any other read failure
/// * [`ReportError::Format`] if the content is not a parsable table
/// * [`ReportError::Schema`] naming any required columns still absent
///   after normalization
/// * [`ReportError::Data`] if a row holds a missing or malformed view
///   count
pub fn load(path: impl AsRef<Path>, diag: &dyn DiagnosticSink) -> Result<Vec<Row>, ReportError> {
    let path = path.as_ref();
    let mut rdr = csv::ReaderBuilder::new()
        .trim(Trim::Headers)
        .from_path(path)
        .map_err(|err| classify(path, err))?;
    let headers = rdr.headers().map_err(|err| classify(path, err))?;
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|(name, legacy)| !headers.iter().any(|h| h == *name || h == *legacy))
        .map(|(name, _)| (*name).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ReportError::Schema { columns: missing });
    }
    diag.note(&format!(
        "loaded data with columns: {:?}",
        headers.iter().collect::<Vec<_>>()
    ));
    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        rows.push(result.map_err(|err| classify(path, err))?);
    }
    Ok(rows)
}

/// Maps a `csv::Error` onto the pipeline's error kinds.
fn classify(path: &Path, err: csv::Error) -> ReportError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) if source.kind() == io::ErrorKind::NotFound => {
            ReportError::NotFound {
                path: path.to_path_buf(),
            }
        }
        csv::ErrorKind::Io(source) => ReportError::Io {
            path: path.to_path_buf(),
            source,
        },
        csv::ErrorKind::Deserialize { pos, err } => ReportError::Data {
            line: pos.map_or(0, |p| p.line()),
            message: err.to_string(),
        },
        _ => ReportError::Format {
            path: path.to_path_buf(),
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;

    #[derive(Default)]
    struct CollectingSink {
        notes: RefCell<Vec<String>>,
    }

    impl DiagnosticSink for CollectingSink {
        fn note(&self, message: &str) {
            self.notes.borrow_mut().push(message.to_string());
        }
    }

    fn quiet() -> CollectingSink {
        CollectingSink::default()
    }

    #[test]
    fn load_correctly_parses_canonical_data() {
        let rows = load("testdata/views.csv", &quiet()).unwrap();
        assert_eq!(rows.len(), 7, "wrong row count");
        assert_eq!(
            rows[0],
            Row {
                organization: "Acme Media".into(),
                brand: "DailyScope".into(),
                view_count: Views::from(120),
            }
        );
    }

    #[test]
    fn load_accepts_legacy_labels_with_padding() {
        let rows = load("testdata/legacy.csv", &quiet()).unwrap();
        assert_eq!(rows.len(), 2, "wrong row count");
        assert_eq!(rows[1].organization, "Northwind");
        assert_eq!(rows[1].view_count, Views::from(80));
    }

    #[test]
    fn load_reports_found_columns_to_the_sink() {
        let sink = quiet();
        load("testdata/views.csv", &sink).unwrap();
        let notes = sink.notes.borrow();
        assert_eq!(notes.len(), 1, "wrong number of diagnostics");
        assert!(notes[0].contains("organization"), "{}", notes[0]);
    }

    #[test]
    fn load_returns_empty_rows_for_header_only_file() {
        let rows = load("testdata/header_only.csv", &quiet()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn load_returns_not_found_for_missing_path() {
        let err = load("testdata/no_such_file.csv", &quiet()).unwrap_err();
        assert!(matches!(err, ReportError::NotFound { .. }), "{err}");
    }

    #[test]
    fn load_returns_schema_error_naming_missing_columns() {
        let err = load("testdata/missing_brand.csv", &quiet()).unwrap_err();
        let ReportError::Schema { columns } = err else {
            panic!("wrong error kind: {err}");
        };
        assert_eq!(columns, vec!["brand".to_string()]);
    }

    #[test]
    fn load_returns_data_error_for_malformed_count() {
        let err = load("testdata/bad_count.csv", &quiet()).unwrap_err();
        let ReportError::Data { line, message } = err else {
            panic!("wrong error kind: {err}");
        };
        assert_eq!(line, 2);
        assert!(message.contains("invalid view count"), "{message}");
    }

    #[test]
    fn load_returns_data_error_for_blank_count() {
        let err = load("testdata/blank_count.csv", &quiet()).unwrap_err();
        assert!(matches!(err, ReportError::Data { .. }), "{err}");
    }

    #[test]
    fn load_returns_format_error_for_ragged_rows() {
        let err = load("testdata/ragged.csv", &quiet()).unwrap_err();
        assert!(matches!(err, ReportError::Format { .. }), "{err}");
    }
}
