//! Error types for the report pipeline and the catalog client.
//!
//! Pipeline stages return [`ReportError`] unchanged all the way up; the
//! binary is the only place that catches one, logs a single diagnostic
//! line, and maps it to a process exit code.

use thiserror::Error;

use std::path::PathBuf;

/// Errors from the view-count report pipeline.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The input path does not exist.
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Reading the input failed for a reason other than a missing file.
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input could not be parsed as a delimited table.
    #[error("cannot parse {} as CSV: {message}", path.display())]
    Format { path: PathBuf, message: String },

    /// Required columns are absent after header normalization.
    #[error("missing one or more required columns: {columns:?}")]
    Schema { columns: Vec<String> },

    /// A row holds a missing or malformed view count.
    #[error("line {line}: {message}")]
    Data { line: u64, message: String },

    /// An organization in the rollup has no entry in the brand index.
    ///
    /// The rollup and the index were built from different aggregates.
    /// Unreachable when both come from the same `aggregate` output.
    #[error("organization {0:?} missing from brand index")]
    Lookup(String),
}

/// Errors from the product-catalog client.
#[derive(Debug, Error)]
pub enum SkuError {
    /// The request failed, or the server answered with a non-2xx status.
    #[error("request for {url} failed: {source}")]
    Http { url: String, source: reqwest::Error },

    /// The response body matched neither known catalog shape.
    #[error("unrecognized response from {url}: {source}")]
    Decode { url: String, source: reqwest::Error },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_error_names_the_missing_columns() {
        let err = ReportError::Schema {
            columns: vec!["brand".into(), "view_count".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("brand"), "{msg}");
        assert!(msg.contains("view_count"), "{msg}");
    }

    #[test]
    fn data_error_names_the_offending_line() {
        let err = ReportError::Data {
            line: 3,
            message: "invalid view count \"ten\"".into(),
        };
        assert_eq!(err.to_string(), "line 3: invalid view count \"ten\"");
    }
}
