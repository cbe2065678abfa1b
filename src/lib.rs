#![doc = include_str!("../README.md")]

pub mod diag;
pub mod error;
pub mod loader;
pub mod report;
pub mod sku;
pub mod views;

pub use diag::{DiagnosticSink, TracingSink};
pub use error::{ReportError, SkuError};
pub use loader::{load, Row, REQUIRED_COLUMNS};
pub use report::{aggregate, build_index, format_report, rollup};
pub use report::{AggregatedRow, BrandIndex, OrgTotal, Report};
pub use views::Views;

use std::path::Path;

/// Loads the CSV file at `path` and renders the full view-count report.
///
/// This is the whole pipeline in one call: load, aggregate, roll up,
/// index, format. Diagnostics go to the active `tracing` subscriber.
///
/// # Errors
///
/// Returns any [`ReportError`] from the pipeline stages, unchanged.
pub fn report_from_file(path: impl AsRef<Path>) -> Result<String, ReportError> {
    let rows = load(path, &TracingSink)?;
    Report::from_rows(&rows).render()
}
