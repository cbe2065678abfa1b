use std::collections::{BTreeMap, HashMap};

use crate::{error::ReportError, loader::Row, views::Views};

/// Total views for one (organization, brand) pair.
///
/// One of these exists per distinct pair observed in the input, in
/// first-seen order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AggregatedRow {
    pub organization: String,
    pub brand: String,
    pub total_views: Views,
}

/// Total views for one organization across all its brands.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct OrgTotal {
    pub organization: String,
    pub total_views: Views,
}

/// Maps each organization to its brands and their totals, in the order
/// the aggregate produced them. Ordering for display is the formatter's
/// job, so the index stays reusable for other orderings.
pub type BrandIndex = BTreeMap<String, Vec<(String, Views)>>;

/// Groups `rows` by exact (organization, brand) pair and sums the view
/// counts per group.
///
/// Output preserves first-seen order, which the later stable sorts rely
/// on for tie-breaking.
#[must_use]
pub fn aggregate(rows: &[Row]) -> Vec<AggregatedRow> {
    let mut seen: HashMap<(String, String), usize> = HashMap::new();
    let mut aggregated: Vec<AggregatedRow> = Vec::new();
    for row in rows {
        let key = (row.organization.clone(), row.brand.clone());
        if let Some(&i) = seen.get(&key) {
            aggregated[i].total_views += row.view_count;
        } else {
            seen.insert(key, aggregated.len());
            aggregated.push(AggregatedRow {
                organization: row.organization.clone(),
                brand: row.brand.clone(),
                total_views: row.view_count,
            });
        }
    }
    aggregated
}

/// Sums total views per organization, sorted descending by total.
///
/// The sort is stable, so organizations with equal totals keep their
/// first-seen order.
#[must_use]
pub fn rollup(aggregated: &[AggregatedRow]) -> Vec<OrgTotal> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut totals: Vec<OrgTotal> = Vec::new();
    for row in aggregated {
        if let Some(&i) = seen.get(&row.organization) {
            totals[i].total_views += row.total_views;
        } else {
            seen.insert(row.organization.clone(), totals.len());
            totals.push(OrgTotal {
                organization: row.organization.clone(),
                total_views: row.total_views,
            });
        }
    }
    totals.sort_by(|a, b| b.total_views.cmp(&a.total_views));
    totals
}

/// Builds the organization → brands lookup from the aggregate, one entry
/// per [`AggregatedRow`], without sorting.
#[must_use]
pub fn build_index(aggregated: &[AggregatedRow]) -> BrandIndex {
    let mut index = BrandIndex::new();
    for row in aggregated {
        index
            .entry(row.organization.clone())
            .or_default()
            .push((row.brand.clone(), row.total_views));
    }
    index
}

/// Renders the rollup and brand index as the nested text report.
///
/// Each organization gets a `NAME : TOTAL` line, one indented
/// `` NAME : TOTAL`` line per brand sorted descending by views (stable;
/// ties keep index order), and a blank separator line after the block,
/// including the last one.
///
/// # Errors
///
/// Returns [`ReportError::Lookup`] if an organization in `org_totals`
/// has no entry in `brand_index`. That means the two were built from
/// different aggregates, which correct wiring never does.
pub fn format_report(
    org_totals: &[OrgTotal],
    brand_index: &BrandIndex,
) -> Result<String, ReportError> {
    let mut out = String::new();
    for org in org_totals {
        let brands = brand_index
            .get(&org.organization)
            .ok_or_else(|| ReportError::Lookup(org.organization.clone()))?;
        out.push_str(&format!("{} : {}\n", org.organization, org.total_views));
        let mut brands = brands.clone();
        brands.sort_by(|a, b| b.1.cmp(&a.1));
        for (brand, total_views) in &brands {
            out.push_str(&format!(" {brand} : {total_views}\n"));
        }
        out.push('\n');
    }
    Ok(out)
}

/// Holds the aggregated view-count data for a set of input rows.
///
/// To build one from loaded rows, use [`Report::from_rows`].
///
/// To get the printable report text, use [`Report::render`].
///
/// # Examples
///
/// ```
/// use views::{Report, Row, Views};
///
/// let rows = vec![
///     Row {
///         organization: "OrgA".into(),
///         brand: "Brand1".into(),
///         view_count: Views::from(10),
///     },
///     Row {
///         organization: "OrgA".into(),
///         brand: "Brand2".into(),
///         view_count: Views::from(30),
///     },
/// ];
/// let report = Report::from_rows(&rows).render().unwrap();
/// assert!(report.starts_with("OrgA : 40\n Brand2 : 30\n"));
/// ```
#[derive(Debug, Default)]
pub struct Report {
    pub org_totals: Vec<OrgTotal>,
    pub brand_index: BrandIndex,
}

impl Report {
    /// Aggregates `rows` and builds the rollup and brand index from the
    /// same aggregate, so [`Report::render`] cannot hit a lookup failure.
    #[must_use]
    pub fn from_rows(rows: &[Row]) -> Self {
        let aggregated = aggregate(rows);
        Self {
            org_totals: rollup(&aggregated),
            brand_index: build_index(&aggregated),
        }
    }

    /// Renders the report text; see [`format_report`].
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Lookup`] if the rollup and index are
    /// inconsistent, which cannot happen for a report built with
    /// [`Report::from_rows`].
    pub fn render(&self) -> Result<String, ReportError> {
        format_report(&self.org_totals, &self.brand_index)
    }
}
