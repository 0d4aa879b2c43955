//! View model of the holdings report.
//!
//! Everything a front end needs to draw is computed here as display strings,
//! style classes and chart series. Front ends only lay it out.

pub mod charts;
pub mod format;
pub mod style;
pub mod summary;
pub mod table;

use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, warn};

use crate::{errors::ReportError, models::HoldingsData};

pub use charts::{AllocationChart, PerformanceChart, allocation_chart, performance_chart};
pub use format::{CurrencyFormat, Grouping};
pub use style::{AllocationBucket, SignClass};
pub use summary::{SummaryView, summary_view};
pub use table::{HoldingRow, TABLE_HEADERS, holdings_table};

#[derive(Clone, Debug, Eq, Getters, PartialEq, Serialize)]
pub struct ReportView {
    summary: SummaryView,
    rows: Vec<HoldingRow>,
    allocation: AllocationChart,
    performance: PerformanceChart,
}

/// Builds the whole report, or nothing at all when the dataset is absent.
pub fn render(
    dataset: Option<&HoldingsData>,
    format: &CurrencyFormat,
) -> Result<ReportView, ReportError> {
    let Some(data) = dataset else {
        warn!("No holdings dataset available, aborting render");
        return Err(ReportError::MissingDataset);
    };

    let holdings = data.holdings();
    debug!(count = holdings.len(), "Rendering holdings report");

    Ok(ReportView {
        summary: summary_view(data.summary(), format),
        rows: holdings_table(holdings),
        allocation: allocation_chart(holdings, format),
        performance: performance_chart(holdings, format),
    })
}
