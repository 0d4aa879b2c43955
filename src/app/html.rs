//! Static HTML rendition of the report.
//!
//! The page carries the dataset, the precomputed view and both Chart.js
//! configurations as embedded JSON, so it opens from disk with no server.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::info;

use crate::{
    errors::MISSING_DATASET_MESSAGE,
    models::HoldingsData,
    report::{
        AllocationChart, CurrencyFormat, PerformanceChart, ReportView,
        charts::PerformanceSeries,
    },
};

const TEMPLATE: &str = include_str!("report.html");

pub fn allocation_config(chart: &AllocationChart) -> Value {
    let values: Vec<_> = chart.slices().iter().map(|s| *s.value()).collect();

    json!({
        "type": "doughnut",
        "data": {
            "labels": chart.labels(),
            "datasets": [{
                "data": values,
                "backgroundColor": chart.colors(),
                "borderColor": "white",
                "borderWidth": 1
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": {
                    "position": "right",
                    "labels": { "padding": 20, "boxWidth": 12 }
                }
            }
        }
    })
}

pub fn performance_config(chart: &PerformanceChart) -> Value {
    let dataset = |series: &PerformanceSeries| {
        json!({
            "label": series.label(),
            "data": series.data(),
            "backgroundColor": series.background(),
            "borderColor": series.border(),
            "borderWidth": 1
        })
    };

    json!({
        "type": "bar",
        "data": {
            "labels": chart.labels(),
            "datasets": [dataset(chart.investment()), dataset(chart.pnl())]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "scales": {
                "x": { "grid": { "display": false } },
                "y": { "grid": { "borderDash": [2, 4] } }
            }
        }
    })
}

/// JSON safe to inline inside a `<script>` element.
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value).context("Failed to serialize report data")?;
    Ok(json.replace("</", "<\\/"))
}

pub fn generate(data: &HoldingsData, report: &ReportView, format: &CurrencyFormat) -> Result<String> {
    let currency = json!({
        "symbol": format.symbol(),
        "locale": format.grouping().locale(),
    });

    let values = [
        ("__HOLDINGS_DATA__", script_json(data)?),
        ("__REPORT_VIEW__", script_json(report)?),
        (
            "__ALLOCATION_CONFIG__",
            script_json(&allocation_config(report.allocation()))?,
        ),
        (
            "__PERFORMANCE_CONFIG__",
            script_json(&performance_config(report.performance()))?,
        ),
        ("__CURRENCY__", script_json(&currency)?),
        ("__MISSING_MESSAGE__", script_json(MISSING_DATASET_MESSAGE)?),
    ];

    Ok(fill(TEMPLATE, &values))
}

/// Substitutes placeholders in a single pass so inserted text is never rescanned.
fn fill(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some((pos, key, value)) = values
        .iter()
        .filter_map(|(key, value)| rest.find(key).map(|pos| (pos, *key, value)))
        .min_by_key(|(pos, _, _)| *pos)
    {
        out.push_str(&rest[..pos]);
        out.push_str(value);
        rest = &rest[pos + key.len()..];
    }
    out.push_str(rest);

    out
}

pub fn write(
    path: &Path,
    data: &HoldingsData,
    report: &ReportView,
    format: &CurrencyFormat,
) -> Result<()> {
    let html = generate(data, report, format)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, html)
        .with_context(|| format!("Failed to write HTML report to {}", path.display()))?;
    info!(path = %path.display(), "HTML report written");

    Ok(())
}
