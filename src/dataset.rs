use std::{
    fs,
    io::ErrorKind,
    path::Path,
    sync::LazyLock,
};

use anyhow::{Context, Result};
use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;
use tracing::{debug, info};

use crate::{
    api::UpstoxHoldingDto,
    errors::ReportError,
    models::{Holding, HoldingsData, Summary},
};

static JS_WRAPPER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*(?:const|let|var)\s+holdingsData\s*=\s*(.*?)\s*;?\s*$")
        .expect("wrapper pattern is valid")
});

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DatasetFormat {
    Json,
    /// `const holdingsData = {...};`
    JsWrapper,
}

impl DatasetFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("js") => DatasetFormat::JsWrapper,
            _ => DatasetFormat::Json,
        }
    }
}

/// Reads a dataset file. `Ok(None)` means there is no dataset to render.
pub fn load(path: &Path) -> Result<Option<HoldingsData>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "Dataset file does not exist");
            return Ok(None);
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("Failed to read dataset at {}", path.display()));
        }
    };

    parse(&text)
}

pub fn parse(text: &str) -> Result<Option<HoldingsData>> {
    let body = match JS_WRAPPER.captures(text) {
        Some(captures) => captures.get(1).map_or("", |m| m.as_str()),
        None => text.trim(),
    };

    if body.is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(body)
        .map_err(|err| ReportError::InvalidDataset(err.to_string()))?;

    let is_complete = value
        .as_object()
        .is_some_and(|obj| obj.contains_key("holdings") && obj.contains_key("summary"));
    if !is_complete {
        return Ok(None);
    }

    let data = serde_json::from_value::<HoldingsData>(value)
        .map_err(|err| ReportError::InvalidDataset(err.to_string()))?;

    Ok(Some(data))
}

pub fn save(path: &Path, data: &HoldingsData, format: DatasetFormat) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(data)?;
    let contents = match format {
        DatasetFormat::Json => json,
        DatasetFormat::JsWrapper => format!("const holdingsData = {};", json),
    };

    fs::write(path, contents)
        .with_context(|| format!("Failed to write dataset to {}", path.display()))?;
    info!(path = %path.display(), "Holdings data saved");

    Ok(())
}

/// Derives report holdings and totals from raw broker holdings.
///
/// Returns `None` for an empty account.
pub fn generate(raw: &[UpstoxHoldingDto], report_date: String) -> Option<HoldingsData> {
    if raw.is_empty() {
        return None;
    }

    let holdings: Vec<Holding> = raw.iter().map(UpstoxHoldingDto::to_holding).collect();

    let total_investment: Decimal = holdings.iter().map(|h| *h.investment_value()).sum();
    let total_current_value: Decimal = holdings.iter().map(|h| *h.current_value()).sum();
    let total_pnl = total_current_value - total_investment;

    let summary = Summary::new(
        total_investment,
        total_current_value,
        total_pnl,
        percent_of(total_pnl, total_investment),
        holdings.len(),
        report_date,
    );

    Some(HoldingsData::new(holdings, summary))
}

/// `part / whole * 100`, or zero when `whole` is zero.
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        Decimal::ZERO
    } else {
        part / whole * dec!(100)
    }
}
