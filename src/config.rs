use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use derive_getters::Getters;

use crate::{
    api::upstox::DEFAULT_BASE_URL,
    report::{CurrencyFormat, Grouping},
};

pub const DEFAULT_DATA_PATH: &str = "report/holdings_data.json";
pub const DEFAULT_LOG_FILE: &str = "holdings-report.log";

#[derive(Clone, Debug, Getters)]
pub struct Config {
    data_path: PathBuf,
    access_token: Option<String>,
    base_url: String,
    currency: CurrencyFormat,
    log_level: String,
    log_file: PathBuf,
}

impl Config {
    /// Reads `.env` when present, then the process environment.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_path = lookup("HOLDINGS_DATA_PATH").unwrap_or_else(|| DEFAULT_DATA_PATH.into());
        let log_file = lookup("REPORT_LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.into());

        let grouping = match lookup("REPORT_GROUPING") {
            Some(value) => value
                .parse::<Grouping>()
                .with_context(|| format!("Invalid REPORT_GROUPING '{}'", value))?,
            None => Grouping::default(),
        };
        let symbol = lookup("REPORT_CURRENCY_SYMBOL").unwrap_or_else(|| String::from("₹"));

        Ok(Self {
            data_path: expand_path(&data_path),
            access_token: lookup("UPSTOX_ACCESS_TOKEN").filter(|token| !token.is_empty()),
            base_url: lookup("UPSTOX_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            currency: CurrencyFormat::new(symbol, grouping),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| String::from("info")),
            log_file: expand_path(&log_file),
        })
    }

    pub fn with_data_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.data_path = expand_path(&path.to_string_lossy());
        }
        self
    }

    pub fn require_access_token(&self) -> Result<&str> {
        self.access_token
            .as_deref()
            .with_context(|| "Missing UPSTOX_ACCESS_TOKEN in environment")
    }
}

pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}
