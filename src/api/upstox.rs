use anyhow::Result;
use reqwest::Client;
use tracing::info;

use crate::api::{
    upstox_dto::{UpstoxHoldingDto, UpstoxResponseDto},
    utils::{make_request, parse_response_object},
};

pub const DEFAULT_BASE_URL: &str = "https://api.upstox.com";

const LONG_TERM_HOLDINGS: &str = "v2/portfolio/long-term-holdings";

#[derive(Clone, Debug)]
pub struct UpstoxApi {
    client: Client,
    base_url: String,
    access_token: String,
}

impl UpstoxApi {
    pub fn new(base_url: String, access_token: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            access_token,
        }
    }

    pub async fn get_long_term_holdings(&self) -> Result<Vec<UpstoxHoldingDto>> {
        let res = make_request(
            &self.client,
            &self.base_url,
            LONG_TERM_HOLDINGS,
            &self.access_token,
        )
        .await?;

        let holdings = parse_response_object::<UpstoxResponseDto>(
            res,
            "Failed to parse Upstox holdings response",
        )
        .await?
        .into_holdings()?;

        info!(count = holdings.len(), "Fetched long-term holdings");

        Ok(holdings)
    }
}
