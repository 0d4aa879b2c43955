use anyhow::{Error, Result};
use reqwest::{Client, header::ACCEPT};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::errors::ReportError;

pub async fn make_request(
    client: &Client,
    base_url: &str,
    endpoint: &str,
    access_token: &str,
) -> Result<Value> {
    let url = format!("{}/{}", base_url.trim_end_matches('/'), endpoint);
    debug!(%url, "Sending request");

    let res = client
        .get(&url)
        .header(ACCEPT, "application/json")
        .bearer_auth(access_token)
        .send()
        .await?;

    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        return Err(ReportError::Api(format!("Request failed: {} {}", status, text)).into());
    }

    let data = serde_json::from_str::<Value>(&text)?;

    Ok(data)
}

pub async fn parse_response_object<T>(data: Value, error_msg: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    match data {
        Value::Object(obj) => serde_json::from_value(Value::Object(obj))
            .map_err(|e| Error::msg(format!("{}: {}", error_msg, e))),
        _ => Err(Error::msg("Unexpected API response format: not an object")),
    }
}
