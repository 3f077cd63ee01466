use std::collections::HashMap;

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::error::UpstreamError;

/// Mapping from currency code to its rate against the USD base.
pub type RateTable = HashMap<String, f64>;

/// Client for the exchange-rate provider. Tables are always requested
/// with USD as the base currency.
#[derive(Clone)]
pub struct ExchangeRateService {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    conversion_rates: RateTable,
}

impl ExchangeRateService {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetch a fresh rate table. Every conversion request pays this round
    /// trip; nothing is cached.
    ///
    /// A non-2xx status surfaces as [`UpstreamError::Status`] carrying the
    /// provider's status code and parsed error body.
    pub async fn fetch_rates(&self) -> Result<RateTable, UpstreamError> {
        let url = format!("{}/{}/latest/USD", self.base_url, self.api_key);

        tracing::info!("Fetching conversion rates");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body: Value = response.json().await?;
            return Err(UpstreamError::Status { status, body });
        }

        let data: LatestRatesResponse = response.json().await?;
        Ok(data.conversion_rates)
    }
}
