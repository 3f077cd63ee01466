use reqwest::Client;
use serde::Deserialize;

use crate::error::UpstreamError;

/// Client for the metal spot-price provider.
#[derive(Clone)]
pub struct GoldApiService {
    client: Client,
    api_key: String,
    base_url: String,
}

/// The provider fields the API relays onward. Anything else in the
/// response body is dropped.
#[derive(Debug, Deserialize)]
pub struct SpotQuote {
    pub price: f64,
    pub currency: String,
    pub date: String,
}

impl GoldApiService {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetch the spot price for `symbol` quoted in `currency`.
    ///
    /// Both are expected to be uppercased by the caller. `date_suffix` is
    /// appended to the request path verbatim; the empty string requests
    /// the latest quote. One GET, no retries, no caching. Transport
    /// failures, non-success statuses and undecodable bodies all fold
    /// into [`UpstreamError::Transport`].
    pub async fn fetch_spot(
        &self,
        symbol: &str,
        currency: &str,
        date_suffix: &str,
    ) -> Result<SpotQuote, UpstreamError> {
        let url = format!("{}/{}/{}{}", self.base_url, symbol, currency, date_suffix);

        tracing::info!("Fetching spot quote for {}/{}", symbol, currency);

        let quote = self
            .client
            .get(&url)
            .header("x-access-token", &self.api_key)
            .header("Content-Type", "application/json")
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(quote)
    }
}
