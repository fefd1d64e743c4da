use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::model::WeatherSnapshot;

use super::{ProviderError, WeatherProvider};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the WeatherAPI.com `current.json` endpoint.
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.weatherapi.com/v1";

    pub fn new(api_key: String) -> Result<Self, ProviderError> {
        Self::with_base_url(api_key, Self::DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different base URL; tests use this to talk
    /// to a mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self, ProviderError> {
        let http = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self { api_key, base_url, http })
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn current(&self, city: &str) -> Result<WeatherSnapshot, ProviderError> {
        let url = format!("{}/current.json", self.base_url);

        debug!(%city, "fetching current conditions");

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", city), ("aqi", "no")])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Status { status, body: truncate_body(&body) });
        }

        let snapshot: WeatherSnapshot = serde_json::from_str(&body)?;
        Ok(snapshot)
    }
}

/// Error bodies can be arbitrarily large; keep a readable prefix.
fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((i, _)) => format!("{}...", &body[..i]),
        None => body.to_string(),
    }
}
