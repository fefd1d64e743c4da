use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::WeatherSnapshot;

pub mod weatherapi;

/// Anything that can go wrong between submitting a city name and holding
/// a parsed snapshot. The presentation layer collapses all of these into
/// a single user-facing message; the detail exists for logs and tests.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to weather service failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("weather service returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to parse weather service response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Source of current conditions for a city. One real implementation
/// (WeatherAPI.com) plus whatever stubs tests need.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, city: &str) -> Result<WeatherSnapshot, ProviderError>;
}
