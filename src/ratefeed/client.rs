use crate::config::Config;
use crate::ratefeed::models::LiveRates;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Feed returned status {0}")]
    Status(StatusCode),
}

pub struct RateFeedClient {
    http: reqwest::Client,
    base_url: String,
    access_key: String,
    symbols: String,
    timeout: Duration,
}

impl RateFeedClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.rate_feed_url.clone(),
            access_key: config.rate_feed_access_key.clone(),
            symbols: config.rate_feed_symbols.clone(),
            timeout: Duration::from_secs(config.rate_feed_timeout_secs),
        }
    }

    /// Fetch current quotes for the configured symbol set.
    pub async fn fetch_live_rates(&self) -> Result<LiveRates, FeedError> {
        let url = format!(
            "{}/live?access_key={}&symbols={}",
            self.base_url, self.access_key, self.symbols
        );
        debug!("Requesting live rates from {}", self.base_url);

        let response = self.http.get(&url).timeout(self.timeout).send().await?;

        if !response.status().is_success() {
            return Err(FeedError::Status(response.status()));
        }

        let rates = response.json::<LiveRates>().await?;
        Ok(rates)
    }
}
