//! # coinmarket-client
//!
//! Thin client for the CoinMarketCap quotes endpoint. One outbound request per
//! call, no caching, no retries; timeouts are the reqwest defaults.

use std::collections::HashMap;

use cbot_core::Ticker;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const PRO_API_BASE_URL: &str = "https://pro-api.coinmarketcap.com";
const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";

/// Errors from the quote API: transport/decoding failure, a non-success
/// status, or a well-formed payload missing the expected fields.
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("quote request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("quote API returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("quote payload has no data for {0}")]
    MissingData(String),
}

/// USD price and market capitalization of one currency, valid at fetch time.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct UsdQuote {
    pub price: f64,
    pub market_cap: f64,
}

#[derive(Deserialize)]
struct QuotesResponse {
    data: HashMap<String, CurrencyEntry>,
}

#[derive(Deserialize)]
struct CurrencyEntry {
    quote: HashMap<String, UsdQuote>,
}

/// Client for `GET /v1/cryptocurrency/quotes/latest`.
#[derive(Clone)]
pub struct CoinMarketClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl CoinMarketClient {
    /// Creates a client against the production API.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, PRO_API_BASE_URL.to_string())
    }

    /// Creates a client against a custom base URL (tests point this at a mock
    /// server).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetches the latest USD quote for `ticker`. Every call is a fresh
    /// network round trip.
    pub async fn latest_quote(&self, ticker: Ticker) -> Result<UsdQuote, QuoteError> {
        let url = format!(
            "{}/v1/cryptocurrency/quotes/latest?symbol={}&convert=USD",
            self.base_url,
            ticker.code()
        );
        debug!(ticker = %ticker, "requesting quote");

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(QuoteError::Status(response.status()));
        }

        let body: QuotesResponse = response.json().await?;
        let entry = body
            .data
            .get(ticker.code())
            .ok_or_else(|| QuoteError::MissingData(ticker.code().to_string()))?;
        entry
            .quote
            .get("USD")
            .copied()
            .ok_or_else(|| QuoteError::MissingData(format!("{}.quote.USD", ticker.code())))
    }
}
