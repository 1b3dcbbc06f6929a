//! Kalshi trade API client.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use super::browse::filter_by_category;
use super::source::{request_limit, EventSource};
use super::types::{EventsResponse, RawEvent, RawMarket};
use crate::config::Config;
use crate::error::ApiError;

/// Longest response body excerpt kept in an error.
const ERROR_DETAIL_LIMIT: usize = 200;

/// Kalshi public REST API client.
#[derive(Debug, Clone)]
pub struct KalshiClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// Base URL for the trade API.
    api_url: Url,
}

impl KalshiClient {
    /// Create a new client from config.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.http_timeout_ms))
            .build()
            .map_err(ApiError::ClientBuild)?;

        let api_url = Url::parse(&config.kalshi_api_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", config.kalshi_api_url)))?;

        Ok(Self { http, api_url })
    }

    /// Get the API base URL.
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Absolute URL for an API path given as segments.
    ///
    /// Segments are percent-encoded, so tickers can be passed verbatim.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.api_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET a path and decode the JSON body.
    #[instrument(skip(self, query))]
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        url: Url,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let network = |source| ApiError::Network {
            path: path.to_string(),
            source,
        };

        let response = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .query(query)
            .send()
            .await
            .map_err(network)?;

        let status = response.status();
        let body = response.text().await.map_err(network)?;

        if !status.is_success() {
            return Err(ApiError::Status {
                path: path.to_string(),
                status: status.as_u16(),
                detail: body.chars().take(ERROR_DETAIL_LIMIT).collect(),
            });
        }

        debug!(status = %status, bytes = body.len(), "API response received");

        serde_json::from_str(&body).map_err(|e| ApiError::InvalidJson {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl EventSource for KalshiClient {
    #[instrument(skip(self))]
    async fn fetch_events(
        &self,
        category_slug: Option<&str>,
        status: &str,
        limit: usize,
    ) -> Result<Vec<RawEvent>, ApiError> {
        let api_limit = request_limit(category_slug, limit).to_string();
        let query = [
            ("with_nested_markets", "true"),
            ("status", status),
            ("limit", api_limit.as_str()),
        ];

        let response: EventsResponse = self
            .get_json("/events", self.endpoint(&["events"])?, &query)
            .await?;
        let fetched = response.events.len();

        let mut events = match category_slug {
            Some(slug) => filter_by_category(response.events, slug),
            None => response.events,
        };
        events.truncate(limit);

        debug!(fetched, kept = events.len(), "Fetched events");
        Ok(events)
    }

    #[instrument(skip(self))]
    async fn fetch_event(&self, event_ticker: &str) -> Result<RawEvent, ApiError> {
        let path = format!("/events/{event_ticker}");
        let body: Value = self
            .get_json(
                &path,
                self.endpoint(&["events", event_ticker])?,
                &[("with_nested_markets", "true")],
            )
            .await?;

        unwrap_event(body).map_err(|e| ApiError::InvalidJson {
            path,
            reason: e.to_string(),
        })
    }
}

/// Decode a single-event response.
///
/// The body is either `{"event": {...}, "markets": [...]}` or a bare event.
/// Top-level markets are used when the event carries none of its own.
pub fn unwrap_event(mut body: Value) -> Result<RawEvent, serde_json::Error> {
    let Some(event) = body.get_mut("event").map(Value::take) else {
        return serde_json::from_value(body);
    };

    let mut event: RawEvent = serde_json::from_value(event)?;
    if event.markets.is_empty() {
        if let Some(markets) = body.get_mut("markets").map(Value::take) {
            event.markets = serde_json::from_value::<Option<Vec<RawMarket>>>(markets)?.unwrap_or_default();
        }
    }
    Ok(event)
}
