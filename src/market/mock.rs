//! In-memory event source for unit testing.
//!
//! Serves canned events without making network requests, and records the
//! calls it receives so tests can assert on them.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::browse::filter_by_category;
use super::source::{request_limit, EventSource};
use super::types::RawEvent;
use crate::error::ApiError;

/// A `fetch_events` call as seen by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventsCall {
    /// Category slug passed in.
    pub category_slug: Option<String>,
    /// Status filter passed in.
    pub status: String,
    /// Page size the real client would have requested.
    pub api_limit: usize,
}

/// Mock Kalshi client for testing.
#[derive(Debug, Clone, Default)]
pub struct MockKalshiClient {
    /// Events returned by listings, in order.
    events: Arc<Mutex<Vec<RawEvent>>>,
    /// Events returned by ticker lookups.
    by_ticker: Arc<Mutex<HashMap<String, RawEvent>>>,
    /// Status code to fail every request with.
    fail_status: Option<u16>,
    /// Recorded listing calls.
    calls: Arc<Mutex<Vec<EventsCall>>>,
}

impl MockKalshiClient {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose every request fails with `status`.
    pub fn failing(status: u16) -> Self {
        Self {
            fail_status: Some(status),
            ..Self::default()
        }
    }

    /// Add an event to listings and, if it has a ticker, to lookups.
    pub fn add_event(&self, event: RawEvent) {
        if let Some(ticker) = event.event_ticker() {
            self.by_ticker
                .lock()
                .unwrap()
                .insert(ticker.to_uppercase(), event.clone());
        }
        self.events.lock().unwrap().push(event);
    }

    /// Listing calls received so far.
    pub fn calls(&self) -> Vec<EventsCall> {
        self.calls.lock().unwrap().clone()
    }

    fn check_failure(&self, path: &str) -> Result<(), ApiError> {
        match self.fail_status {
            Some(status) => Err(ApiError::Status {
                path: path.to_string(),
                status,
                detail: String::new(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl EventSource for MockKalshiClient {
    async fn fetch_events(
        &self,
        category_slug: Option<&str>,
        status: &str,
        limit: usize,
    ) -> Result<Vec<RawEvent>, ApiError> {
        self.calls.lock().unwrap().push(EventsCall {
            category_slug: category_slug.map(str::to_string),
            status: status.to_string(),
            api_limit: request_limit(category_slug, limit),
        });
        self.check_failure("/events")?;

        let all = self.events.lock().unwrap().clone();
        let mut events = match category_slug {
            Some(slug) => filter_by_category(all, slug),
            None => all,
        };
        events.truncate(limit);
        Ok(events)
    }

    async fn fetch_event(&self, event_ticker: &str) -> Result<RawEvent, ApiError> {
        let path = format!("/events/{event_ticker}");
        self.check_failure(&path)?;

        self.by_ticker
            .lock()
            .unwrap()
            .get(&event_ticker.to_uppercase())
            .cloned()
            .ok_or(ApiError::Status {
                path,
                status: 404,
                detail: "{\"error\":{\"code\":\"not_found\"}}".to_string(),
            })
    }
}
