//! Where events come from.

use async_trait::async_trait;

use super::types::RawEvent;
use crate::error::ApiError;

/// Minimum page size requested when filtering by category client-side.
pub const CATEGORY_OVERFETCH: usize = 200;

/// Event supplier consumed by [`crate::skill`].
#[async_trait]
pub trait EventSource: Send + Sync {
    /// List events, optionally restricted to one category slug.
    ///
    /// Implementations filter by category after fetching and return at most
    /// `limit` events.
    async fn fetch_events(
        &self,
        category_slug: Option<&str>,
        status: &str,
        limit: usize,
    ) -> Result<Vec<RawEvent>, ApiError>;

    /// Fetch one event with its nested markets.
    async fn fetch_event(&self, event_ticker: &str) -> Result<RawEvent, ApiError>;
}

/// Page size to request for a listing of `limit` events.
pub fn request_limit(category_slug: Option<&str>, limit: usize) -> usize {
    if category_slug.is_some() {
        limit.max(CATEGORY_OVERFETCH)
    } else {
        limit
    }
}
