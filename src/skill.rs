//! `browse` and `market` entrypoints.
//!
//! These are the operations exposed to the CLI and to plugin hosts. Transport
//! failures from `market` are folded into the result rather than returned.

use tracing::{info, instrument, warn};

use crate::error::Result;
use crate::market::{
    event_to_market_result, events_to_browse_list, BrowseEntry, EventSource, Intent, MarketResult,
    MarketStatus,
};

/// Default home page for `browse`.
pub const DEFAULT_BROWSE_URL: &str = "https://kalshi.com";

/// Error text for an empty multi-outcome result.
pub const NO_PRICED_OUTCOMES_MESSAGE: &str = "No priced outcomes found for this event.";

/// Options shared by both operations.
#[derive(Debug, Clone)]
pub struct SkillOptions {
    /// Website base for rebuilt market URLs.
    pub web_base: String,
    /// Event status filter for listings.
    pub event_status: String,
}

impl Default for SkillOptions {
    fn default() -> Self {
        Self {
            web_base: DEFAULT_BROWSE_URL.to_string(),
            event_status: "open".to_string(),
        }
    }
}

impl From<&crate::Config> for SkillOptions {
    fn from(config: &crate::Config) -> Self {
        Self {
            web_base: config.web_base().to_string(),
            event_status: config.event_status.clone(),
        }
    }
}

/// List markets from a category or home page URL.
#[instrument(skip(source, options))]
pub async fn browse<S: EventSource + ?Sized>(
    source: &S,
    url: &str,
    max_markets: usize,
    options: &SkillOptions,
) -> Result<Vec<BrowseEntry>> {
    let intent = Intent::parse(url);
    let category = intent.category_slug();

    let events = source
        .fetch_events(category, &options.event_status, max_markets)
        .await?;
    let entries = events_to_browse_list(&events, max_markets, &options.web_base);

    info!(category = ?category, count = entries.len(), "Browse complete");
    Ok(entries)
}

/// Fetch outcome prices for one market page URL or event ticker.
#[instrument(skip(source))]
pub async fn market<S: EventSource + ?Sized>(source: &S, url: &str) -> MarketResult {
    let intent = Intent::parse(url);
    let Some(ticker) = intent.event_ticker() else {
        return MarketResult::error(format!("Could not extract event ticker from URL: {url}"));
    };

    let mut result = match source.fetch_event(ticker).await {
        Ok(event) => event_to_market_result(&event),
        Err(e) => {
            warn!(ticker, error = %e, "Event fetch failed");
            return MarketResult::error(e.to_string());
        }
    };

    if result.status == MarketStatus::NoOutcomesFound && result.error.is_none() {
        result.error = Some(NO_PRICED_OUTCOMES_MESSAGE.to_string());
    }

    info!(ticker, status = %result.status, outcomes = result.outcomes.len(), "Market fetched");
    result
}
