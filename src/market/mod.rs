//! Kalshi market data.
//!
//! This module handles:
//! - Raw API records and normalized result types
//! - URL/ticker classification
//! - Price normalization and outcome building
//! - Browse listings, slugs and category lookup
//! - Page-text scraping heuristics
//! - The REST client and a mock for testing

pub mod browse;
pub mod client;
pub mod intent;
pub mod mock;
pub mod outcomes;
pub mod price;
pub mod scrape;
pub mod slug;
pub mod source;
pub mod types;

pub use browse::{category_name, events_to_browse_list};
pub use client::KalshiClient;
pub use intent::Intent;
pub use mock::MockKalshiClient;
pub use outcomes::event_to_market_result;
pub use slug::slugify;
pub use source::EventSource;
pub use types::{BrowseEntry, MarketResult, MarketStatus, Outcome, RawEvent, RawMarket};
