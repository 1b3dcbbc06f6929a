//! Market-related types: raw API records and normalized results.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use strum::Display;

/// One event as returned by the trade API.
///
/// Which fields are present depends on the endpoint and the market type, so
/// everything is optional and read through the accessors below.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawEvent {
    /// Question text shown on the event page.
    #[serde(default)]
    pub title: Option<String>,
    /// Event ticker (e.g. "KXFED-26MAR").
    #[serde(default)]
    pub event_ticker: Option<String>,
    /// Series ticker (e.g. "KXFED").
    #[serde(default)]
    pub series_ticker: Option<String>,
    /// Display category (e.g. "Economics").
    #[serde(default)]
    pub category: Option<String>,
    /// Whether the nested markets are exclusive answers to one question.
    #[serde(default, deserialize_with = "null_as_default")]
    pub mutually_exclusive: bool,
    /// Nested markets, in API order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub markets: Vec<RawMarket>,
}

impl RawEvent {
    /// Title, if present and non-empty.
    pub fn title(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    /// Event ticker, if present and non-empty.
    pub fn event_ticker(&self) -> Option<&str> {
        non_empty(&self.event_ticker)
    }

    /// Series ticker, or an empty string.
    pub fn series_ticker(&self) -> &str {
        self.series_ticker.as_deref().unwrap_or_default()
    }

    /// Category, or an empty string.
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or_default()
    }
}

/// One tradable contract inside an event.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawMarket {
    /// Market ticker.
    #[serde(default)]
    pub ticker: Option<String>,
    /// Short answer label (e.g. "Hold", "Cut 25bps").
    #[serde(default)]
    pub yes_sub_title: Option<String>,
    /// Market title.
    #[serde(default)]
    pub title: Option<String>,
    /// Last traded price in cents.
    #[serde(default)]
    pub last_price: Option<Decimal>,
    /// Best YES ask in cents.
    #[serde(default)]
    pub yes_ask: Option<Decimal>,
    /// Best YES bid in cents.
    #[serde(default)]
    pub yes_bid: Option<Decimal>,
}

impl RawMarket {
    /// Display label: sub-title, then title, then ticker.
    pub fn label(&self) -> &str {
        non_empty(&self.yes_sub_title)
            .or_else(|| non_empty(&self.title))
            .or_else(|| self.ticker.as_deref())
            .unwrap_or_default()
    }

    /// Authoritative price signal: last trade, then ask, then bid.
    pub fn quoted_price(&self) -> Option<Decimal> {
        self.last_price.or(self.yes_ask).or(self.yes_bid)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Treat an explicit JSON `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `/events` list response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventsResponse {
    /// Events on this page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub events: Vec<RawEvent>,
    /// Pagination cursor.
    #[serde(default)]
    pub cursor: Option<String>,
}

/// A priced answer in a market result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Answer label ("Yes", "No", a candidate name, ...).
    pub label: String,
    /// Price in cents, [0, 100].
    pub price_cents: Option<u8>,
    /// Display text the price came from.
    pub raw: String,
}

impl Outcome {
    /// Outcome built from a known price, rendered as a percentage.
    pub fn priced(label: impl Into<String>, cents: u8) -> Self {
        Self {
            label: label.into(),
            price_cents: Some(cents),
            raw: format!("{cents}%"),
        }
    }
}

/// Result status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MarketStatus {
    /// At least one outcome was found.
    Ok,
    /// The event resolved but nothing priced came out of it.
    NoOutcomesFound,
    /// The request failed.
    Error,
}

/// Outcome of a `market` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketResult {
    /// Event title.
    pub title: Option<String>,
    /// Outcomes in display order.
    pub outcomes: Vec<Outcome>,
    /// Result status.
    pub status: MarketStatus,
    /// Human-readable reason for a non-ok status.
    pub error: Option<String>,
}

impl MarketResult {
    /// Result for a set of outcomes; status follows emptiness.
    pub fn from_outcomes(title: Option<String>, outcomes: Vec<Outcome>) -> Self {
        let status = if outcomes.is_empty() {
            MarketStatus::NoOutcomesFound
        } else {
            MarketStatus::Ok
        };
        Self {
            title,
            outcomes,
            status,
            error: None,
        }
    }

    /// Result for a failed request.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: None,
            outcomes: Vec::new(),
            status: MarketStatus::Error,
            error: Some(message.into()),
        }
    }

    /// Check if the result carries outcomes.
    pub fn is_ok(&self) -> bool {
        self.status == MarketStatus::Ok
    }
}

/// One row of a browse listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseEntry {
    /// Event title.
    pub title: String,
    /// Market page URL.
    pub url: String,
}
