//! Browse listings and category lookup.

use std::borrow::Cow;

use super::slug::slugify;
use super::types::{BrowseEntry, RawEvent};

/// URL slugs whose API category name differs from the slug.
const SLUG_TO_CATEGORY: &[(&str, &str)] = &[
    ("climate", "Climate and Weather"),
    ("science", "Science and Technology"),
    ("culture", "Entertainment"),
    ("mentions", "Social"),
    ("companies", "Financials"),
    ("all-sports", "Sports"),
];

/// API category name for a URL slug. Unmapped slugs pass through.
pub fn category_name(slug: &str) -> Cow<'_, str> {
    let key = slug.to_lowercase();
    SLUG_TO_CATEGORY
        .iter()
        .find(|(s, _)| *s == key)
        .map(|(_, name)| Cow::Borrowed(*name))
        .unwrap_or(Cow::Borrowed(slug))
}

/// Check whether an event belongs to the category a URL slug names.
pub fn in_category(event: &RawEvent, slug: &str) -> bool {
    event.category().to_lowercase() == category_name(slug).to_lowercase()
}

/// Keep the events of one category, preserving order.
pub fn filter_by_category(events: Vec<RawEvent>, slug: &str) -> Vec<RawEvent> {
    events.into_iter().filter(|e| in_category(e, slug)).collect()
}

/// Market page URL: `{web_base}/markets/{series}/{slug}/{ticker}`.
pub fn market_page_url(web_base: &str, series_ticker: &str, title: &str, event_ticker: &str) -> String {
    format!(
        "{}/markets/{}/{}/{}",
        web_base.trim_end_matches('/'),
        series_ticker.to_lowercase(),
        slugify(title),
        event_ticker.to_lowercase()
    )
}

/// Convert events into at most `max_markets` browse entries.
///
/// Events without a title or ticker are skipped.
pub fn events_to_browse_list(events: &[RawEvent], max_markets: usize, web_base: &str) -> Vec<BrowseEntry> {
    events
        .iter()
        .filter_map(|event| {
            let title = event.title()?;
            let ticker = event.event_ticker()?;
            Some(BrowseEntry {
                title: title.to_string(),
                url: market_page_url(web_base, event.series_ticker(), title, ticker),
            })
        })
        .take(max_markets)
        .collect()
}
