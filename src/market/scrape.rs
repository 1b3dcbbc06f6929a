//! Market data from rendered page text.
//!
//! Rendering the page is the caller's job. These functions take the text a
//! browser exposes (price snippets with their enclosing containers, link
//! hrefs with their card text) and produce the same `Outcome` and
//! `BrowseEntry` values as the API path.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::outcomes::{dedup_outcomes, prefer_percent_quotes};
use super::price::cents_from_text;
use super::types::{BrowseEntry, MarketResult, Outcome};

/// Enclosing containers searched for a label.
const MAX_LABEL_DEPTH: usize = 3;

/// Longer snippets are paragraphs that merely mention a price.
const MAX_QUOTE_LEN: usize = 10;

/// Headings this short are badges, not titles.
const MIN_TITLE_LEN: usize = 5;

/// Shortest card text accepted as a market title.
const MIN_LINK_TITLE_LEN: usize = 5;

static PRICE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+[%¢]").expect("valid regex"));
static PRICE_FRAGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"<?[0-9]+[%¢]").expect("valid regex"));
static CENT_FRAGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9.]+¢").expect("valid regex"));
static YES_NO: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(Yes|No)\b").expect("valid regex"));
static TREND_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[▲▼△▽↑↓]\s*[0-9]").expect("valid regex"));
static CARD_PRICE_TAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*<?[0-9]+[%¢]").expect("valid regex"));

/// A price-looking text node and its surroundings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapedQuote {
    /// Text of the element holding the price (e.g. "98%").
    pub text: String,
    /// Element tag name.
    pub tag: String,
    /// Inner text of enclosing elements, nearest first.
    pub ancestors: Vec<String>,
}

/// An anchor pointing at a market page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapedLink {
    /// Absolute href.
    pub href: String,
    /// Visible card text.
    pub text: String,
}

/// Outcome for a price snippet, if it has a usable price and label.
pub fn outcome_from_quote(quote: &ScrapedQuote) -> Option<Outcome> {
    // Chart axis labels.
    if matches!(quote.tag.as_str(), "tspan" | "text") {
        return None;
    }

    let text = quote.text.trim();
    if text.chars().count() > MAX_QUOTE_LEN || !PRICE_TOKEN.is_match(text) {
        return None;
    }

    let cents = cents_from_text(text)?;
    let label = label_from_ancestors(&quote.ancestors)?;

    Some(Outcome {
        label,
        price_cents: Some(cents),
        raw: text.to_string(),
    })
}

/// Find a label in the containers around a price.
///
/// A standalone Yes/No wins; otherwise the first line left after removing
/// prices, if it has a plausible length and is not a trend indicator.
pub fn label_from_ancestors(ancestors: &[String]) -> Option<String> {
    ancestors.iter().take(MAX_LABEL_DEPTH).find_map(|container| {
        let without_prices = PRICE_FRAGMENT.replace_all(container.trim(), "");
        let candidate = CENT_FRAGMENT.replace_all(without_prices.trim(), "");
        let candidate = candidate.trim();

        if let Some(m) = YES_NO.captures(candidate).and_then(|c| c.get(1)) {
            return Some(m.as_str().to_string());
        }

        let line = candidate.lines().map(str::trim).find(|l| !l.is_empty())?;
        let len = line.chars().count();
        if len <= 2 || len >= 60 || TREND_MARKER.is_match(line) {
            return None;
        }
        Some(line.to_string())
    })
}

/// Build a market result from scraped quotes.
pub fn market_result_from_scrape(title: Option<String>, quotes: &[ScrapedQuote]) -> MarketResult {
    let outcomes: Vec<Outcome> = quotes.iter().filter_map(outcome_from_quote).collect();
    let outcomes = prefer_percent_quotes(dedup_outcomes(outcomes));
    MarketResult::from_outcomes(title, outcomes)
}

/// Page title: the first heading long enough to be one, else the document title.
pub fn page_title(headings: &[String], document_title: &str) -> Option<String> {
    headings
        .iter()
        .map(|h| h.trim())
        .find(|h| h.chars().count() > MIN_TITLE_LEN)
        .or_else(|| Some(document_title.trim()).filter(|t| !t.is_empty()))
        .map(str::to_string)
}

/// Browse entries from market links on a listing page.
pub fn browse_from_links(links: &[ScrapedLink], web_base: &str, max_markets: usize) -> Vec<BrowseEntry> {
    let base = web_base.trim_end_matches('/');
    let mut seen: HashSet<&str> = HashSet::new();
    let mut entries = Vec::new();

    for link in links {
        if entries.len() >= max_markets {
            break;
        }
        if seen.contains(link.href.as_str()) {
            continue;
        }

        // Navigation links point at /markets or a bare category.
        let path = link.href.replacen(base, "", 1);
        if path.trim_matches('/').split('/').count() < 2 {
            continue;
        }
        seen.insert(link.href.as_str());

        let text = link.text.trim();
        if text.chars().count() < MIN_LINK_TITLE_LEN {
            continue;
        }

        let title = CARD_PRICE_TAIL.split(text).next().unwrap_or(text).trim();
        entries.push(BrowseEntry {
            title: title.to_string(),
            url: link.href.clone(),
        });
    }

    entries
}
