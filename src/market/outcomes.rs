//! Turn an event's nested markets into a priced outcome list.

use std::collections::HashSet;

use super::price::{cents_from_number, MAX_CENTS};
use super::types::{MarketResult, MarketStatus, Outcome, RawEvent, RawMarket};

/// Error text for an event that came back without markets.
pub const NO_MARKETS_MESSAGE: &str = "No markets found for this event.";

/// How outcomes are derived from an event's markets.
#[derive(Debug, Clone, Copy)]
pub enum Derivation<'a> {
    /// One non-exclusive market: a yes/no question.
    Binary(&'a RawMarket),
    /// One outcome per market.
    Multi(&'a [RawMarket]),
}

impl<'a> Derivation<'a> {
    /// Pick the strategy for an event. `None` when there are no markets.
    pub fn select(event: &'a RawEvent) -> Option<Self> {
        match (event.markets.as_slice(), event.mutually_exclusive) {
            ([], _) => None,
            ([single], false) => Some(Derivation::Binary(single)),
            (markets, _) => Some(Derivation::Multi(markets)),
        }
    }

    /// Produce outcomes. Unpriced markets contribute nothing.
    pub fn outcomes(self) -> Vec<Outcome> {
        match self {
            Derivation::Binary(market) => match market_cents(market) {
                Some(yes) => vec![
                    Outcome::priced("Yes", yes),
                    Outcome::priced("No", MAX_CENTS - yes),
                ],
                None => Vec::new(),
            },
            Derivation::Multi(markets) => markets
                .iter()
                .filter_map(|m| market_cents(m).map(|cents| Outcome::priced(m.label(), cents)))
                .collect(),
        }
    }
}

/// Price of a market in cents, following the last/ask/bid fallback.
pub fn market_cents(market: &RawMarket) -> Option<u8> {
    market.quoted_price().and_then(cents_from_number)
}

/// Build the market result for an API event.
pub fn event_to_market_result(event: &RawEvent) -> MarketResult {
    let title = event.title.clone();

    match Derivation::select(event) {
        Some(derivation) => MarketResult::from_outcomes(title, derivation.outcomes()),
        None => MarketResult {
            title,
            outcomes: Vec::new(),
            status: MarketStatus::NoOutcomesFound,
            error: Some(NO_MARKETS_MESSAGE.to_string()),
        },
    }
}

/// Drop repeated (label, price) pairs, keeping the first one seen.
pub fn dedup_outcomes(outcomes: Vec<Outcome>) -> Vec<Outcome> {
    let mut seen = HashSet::new();
    outcomes
        .into_iter()
        .filter(|o| seen.insert((o.label.clone(), o.price_cents)))
        .collect()
}

/// When a scrape mixes `%` and `¢` quotes, keep the `%` ones.
///
/// Percentages come from the named-outcome list; cent quotes come from the
/// order panel of whichever sub-market is selected.
pub fn prefer_percent_quotes(outcomes: Vec<Outcome>) -> Vec<Outcome> {
    let has_percent = outcomes.iter().any(|o| o.raw.contains('%'));
    let has_cents = outcomes.iter().any(|o| o.raw.contains('\u{a2}'));

    if has_percent && has_cents {
        outcomes.into_iter().filter(|o| o.raw.contains('%')).collect()
    } else {
        outcomes
    }
}
