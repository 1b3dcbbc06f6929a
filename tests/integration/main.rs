//! Integration tests for the Kalshi market browser.
//!
//! Mock-backed tests run by default. Tests against the live public API are
//! ignored; run them with: cargo test --test integration -- --ignored

use kalshi_markets::config::Config;
use kalshi_markets::market::{EventSource, KalshiClient, MarketStatus, MockKalshiClient, RawEvent};
use kalshi_markets::skill::{self, SkillOptions, DEFAULT_BROWSE_URL};
use pretty_assertions::assert_eq;

/// Decode a fixture shaped like the `/events` list response.
fn fixture_events() -> Vec<RawEvent> {
    let body = serde_json::json!({
        "cursor": "abc",
        "events": [
            {
                "event_ticker": "KXFED-26MAR",
                "series_ticker": "KXFED",
                "title": "Fed decision in March?",
                "category": "Economics",
                "mutually_exclusive": true,
                "markets": [
                    {"ticker": "KXFED-26MAR-H0", "yes_sub_title": "Hold", "last_price": 83},
                    {"ticker": "KXFED-26MAR-C25", "yes_sub_title": "Cut 25bps", "last_price": 12},
                    {"ticker": "KXFED-26MAR-C50", "yes_sub_title": "Cut 50bps", "last_price": 3}
                ]
            },
            {
                "event_ticker": "KXRAIN-NYC",
                "series_ticker": "KXRAIN",
                "title": "Will it rain tomorrow?",
                "category": "Climate and Weather",
                "mutually_exclusive": false,
                "markets": [{"ticker": "KXRAIN-NYC-Y", "last_price": 65}]
            },
            {
                "event_ticker": "KXUNTITLED",
                "series_ticker": "KXUNTITLED",
                "category": "Economics",
                "markets": []
            },
            {
                "event_ticker": "KXGDP-26Q1",
                "series_ticker": "KXGDP",
                "title": "GDP growth in Q1 2026",
                "category": "Economics",
                "mutually_exclusive": true,
                "markets": [
                    {"ticker": "KXGDP-26Q1-T2", "title": "Above 2%", "yes_ask": "41"},
                    {"ticker": "KXGDP-26Q1-T3", "yes_bid": 9}
                ]
            }
        ]
    });
    let response: kalshi_markets::market::types::EventsResponse = serde_json::from_value(body).unwrap();
    response.events
}

fn mock_source() -> MockKalshiClient {
    let source = MockKalshiClient::new();
    for event in fixture_events() {
        source.add_event(event);
    }
    source
}

#[tokio::test]
async fn browse_home_lists_titled_events_in_order() {
    let source = mock_source();
    let entries = skill::browse(&source, DEFAULT_BROWSE_URL, 20, &SkillOptions::default())
        .await
        .unwrap();

    let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Fed decision in March?", "Will it rain tomorrow?", "GDP growth in Q1 2026"]
    );
    assert_eq!(
        entries[2].url,
        "https://kalshi.com/markets/kxgdp/gdp-growth-in-q1-2026/kxgdp-26q1"
    );
    assert_eq!(source.calls()[0].api_limit, 20);
}

#[tokio::test]
async fn browse_category_filters_and_caps() {
    let source = mock_source();
    let entries = skill::browse(
        &source,
        "https://kalshi.com/category/economics",
        1,
        &SkillOptions::default(),
    )
    .await
    .unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "Fed decision in March?");
}

#[tokio::test]
async fn market_multi_outcome_event() {
    let source = mock_source();
    let result = skill::market(&source, "https://kalshi.com/markets/kxfed/fed-meeting/kxfed-26mar").await;

    assert_eq!(result.status, MarketStatus::Ok);
    assert_eq!(result.title.as_deref(), Some("Fed decision in March?"));
    let prices: Vec<(&str, Option<u8>)> = result
        .outcomes
        .iter()
        .map(|o| (o.label.as_str(), o.price_cents))
        .collect();
    assert_eq!(
        prices,
        vec![("Hold", Some(83)), ("Cut 25bps", Some(12)), ("Cut 50bps", Some(3))]
    );
}

#[tokio::test]
async fn market_label_and_price_fallbacks() {
    let source = mock_source();
    let result = skill::market(&source, "kxgdp-26q1").await;

    let prices: Vec<(&str, Option<u8>)> = result
        .outcomes
        .iter()
        .map(|o| (o.label.as_str(), o.price_cents))
        .collect();
    assert_eq!(prices, vec![("Above 2%", Some(41)), ("KXGDP-26Q1-T3", Some(9))]);
}

#[tokio::test]
async fn market_binary_event_serializes_like_the_cli_output() {
    let source = mock_source();
    let result = skill::market(&source, "KXRAIN-NYC").await;

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "title": "Will it rain tomorrow?",
            "outcomes": [
                {"label": "Yes", "price_cents": 65, "raw": "65%"},
                {"label": "No", "price_cents": 35, "raw": "35%"}
            ],
            "status": "ok",
            "error": null
        })
    );
}

#[tokio::test]
async fn market_event_without_markets() {
    let source = mock_source();
    let result = skill::market(&source, "KXUNTITLED").await;

    assert_eq!(result.status, MarketStatus::NoOutcomesFound);
    assert!(result.outcomes.is_empty());
    assert_eq!(result.error.as_deref(), Some("No markets found for this event."));
}

#[tokio::test]
async fn market_unknown_ticker_is_error_result() {
    let source = mock_source();
    let result = skill::market(&source, "KXNOPE").await;

    assert_eq!(result.status, MarketStatus::Error);
    assert!(result.error.unwrap().contains("HTTP 404 for /events/KXNOPE"));
}

/// Fetch a few open events from the live API.
#[tokio::test]
#[ignore = "requires network access"]
async fn live_fetch_events() {
    let client = KalshiClient::new(&Config::default()).unwrap();

    let events = client.fetch_events(None, "open", 5).await;
    assert!(events.is_ok(), "Failed to fetch events: {:?}", events.err());

    let events = events.unwrap();
    assert!(!events.is_empty(), "Expected at least one open event");
    assert!(events.len() <= 5);
    for event in &events {
        println!("  - {:?} [{:?}]", event.title(), event.event_ticker());
    }
}

/// Round-trip a live event through the market entrypoint.
#[tokio::test]
#[ignore = "requires network access"]
async fn live_market_flow() {
    let client = KalshiClient::new(&Config::default()).unwrap();

    let events = client.fetch_events(None, "open", 5).await.unwrap();
    let ticker = events
        .iter()
        .find_map(|e| e.event_ticker())
        .expect("an open event with a ticker");

    let result = skill::market(&client, ticker).await;
    println!("{}", serde_json::to_string_pretty(&result).unwrap());

    assert_ne!(result.status, MarketStatus::Error, "error: {:?}", result.error);
    assert!(result.title.is_some());
}

/// Browse the live home page.
#[tokio::test]
#[ignore = "requires network access"]
async fn live_browse() {
    let client = KalshiClient::new(&Config::default()).unwrap();

    let entries = skill::browse(&client, DEFAULT_BROWSE_URL, 5, &SkillOptions::default())
        .await
        .unwrap();
    assert!(!entries.is_empty());
    assert!(entries.iter().all(|e| e.url.starts_with("https://kalshi.com/markets/")));
}

#[tokio::test]
async fn null_markets_do_not_sink_the_listing() {
    let body = serde_json::json!({
        "events": [
            {"event_ticker": "KXNULL", "series_ticker": "KXNULL", "title": "Event without markets",
             "mutually_exclusive": null, "markets": null},
            {"event_ticker": "KXRAIN-NYC", "series_ticker": "KXRAIN", "title": "Will it rain tomorrow?",
             "markets": [{"ticker": "KXRAIN-NYC-Y", "last_price": 65}]}
        ]
    });
    let response: kalshi_markets::market::types::EventsResponse = serde_json::from_value(body).unwrap();
    let source = MockKalshiClient::new();
    for event in response.events {
        source.add_event(event);
    }

    let entries = skill::browse(&source, DEFAULT_BROWSE_URL, 20, &SkillOptions::default())
        .await
        .unwrap();
    assert_eq!(entries.len(), 2);

    let result = skill::market(&source, "KXNULL").await;
    assert_eq!(result.status, MarketStatus::NoOutcomesFound);
    assert_eq!(result.error.as_deref(), Some("No markets found for this event."));
}
