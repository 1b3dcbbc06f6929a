//! Kalshi prediction market browser.
//!
//! Lists open markets by category and fetches per-market outcome prices from
//! Kalshi's public trade API, normalizing every price to integer cents.
//!
//! # Outcomes
//!
//! A single non-exclusive market is a yes/no question, so the result is
//! synthesized from its one price:
//!
//! ```text
//! last_price: 65
//! ─────────────────
//! Yes: 65%
//! No:  35%
//! ```
//!
//! Events with several (or mutually exclusive) markets yield one outcome per
//! priced market, labelled by its sub-title.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`market`]: Parsing, normalization, REST client and mock
//! - [`skill`]: `browse` / `market` entrypoints

pub mod config;
pub mod error;
pub mod market;
pub mod skill;

pub use config::Config;
pub use error::{ApiError, KalshiError, Result};
