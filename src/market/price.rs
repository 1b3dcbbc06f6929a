//! Price normalization to integer cents.
//!
//! Prices reach us either as numeric API fields already in cents, or as
//! display text such as `"47%"`, `"15¢"` or `"$0.47"`.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("valid regex"));

/// Upper bound of a contract price in cents.
pub const MAX_CENTS: u8 = 100;

/// Round a numeric cents value. Out-of-range values are not prices.
pub fn cents_from_number(value: Decimal) -> Option<u8> {
    to_cents(value.round())
}

/// Parse display text into cents.
///
/// Values below 1 are read as dollars or proportions and scaled by 100, so
/// `"$0.47"` and `"47"` both give 47.
pub fn cents_from_text(raw: &str) -> Option<u8> {
    let cleaned = raw.replace(['\u{a2}', '$', '%'], "");
    let token = NUMBER.find(cleaned.trim())?;
    let value = Decimal::from_str(token.as_str()).ok()?;

    if value < Decimal::ONE {
        to_cents((value * Decimal::ONE_HUNDRED).round())
    } else {
        to_cents(value.round())
    }
}

fn to_cents(rounded: Decimal) -> Option<u8> {
    rounded.to_u8().filter(|cents| *cents <= MAX_CENTS)
}
