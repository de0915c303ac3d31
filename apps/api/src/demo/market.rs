//! Mock stock quotes. Values are random on every call.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

pub const MAX_SYMBOL_LEN: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct MarketQuote {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: u64,
    /// Market capitalisation in millions.
    pub market_cap_millions: u64,
    pub as_of: DateTime<Utc>,
}

/// Trims and uppercases a ticker. Returns `None` unless it is 1-5 ASCII alphanumerics.
pub fn normalize_symbol(raw: &str) -> Option<String> {
    let symbol = raw.trim().to_ascii_uppercase();
    let valid = !symbol.is_empty()
        && symbol.len() <= MAX_SYMBOL_LEN
        && symbol.chars().all(|c| c.is_ascii_alphanumeric());
    valid.then_some(symbol)
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

pub fn generate_quote<R: Rng>(symbol: &str, rng: &mut R) -> MarketQuote {
    let price: f64 = rng.gen_range(50.0..250.0);
    let change: f64 = rng.gen_range(-5.0..5.0);
    let volume: u64 = rng.gen_range(0..10_000_000);
    let market_cap = price * rng.gen_range(0.0..1_000_000_000.0) / 1_000_000.0;

    MarketQuote {
        symbol: symbol.to_string(),
        price: round2(price),
        change: round2(change),
        change_percent: round2(change / price * 100.0),
        volume,
        market_cap_millions: market_cap.round() as u64,
        as_of: Utc::now(),
    }
}
