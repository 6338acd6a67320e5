//! The fixed exchange rate table.
//!
//! Rates are quoted against [`BASE_CURRENCY`]: a rate of `0.92` for `EUR`
//! means one US dollar buys 0.92 euro. The base currency itself is exactly 1.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::Serialize;

/// Currency every rate in the table is quoted against.
pub const BASE_CURRENCY: &str = "USD";

/// Table of supported currencies and their base-relative rates.
///
/// Built once on first use and never written to afterwards. `BTreeMap` keeps
/// the codes sorted, so listings are stable across runs.
pub(crate) static EXCHANGE_RATES: Lazy<BTreeMap<&'static str, Decimal>> = Lazy::new(|| {
    BTreeMap::from([
        (BASE_CURRENCY, Decimal::new(100, 2)),
        ("EUR", Decimal::new(92, 2)),
        ("GBP", Decimal::new(79, 2)),
        ("JPY", Decimal::new(14950, 2)),
        ("CAD", Decimal::new(136, 2)),
    ])
});

/// A single entry of the rate table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeRate {
    /// Currency code, uppercase (e.g. "EUR").
    pub currency: String,
    /// Units of `currency` per one unit of the base currency.
    pub rate: Decimal,
}

impl ExchangeRate {
    /// Creates a new table entry.
    #[must_use]
    pub const fn new(currency: String, rate: Decimal) -> Self {
        Self { currency, rate }
    }

    /// Returns true if this entry is the base currency.
    #[must_use]
    pub fn is_base(&self) -> bool {
        self.currency == BASE_CURRENCY
    }
}
