//! Core conversion logic for Cambio.
//!
//! This crate holds the fixed exchange rate table and the conversion rules.
//! It performs no I/O and keeps no mutable state.
//!
//! # Modules
//!
//! - `currency` - Rate table, conversion and validation

pub mod currency;

pub use currency::{
    BASE_CURRENCY, ConversionError, CurrencyConverter, ExchangeRate, convert,
    is_supported_currency,
};
