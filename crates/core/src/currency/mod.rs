//! Currency conversion against a fixed, USD-based rate table.

pub mod conversion;
pub mod converter;
pub mod error;
pub mod exchange;

#[cfg(test)]
mod props;

pub use conversion::{BASE_SCALE, RESULT_SCALE, convert_via_base, divide_half_up, round_half_up};
pub use converter::{
    CurrencyConverter, convert, is_supported_currency, rate, rates, supported_currencies,
};
pub use error::ConversionError;
pub use exchange::{BASE_CURRENCY, ExchangeRate};
