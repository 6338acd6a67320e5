//! Currency converter over the fixed rate table.
//!
//! The converter validates its inputs against the table and delegates the
//! arithmetic to [`convert_via_base`]. Both operations are pure and safe to
//! call from any number of threads.

use rust_decimal::Decimal;
use tracing::debug;

use super::conversion::convert_via_base;
use super::error::ConversionError;
use super::exchange::{EXCHANGE_RATES, ExchangeRate};

/// Handle to the process-wide rate table.
///
/// Zero-sized; every instance reads the same immutable table.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyConverter;

// Methods keep the instance-style API callers hold a converter for; the
// table itself is static.
#[allow(clippy::unused_self)]
impl CurrencyConverter {
    /// Creates a converter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Converts `amount` from `from_currency` to `to_currency`.
    ///
    /// Both codes are checked first, in order, then the amount. The amount is
    /// divided by the source rate and rounded half up to 4 places, then
    /// multiplied by the target rate and rounded half up to 2 places.
    ///
    /// # Returns
    ///
    /// The converted amount with exactly 2 decimal places.
    ///
    /// # Errors
    ///
    /// - [`ConversionError::InvalidCurrency`] if either code is not in the table
    /// - [`ConversionError::NegativeAmount`] if `amount` is below zero
    /// - [`ConversionError::Overflow`] if the amount is too large for `Decimal`
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use cambio_core::CurrencyConverter;
    ///
    /// let result = CurrencyConverter::new().convert(dec!(100), "USD", "EUR").unwrap();
    /// assert_eq!(result.to_string(), "92.00");
    /// ```
    pub fn convert(
        &self,
        amount: Decimal,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<Decimal, ConversionError> {
        let from_rate = self.lookup(from_currency)?;
        let to_rate = self.lookup(to_currency)?;

        if amount < Decimal::ZERO {
            return Err(ConversionError::NegativeAmount { amount });
        }

        let result =
            convert_via_base(amount, from_rate, to_rate).ok_or(ConversionError::Overflow)?;

        debug!(
            %amount,
            from = from_currency,
            to = to_currency,
            %result,
            "Converted amount"
        );

        Ok(result)
    }

    /// Returns true if `currency_code` is exactly a key of the rate table.
    ///
    /// No trimming and no case folding: `"usd"` is not supported.
    pub fn is_supported_currency(&self, currency_code: &str) -> bool {
        EXCHANGE_RATES.contains_key(currency_code)
    }

    /// Returns the rate of `currency_code` against the base currency.
    pub fn rate(&self, currency_code: &str) -> Option<Decimal> {
        EXCHANGE_RATES.get(currency_code).copied()
    }

    /// Returns every supported code, sorted.
    pub fn supported_currencies(&self) -> Vec<&'static str> {
        EXCHANGE_RATES.keys().copied().collect()
    }

    /// Returns every table entry, sorted by code.
    pub fn rates(&self) -> Vec<ExchangeRate> {
        EXCHANGE_RATES
            .iter()
            .map(|(code, rate)| ExchangeRate::new((*code).to_string(), *rate))
            .collect()
    }

    fn lookup(&self, currency_code: &str) -> Result<Decimal, ConversionError> {
        self.rate(currency_code)
            .ok_or_else(|| ConversionError::InvalidCurrency {
                code: currency_code.to_string(),
                supported: self
                    .supported_currencies()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            })
    }
}

/// Converts `amount` using the shared rate table. See [`CurrencyConverter::convert`].
pub fn convert(
    amount: Decimal,
    from_currency: &str,
    to_currency: &str,
) -> Result<Decimal, ConversionError> {
    CurrencyConverter.convert(amount, from_currency, to_currency)
}

/// Returns true if `currency_code` is in the shared rate table.
pub fn is_supported_currency(currency_code: &str) -> bool {
    CurrencyConverter.is_supported_currency(currency_code)
}

/// Returns the base-relative rate of `currency_code`.
pub fn rate(currency_code: &str) -> Option<Decimal> {
    CurrencyConverter.rate(currency_code)
}

/// Returns every supported code, sorted.
pub fn supported_currencies() -> Vec<&'static str> {
    CurrencyConverter.supported_currencies()
}

/// Returns every table entry, sorted by code.
pub fn rates() -> Vec<ExchangeRate> {
    CurrencyConverter.rates()
}
