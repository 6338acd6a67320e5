//! Conversion error types.

use cambio_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while converting an amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Currency code is not a key of the rate table.
    #[error("Unsupported currency: {code}. Supported currencies: [{}]", .supported.join(", "))]
    InvalidCurrency {
        /// The rejected code, exactly as given.
        code: String,
        /// Every supported code.
        supported: Vec<String>,
    },

    /// Amount is strictly negative.
    #[error("Amount cannot be negative: {amount}")]
    NegativeAmount {
        /// The rejected amount.
        amount: Decimal,
    },

    /// An intermediate value does not fit in a `Decimal`.
    #[error("Amount is too large to convert")]
    Overflow,
}

impl ConversionError {
    /// Returns the machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCurrency { .. } => "INVALID_CURRENCY",
            Self::NegativeAmount { .. } => "NEGATIVE_AMOUNT",
            Self::Overflow => "OVERFLOW",
        }
    }
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::InvalidCurrency { .. } | ConversionError::NegativeAmount { .. } => {
                Self::Validation(err.to_string())
            }
            ConversionError::Overflow => Self::BusinessRule(err.to_string()),
        }
    }
}
