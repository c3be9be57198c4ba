//! Error types for the price oracle

use num_bigint::BigInt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceOracleError {
    /// Zero-length names fall below the first pricing tier.
    #[error("name must contain at least one character")]
    EmptyName,

    #[error("duration must not be negative, got {duration}")]
    NegativeDuration { duration: i64 },

    #[error("rent price table must contain at least one tier")]
    EmptyRentPrices,

    #[error("USD rate must be positive, got {rate}")]
    InvalidUsdRate { rate: BigInt },

    #[error("invalid amount {value:?}: {reason}")]
    InvalidAmount { value: String, reason: String },

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PriceOracleError>;
