//! Decimal parsing and serde helpers for arbitrary-precision amounts.
//!
//! Amounts are written as decimal strings so values beyond 64 bits survive
//! TOML and JSON. Plain integers are accepted too, and `_` separators are
//! ignored in strings (`"1_000_000_000_000_000_000"`).

use crate::errors::{PriceOracleError, Result};
use num_bigint::{BigInt, BigUint};
use serde::{Deserialize, Deserializer, Serializer};

/// Parse an unsigned decimal amount.
pub fn parse_unsigned(value: &str) -> Result<BigUint> {
    let digits = normalize(value);
    digits
        .parse::<BigUint>()
        .map_err(|e| PriceOracleError::InvalidAmount {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Parse a signed decimal amount.
pub fn parse_signed(value: &str) -> Result<BigInt> {
    let digits = normalize(value);
    digits
        .parse::<BigInt>()
        .map_err(|e| PriceOracleError::InvalidAmount {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Parse a comma separated list of unsigned amounts, e.g. `"0,0,4,2,1"`.
pub fn parse_unsigned_list(value: &str) -> Result<Vec<BigUint>> {
    value.split(',').map(parse_unsigned).collect()
}

fn normalize(value: &str) -> String {
    value.trim().chars().filter(|c| *c != '_').collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Unsigned(u64),
    Signed(i64),
    Text(String),
}

impl RawAmount {
    fn into_unsigned(self) -> Result<BigUint> {
        match self {
            RawAmount::Unsigned(v) => Ok(BigUint::from(v)),
            RawAmount::Signed(v) => Err(PriceOracleError::InvalidAmount {
                value: v.to_string(),
                reason: "amount must not be negative".to_string(),
            }),
            RawAmount::Text(s) => parse_unsigned(&s),
        }
    }

    fn into_signed(self) -> Result<BigInt> {
        match self {
            RawAmount::Unsigned(v) => Ok(BigInt::from(v)),
            RawAmount::Signed(v) => Ok(BigInt::from(v)),
            RawAmount::Text(s) => parse_signed(&s),
        }
    }
}

/// `#[serde(with = "...")]` for `Vec<BigUint>`.
pub mod unsigned_seq {
    use super::*;

    pub fn serialize<S: Serializer>(
        values: &[BigUint],
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(|v| v.to_string()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Vec<BigUint>, D::Error> {
        Vec::<RawAmount>::deserialize(deserializer)?
            .into_iter()
            .map(|raw| raw.into_unsigned().map_err(serde::de::Error::custom))
            .collect()
    }
}

/// `#[serde(with = "...")]` for `BigInt`.
pub mod signed {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &BigInt,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<BigInt, D::Error> {
        RawAmount::deserialize(deserializer)?
            .into_signed()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_underscored_decimals() {
        let v = parse_unsigned("1_000_000_000_000_000_000").unwrap();
        assert_eq!(v, BigUint::from(10u64).pow(18));
    }

    #[test]
    fn parses_values_beyond_u128() {
        let v = parse_unsigned("340282366920938463463374607431768211456").unwrap();
        assert_eq!(v, BigUint::from(u128::MAX) + 1u32);
    }

    #[test]
    fn rejects_garbage_and_negatives() {
        assert!(matches!(
            parse_unsigned("12abc"),
            Err(PriceOracleError::InvalidAmount { .. })
        ));
        assert!(parse_unsigned("-4").is_err());
        assert_eq!(parse_signed("-4").unwrap(), BigInt::from(-4));
    }

    #[test]
    fn parses_lists() {
        let list = parse_unsigned_list("0, 0, 4, 2, 1").unwrap();
        let expected: Vec<BigUint> = [0u32, 0, 4, 2, 1].into_iter().map(BigUint::from).collect();
        assert_eq!(list, expected);
        assert!(parse_unsigned_list("1,,2").is_err());
    }
}
