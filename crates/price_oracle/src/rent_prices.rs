//! Length-tiered rent price table.

use crate::errors::{PriceOracleError, Result};
use num_bigint::BigUint;
use std::fmt;

/// attoUSD-per-second rent rates indexed by name length.
///
/// Entry `i` prices names of `i + 1` characters; the last entry also prices
/// every longer name. A rate of zero marks the tier as unavailable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentPrices(Vec<BigUint>);

impl RentPrices {
    pub fn new(rates: Vec<BigUint>) -> Result<Self> {
        if rates.is_empty() {
            return Err(PriceOracleError::EmptyRentPrices);
        }
        Ok(Self(rates))
    }

    pub fn rates(&self) -> &[BigUint] {
        &self.0
    }

    pub fn tiers(&self) -> usize {
        self.0.len()
    }

    /// Rate for a name of `length` characters.
    pub fn rate_for_length(&self, length: usize) -> Result<&BigUint> {
        if length == 0 {
            return Err(PriceOracleError::EmptyName);
        }
        let index = length.min(self.0.len()) - 1;
        Ok(&self.0[index])
    }
}

/// 4 attoUSD/s for 3 character names, 2 for 4 characters, 1 for longer
/// names; 1 and 2 character names are not priced.
impl Default for RentPrices {
    fn default() -> Self {
        Self([0u32, 0, 4, 2, 1].into_iter().map(BigUint::from).collect())
    }
}

impl fmt::Display for RentPrices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, rate) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", rate)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_lookup() {
        let prices = RentPrices::default();
        assert_eq!(prices.tiers(), 5);
        assert_eq!(*prices.rate_for_length(1).unwrap(), BigUint::from(0u32));
        assert_eq!(*prices.rate_for_length(3).unwrap(), BigUint::from(4u32));
        assert_eq!(*prices.rate_for_length(4).unwrap(), BigUint::from(2u32));
        assert_eq!(*prices.rate_for_length(5).unwrap(), BigUint::from(1u32));
        assert_eq!(*prices.rate_for_length(64).unwrap(), BigUint::from(1u32));
    }

    #[test]
    fn test_single_tier_prices_everything() {
        let prices = RentPrices::new(vec![BigUint::from(7u32)]).unwrap();
        for len in 1..10 {
            assert_eq!(*prices.rate_for_length(len).unwrap(), BigUint::from(7u32));
        }
    }

    #[test]
    fn test_zero_length_rejected() {
        let prices = RentPrices::default();
        assert_eq!(prices.rate_for_length(0), Err(PriceOracleError::EmptyName));
    }

    #[test]
    fn test_empty_table_rejected() {
        assert_eq!(RentPrices::new(vec![]), Err(PriceOracleError::EmptyRentPrices));
    }

    #[test]
    fn test_display() {
        assert_eq!(RentPrices::default().to_string(), "[0, 0, 4, 2, 1]");
    }
}
