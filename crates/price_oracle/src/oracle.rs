//! Stable price oracle
//!
//! Prices rent in attoUSD per second by name length and converts the result
//! to wei with the current ETH/USD rate.

use crate::config::PriceOracleConfig;
use crate::errors::{PriceOracleError, Result};
use crate::rent_prices::RentPrices;
use crate::usd_rate::{FixedUsdRate, UsdRateSource, USD_RATE_DECIMALS};
use num_bigint::BigUint;
use num_traits::{Signed, Zero};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info};

/// Rent pricing for names.
pub trait PriceOracle: Send + Sync {
    /// Price in wei to register or renew `name` for `duration` seconds.
    ///
    /// `expires` is the name's current expiry (0 for a new registration).
    fn price(&self, name: &str, expires: i64, duration: i64) -> Result<BigUint>;
}

/// Oracle with a fixed attoUSD-per-second rate per name-length tier.
#[derive(Debug)]
pub struct StablePriceOracle<R = FixedUsdRate> {
    rent_prices: RwLock<Arc<RentPrices>>,
    usd_oracle: R,
}

impl<R: UsdRateSource> StablePriceOracle<R> {
    pub fn new(rent_prices: RentPrices, usd_oracle: R) -> Self {
        Self {
            rent_prices: RwLock::new(Arc::new(rent_prices)),
            usd_oracle,
        }
    }

    /// Snapshot of the current tier table.
    pub fn rent_prices(&self) -> Arc<RentPrices> {
        Arc::clone(&self.rent_prices.read())
    }

    /// Replace the whole tier table. On error the previous table stays active.
    pub fn set_prices(&self, rates: Vec<BigUint>) -> Result<()> {
        let prices = RentPrices::new(rates)?;
        info!(rent_prices = %prices, "rent prices changed");
        *self.rent_prices.write() = Arc::new(prices);
        Ok(())
    }

    pub fn usd_oracle(&self) -> &R {
        &self.usd_oracle
    }

    /// Rent for `duration` seconds in attoUSD, before conversion.
    pub fn rent_price_usd(&self, name: &str, duration: i64) -> Result<BigUint> {
        let duration = checked_duration(duration)?;
        let length = name.chars().count();
        let prices = self.rent_prices();
        let rate = prices.rate_for_length(length)?;
        Ok(rate * duration)
    }

    /// Extra charge on top of the base rent. Always zero here; `expires` is
    /// accepted for oracles that price recently expired names.
    pub fn premium(&self, name: &str, _expires: i64, duration: i64) -> Result<BigUint> {
        checked_duration(duration)?;
        if name.is_empty() {
            return Err(PriceOracleError::EmptyName);
        }
        Ok(BigUint::zero())
    }

    pub fn attousd_to_wei(&self, amount: &BigUint) -> Result<BigUint> {
        let rate = self.positive_rate()?;
        Ok(amount * decimals_factor() / rate)
    }

    pub fn wei_to_attousd(&self, amount: &BigUint) -> Result<BigUint> {
        let rate = self.positive_rate()?;
        Ok(amount * rate / decimals_factor())
    }

    fn positive_rate(&self) -> Result<BigUint> {
        let rate = self.usd_oracle.latest_answer();
        if !rate.is_positive() {
            return Err(PriceOracleError::InvalidUsdRate { rate });
        }
        rate.to_biguint()
            .ok_or(PriceOracleError::InvalidUsdRate { rate })
    }
}

impl StablePriceOracle<FixedUsdRate> {
    /// Build an oracle with a fixed USD rate from validated configuration.
    pub fn from_config(config: &PriceOracleConfig) -> Result<Self> {
        config.validate()?;
        let prices = RentPrices::new(config.rent_prices.clone())?;
        Ok(Self::new(prices, FixedUsdRate::new(config.usd_rate.clone())))
    }
}

impl<R: UsdRateSource> PriceOracle for StablePriceOracle<R> {
    fn price(&self, name: &str, expires: i64, duration: i64) -> Result<BigUint> {
        let base = self.rent_price_usd(name, duration)?;
        let premium = self.premium(name, expires, duration)?;
        let price = self.attousd_to_wei(&base)? + self.attousd_to_wei(&premium)?;
        debug!(domain = name, duration, base_attousd = %base, price_wei = %price, "priced name");
        Ok(price)
    }
}

fn checked_duration(duration: i64) -> Result<BigUint> {
    u64::try_from(duration)
        .map(BigUint::from)
        .map_err(|_| PriceOracleError::NegativeDuration { duration })
}

fn decimals_factor() -> BigUint {
    BigUint::from(10u32).pow(USD_RATE_DECIMALS)
}
