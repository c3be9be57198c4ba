//! Price oracle configuration
//!
//! Loaded from TOML, then optionally overridden from the environment:
//!
//! ```toml
//! rent_prices = ["0", "0", "4", "2", "1"]
//! usd_rate = "1_000_000_000"
//! ```

use crate::amount;
use crate::errors::{PriceOracleError, Result};
use crate::rent_prices::RentPrices;
use crate::usd_rate::USD_RATE_DECIMALS;
use num_bigint::{BigInt, BigUint};
use num_traits::Signed;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Comma separated attoUSD-per-second tier rates.
pub const ENV_RENT_PRICES: &str = "ENS_RENT_PRICES";
/// ETH price in USD with 8 decimals.
pub const ENV_USD_RATE: &str = "ENS_USD_RATE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceOracleConfig {
    /// attoUSD per second, indexed by name length minus one
    #[serde(with = "amount::unsigned_seq")]
    pub rent_prices: Vec<BigUint>,
    /// ETH price in USD, 8 decimals
    #[serde(with = "amount::signed")]
    pub usd_rate: BigInt,
}

impl Default for PriceOracleConfig {
    fn default() -> Self {
        Self {
            rent_prices: RentPrices::default().rates().to_vec(),
            // 1 ETH == 10 USD
            usd_rate: BigInt::from(10) * BigInt::from(10u64.pow(USD_RATE_DECIMALS)),
        }
    }
}

impl PriceOracleConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| PriceOracleError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self)
            .map_err(|e| PriceOracleError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading price oracle configuration from: {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| {
            PriceOracleError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_toml_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `ENS_RENT_PRICES` and `ENS_USD_RATE` from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from `lookup`. Unparseable or invalid values are
    /// logged and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(ENV_RENT_PRICES) {
            match amount::parse_unsigned_list(&val) {
                Ok(rates) if !rates.is_empty() => {
                    info!(key = ENV_RENT_PRICES, tiers = rates.len(), "rent prices overridden");
                    self.rent_prices = rates;
                }
                Ok(_) => warn!(key = ENV_RENT_PRICES, "ignoring empty rent price override"),
                Err(e) => warn!(key = ENV_RENT_PRICES, error = %e, "ignoring invalid override"),
            }
        }

        if let Some(val) = lookup(ENV_USD_RATE) {
            match amount::parse_signed(&val) {
                Ok(rate) if rate.is_positive() => {
                    info!(key = ENV_USD_RATE, %rate, "USD rate overridden");
                    self.usd_rate = rate;
                }
                Ok(rate) => warn!(key = ENV_USD_RATE, %rate, "ignoring non-positive USD rate"),
                Err(e) => warn!(key = ENV_USD_RATE, error = %e, "ignoring invalid override"),
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.rent_prices.is_empty() {
            return Err(PriceOracleError::EmptyRentPrices);
        }
        if !self.usd_rate.is_positive() {
            return Err(PriceOracleError::InvalidUsdRate {
                rate: self.usd_rate.clone(),
            });
        }
        Ok(())
    }
}
