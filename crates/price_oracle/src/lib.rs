//! ENS Stable Price Oracle
//!
//! Rent is priced per second in attoUSD by name length and converted to wei
//! through an ETH/USD rate source:
//!
//! ```text
//! price = rent_prices[min(len, tiers) - 1] * duration * 10^8 / usd_rate
//! ```
//!
//! All amounts are arbitrary-precision integers.

pub mod amount;
pub mod config;
pub mod errors;
pub mod oracle;
pub mod rent_prices;
pub mod usd_rate;

pub use config::PriceOracleConfig;
pub use errors::*;
pub use oracle::{PriceOracle, StablePriceOracle};
pub use rent_prices::RentPrices;
pub use usd_rate::{FixedUsdRate, UsdRateSource, USD_RATE_DECIMALS};
