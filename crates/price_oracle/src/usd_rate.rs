//! ETH/USD rate sources.

use num_bigint::BigInt;
use parking_lot::RwLock;
use std::sync::Arc;

/// Decimals of a rate answer: `10^8` means 1 USD per ETH.
pub const USD_RATE_DECIMALS: u32 = 8;

/// Aggregator reporting the USD price of one ETH with [`USD_RATE_DECIMALS`]
/// decimals.
pub trait UsdRateSource: Send + Sync {
    fn latest_answer(&self) -> BigInt;
}

impl<T: UsdRateSource + ?Sized> UsdRateSource for Arc<T> {
    fn latest_answer(&self) -> BigInt {
        (**self).latest_answer()
    }
}

/// Rate source with a fixed, settable answer.
#[derive(Debug)]
pub struct FixedUsdRate {
    answer: RwLock<BigInt>,
}

impl FixedUsdRate {
    pub fn new(answer: impl Into<BigInt>) -> Self {
        Self {
            answer: RwLock::new(answer.into()),
        }
    }

    /// 1 USD per ETH, so wei amounts equal attoUSD amounts.
    pub fn unit() -> Self {
        Self::new(BigInt::from(10u64.pow(USD_RATE_DECIMALS)))
    }

    pub fn set(&self, answer: impl Into<BigInt>) {
        *self.answer.write() = answer.into();
    }
}

impl UsdRateSource for FixedUsdRate {
    fn latest_answer(&self) -> BigInt {
        self.answer.read().clone()
    }
}
