//! Per-second interest rate as an 18-decimal fixed-point value

use {
    crate::{
        error::RebaseError,
        math::common::{wad, TryDiv, TryMul, SCALE},
    },
    alloc::{format, string::ToString},
    core::fmt,
    odra::casper_types::U256,
};

/// Interest rate per second, scaled by `WAD`
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Eq, Ord)]
pub struct InterestRate(pub U256);

impl InterestRate {
    /// Zero (no interest)
    pub fn zero() -> Self {
        Self(U256::zero())
    }

    /// Create rate from scaled value
    pub fn from_scaled_val(scaled_val: U256) -> Self {
        Self(scaled_val)
    }

    /// Return raw scaled value
    pub fn to_scaled_val(&self) -> U256 {
        self.0
    }

    /// Whether the rate earns nothing
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Simple interest earned by `principal` over `elapsed_secs`.
    ///
    /// Multiplies before dividing and truncates the result.
    pub fn interest_on(&self, principal: U256, elapsed_secs: u64) -> Result<U256, RebaseError> {
        if elapsed_secs == 0 || self.is_zero() || principal.is_zero() {
            return Ok(U256::zero());
        }

        principal
            .try_mul(self.0)?
            .try_mul(elapsed_secs)?
            .try_div(wad())
    }
}

impl From<U256> for InterestRate {
    fn from(val: U256) -> Self {
        Self::from_scaled_val(val)
    }
}

impl fmt::Display for InterestRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut scaled_val = self.0.to_string();
        if scaled_val.len() <= SCALE {
            let padding = "0".repeat(SCALE - scaled_val.len());
            scaled_val = format!("0.{}{}", padding, scaled_val);
        } else {
            scaled_val.insert(scaled_val.len() - SCALE, '.');
        }
        f.write_str(&scaled_val)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn rate(val: u64) -> InterestRate {
        InterestRate::from_scaled_val(U256::from(val))
    }

    #[test]
    fn test_interest_truncates() {
        // 100 * 5e10 * 1000 / 1e18 = 0.005
        assert_eq!(rate(50_000_000_000).interest_on(U256::from(100u64), 1_000), Ok(U256::zero()));
    }

    #[test]
    fn test_interest_scaled_principal() {
        let principal = U256::from(100u64) * wad();
        let interest = rate(50_000_000_000).interest_on(principal, 1_000).unwrap();
        assert_eq!(interest, U256::from(5_000_000_000_000_000u64));
    }

    #[test]
    fn test_zero_elapsed_or_rate() {
        let principal = U256::from(1_000_000u64);
        assert_eq!(rate(50_000_000_000).interest_on(principal, 0), Ok(U256::zero()));
        assert_eq!(InterestRate::zero().interest_on(principal, 1_000), Ok(U256::zero()));
    }

    #[test]
    fn test_interest_overflow() {
        let result = rate(1).interest_on(U256::max_value(), 2);
        assert_eq!(result, Err(RebaseError::MathOverflow));
    }

    #[test]
    fn test_display() {
        assert_eq!(rate(50_000_000_000).to_string(), "0.000000050000000000");
        assert_eq!(InterestRate::from_scaled_val(wad() * U256::from(2u64)).to_string(), "2.000000000000000000");
    }
}
