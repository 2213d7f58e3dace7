//! Shared scale constants and checked arithmetic traits.
//!
//! Every fallible operation reports `RebaseError::MathOverflow`, so a math
//! failure anywhere in a call reverts it with the same code.

use {crate::error::RebaseError, odra::casper_types::U256};

/// Number of decimals carried by rates
pub const SCALE: usize = 18;
/// Identity (1.0 at 18 decimals)
pub const WAD: u64 = 1_000_000_000_000_000_000;

/// Identity as U256
pub fn wad() -> U256 {
    U256::from(WAD)
}

/// Try to subtract, return an error on underflow
pub trait TrySub: Sized {
    /// Subtract
    fn try_sub(self, rhs: Self) -> Result<Self, RebaseError>;
}

/// Try to add, return an error on overflow
pub trait TryAdd: Sized {
    /// Add
    fn try_add(self, rhs: Self) -> Result<Self, RebaseError>;
}

/// Try to divide, return an error on divide by zero
pub trait TryDiv<RHS>: Sized {
    /// Divide
    fn try_div(self, rhs: RHS) -> Result<Self, RebaseError>;
}

/// Try to multiply, return an error on overflow
pub trait TryMul<RHS>: Sized {
    /// Multiply
    fn try_mul(self, rhs: RHS) -> Result<Self, RebaseError>;
}

impl TryAdd for U256 {
    fn try_add(self, rhs: Self) -> Result<Self, RebaseError> {
        self.checked_add(rhs).ok_or(RebaseError::MathOverflow)
    }
}

impl TrySub for U256 {
    fn try_sub(self, rhs: Self) -> Result<Self, RebaseError> {
        self.checked_sub(rhs).ok_or(RebaseError::MathOverflow)
    }
}

impl TryMul<U256> for U256 {
    fn try_mul(self, rhs: U256) -> Result<Self, RebaseError> {
        self.checked_mul(rhs).ok_or(RebaseError::MathOverflow)
    }
}

impl TryMul<u64> for U256 {
    fn try_mul(self, rhs: u64) -> Result<Self, RebaseError> {
        self.checked_mul(U256::from(rhs)).ok_or(RebaseError::MathOverflow)
    }
}

impl TryDiv<U256> for U256 {
    fn try_div(self, rhs: U256) -> Result<Self, RebaseError> {
        self.checked_div(rhs).ok_or(RebaseError::MathOverflow)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_scaler() {
        assert_eq!(wad(), U256::from(10u64).pow(U256::from(SCALE)));
    }

    #[test]
    fn checked_ops_report_overflow() {
        assert_eq!(U256::max_value().try_add(U256::one()), Err(RebaseError::MathOverflow));
        assert_eq!(U256::zero().try_sub(U256::one()), Err(RebaseError::MathOverflow));
        assert_eq!(U256::max_value().try_mul(2u64), Err(RebaseError::MathOverflow));
        assert_eq!(U256::one().try_div(U256::zero()), Err(RebaseError::MathOverflow));
        assert_eq!(U256::from(7u64).try_div(U256::from(2u64)), Ok(U256::from(3u64)));
    }
}
