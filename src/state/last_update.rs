use odra::casper_types::U256;

use crate::error::RebaseError;
use crate::math::InterestRate;

/// Timestamp of a user who never interacted with the token.
///
/// Block times below one second also map to zero (see
/// [`super::block_time_secs`]): a user touched in that first second reads
/// as never interacted and earns nothing until the next crystallization.
/// Casper block times are never that small.
pub const NEVER_UPDATED: u64 = 0;

/// Per-user accrual snapshot: the locked rate and when interest was last
/// crystallized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserAccrual {
    /// Rate locked at the user's last refresh
    pub rate: InterestRate,
    /// Block time (seconds) of the last crystallization or refresh
    pub last_updated: u64,
}

impl UserAccrual {
    /// Snapshot with `rate` locked at `last_updated`. This is also the
    /// state a rate refresh writes.
    pub fn new(rate: InterestRate, last_updated: u64) -> Self {
        Self { rate, last_updated }
    }

    /// False for a user whose clock was never started
    pub fn has_interacted(&self) -> bool {
        self.last_updated != NEVER_UPDATED
    }

    /// Return seconds elapsed since the last update
    pub fn elapsed(&self, now: u64) -> Result<u64, RebaseError> {
        now.checked_sub(self.last_updated)
            .ok_or(RebaseError::MathOverflow)
    }

    /// Interest earned on `principal` since the last update.
    pub fn accrued_interest(&self, principal: U256, now: u64) -> Result<U256, RebaseError> {
        if !self.has_interacted() {
            return Ok(U256::zero());
        }
        self.rate.interest_on(principal, self.elapsed(now)?)
    }

    /// Restart the accrual clock, keeping the locked rate.
    pub fn crystallized(&self, now: u64) -> Self {
        Self::new(self.rate, now)
    }

}

#[cfg(test)]
mod test {
    use super::*;

    const RATE: u64 = 50_000_000_000;

    fn principal() -> U256 {
        U256::from(100_000_000_000u64) * U256::from(1_000_000_000u64)
    }

    #[test]
    fn never_interacted_accrues_nothing() {
        let accrual = UserAccrual::new(InterestRate::from(U256::from(RATE)), NEVER_UPDATED);
        assert!(!accrual.has_interacted());
        assert_eq!(accrual.accrued_interest(principal(), 5_000), Ok(U256::zero()));
    }

    #[test]
    fn accrues_from_last_update() {
        let accrual = UserAccrual::new(InterestRate::from(U256::from(RATE)), 1_000);
        // 1e20 * 5e10 * 1000 / 1e18
        let expected = U256::from(5_000_000_000_000_000u64);
        assert_eq!(accrual.accrued_interest(principal(), 2_000), Ok(expected));
        assert_eq!(accrual.accrued_interest(principal(), 1_000), Ok(U256::zero()));
    }

    #[test]
    fn crystallize_keeps_rate() {
        let rate = InterestRate::from(U256::from(RATE));
        let accrual = UserAccrual::new(rate, 1_000).crystallized(2_000);
        assert_eq!(accrual.rate, rate);
        assert_eq!(accrual.last_updated, 2_000);
        assert_eq!(accrual.accrued_interest(principal(), 2_000), Ok(U256::zero()));
    }

    #[test]
    fn fresh_lock_accrues_from_lock_time() {
        let lower = InterestRate::from(U256::from(RATE / 2));
        let accrual = UserAccrual::new(lower, 3_000);
        assert!(accrual.has_interacted());
        // 1e20 * 2.5e10 * 1000 / 1e18
        let expected = U256::from(2_500_000_000_000_000u64);
        assert_eq!(accrual.accrued_interest(principal(), 4_000), Ok(expected));
    }

    #[test]
    fn clock_going_backwards_is_an_error() {
        let accrual = UserAccrual::new(InterestRate::from(U256::from(RATE)), 2_000);
        assert_eq!(accrual.elapsed(1_000), Err(RebaseError::MathOverflow));
    }
}
