// Storage-facing state of the rebase token

pub mod last_update;
pub mod principal_ledger;

pub use last_update::*;
pub use principal_ledger::*;

/// Casper block time is reported in milliseconds; accrual runs in seconds.
pub const MILLIS_PER_SECOND: u64 = 1_000;

/// Token decimals, matching the mote (1 CSPR = 1e9 motes) so deposits mint 1:1.
pub const TOKEN_DECIMALS: u8 = 9;

/// Convert a host block time to accrual seconds.
///
/// Anything under one second truncates to `NEVER_UPDATED`.
pub fn block_time_secs(block_time_millis: u64) -> u64 {
    block_time_millis / MILLIS_PER_SECOND
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn block_time_truncates_to_seconds() {
        assert_eq!(block_time_secs(0), 0);
        assert_eq!(block_time_secs(999), 0);
        assert_eq!(block_time_secs(1_000_500), 1_000);
    }
}
