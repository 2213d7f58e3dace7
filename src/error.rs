use core::fmt;
use odra::prelude::OdraError;

/// Errors raised by the rebase token and its vault.
///
/// Codes are stable: clients and indexers match on them.
#[odra::odra_error]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RebaseError {
    RateMustDecrease = 1,
    InsufficientPrincipalForBurn = 2,
    RedeemTransferFailed = 3,
    Unauthorized = 4,
    InsufficientBalance = 5,

    InsufficientAllowance = 6,
    MathOverflow = 7,
    NotInitialized = 8,
}

impl RebaseError {
    /// Human-readable description of the error code
    pub fn message(&self) -> &str {
        match self {
            RebaseError::RateMustDecrease => "Interest rate can only decrease",
            RebaseError::InsufficientPrincipalForBurn => "Burn amount exceeds principal",
            RebaseError::RedeemTransferFailed => "Redeem payout failed",
            RebaseError::Unauthorized => "Caller lacks the required role",
            RebaseError::InsufficientBalance => "Transfer amount exceeds balance",
            RebaseError::InsufficientAllowance => "Transfer amount exceeds allowance",
            RebaseError::MathOverflow => "Math operation overflow",
            RebaseError::NotInitialized => "Contract state is not initialized",
        }
    }
}

impl fmt::Display for RebaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
