//! Events emitted by the token, its ledger and the vault.

use odra::casper_types::U256;
use odra::prelude::*;

/// The global interest rate was lowered.
#[odra::event]
pub struct RateChanged {
    pub old_rate: U256,
    pub new_rate: U256,
}

/// A user's rate was (re)locked to the global rate.
#[odra::event]
pub struct UserRateLocked {
    pub user: Address,
    pub rate: U256,
}

/// Accrued interest was minted into a user's principal.
#[odra::event]
pub struct InterestCrystallized {
    pub user: Address,
    pub interest: U256,
    pub new_principal: U256,
}

/// Principal created, either by a deposit or by crystallized interest.
#[odra::event]
pub struct Mint {
    pub recipient: Address,
    pub amount: U256,
}

/// Principal destroyed on redemption.
#[odra::event]
pub struct Burn {
    pub owner: Address,
    pub amount: U256,
}

/// Principal moved between holders.
#[odra::event]
pub struct Transfer {
    pub sender: Address,
    pub recipient: Address,
    pub amount: U256,
}

/// Allowance set by `owner` for `spender`.
#[odra::event]
pub struct Approval {
    pub owner: Address,
    pub spender: Address,
    pub amount: U256,
}

/// Mint/burn capability granted.
#[odra::event]
pub struct MinterGranted {
    pub account: Address,
}

/// Native currency locked in the vault and minted as tokens.
#[odra::event]
pub struct Deposit {
    pub user: Address,
    pub amount: U256,
}

/// Tokens burned and native currency paid out.
#[odra::event]
pub struct Redeem {
    pub user: Address,
    pub amount: U256,
}

/// Native currency sent to the vault to fund interest payouts.
#[odra::event]
pub struct RewardsAdded {
    pub sender: Address,
    pub amount: U256,
}
