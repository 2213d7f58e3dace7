//! CSPR vault for the rebase token.
//!
//! Deposits mint tokens 1:1 against attached motes; redemptions burn tokens
//! and pay the same number of motes back. Interest minted by the token is
//! paid out of rewards sent with `add_rewards`.

use odra::casper_types::{U256, U512};
use odra::prelude::*;
use odra::ContractRef;

use crate::error::RebaseError;
use crate::events::{Deposit, Redeem, RewardsAdded};
use crate::token::RebaseTokenContractRef;

#[odra::module(events = [Deposit, Redeem, RewardsAdded], errors = RebaseError)]
pub struct Vault {
    token: Var<Address>,
}

#[odra::module]
impl Vault {
    pub fn init(&mut self, token: Address) {
        self.token.set(token);
    }

    /// Lock the attached motes and mint the same amount of tokens.
    #[odra(payable)]
    pub fn deposit(&mut self) {
        let caller = self.env().caller();
        let amount = match motes_to_tokens(self.env().attached_value()) {
            Ok(amount) => amount,
            Err(error) => self.env().revert(error),
        };

        self.token_ref().mint(caller, amount);

        self.env().emit_event(Deposit {
            user: caller,
            amount,
        });
    }

    /// Burn `amount` tokens and pay the motes back. `U256::MAX` redeems the
    /// caller's whole balance, interest included.
    pub fn redeem(&mut self, amount: U256) {
        let caller = self.env().caller();
        let mut token = self.token_ref();

        let amount = if amount == U256::max_value() {
            token.balance_of(caller)
        } else {
            amount
        };

        token.burn(caller, amount);

        let payout = tokens_to_motes(amount);
        if self.env().self_balance() < payout {
            self.env().revert(RebaseError::RedeemTransferFailed);
        }
        self.env().transfer_tokens(&caller, &payout);

        self.env().emit_event(Redeem {
            user: caller,
            amount,
        });
    }

    /// Fund interest payouts.
    #[odra(payable)]
    pub fn add_rewards(&mut self) {
        let amount = match motes_to_tokens(self.env().attached_value()) {
            Ok(amount) => amount,
            Err(error) => self.env().revert(error),
        };
        self.env().emit_event(RewardsAdded {
            sender: self.env().caller(),
            amount,
        });
    }

    pub fn get_token_address(&self) -> Address {
        match self.token.get() {
            Some(token) => token,
            None => self.env().revert(RebaseError::NotInitialized),
        }
    }

    fn token_ref(&self) -> RebaseTokenContractRef {
        RebaseTokenContractRef::new(self.env().clone(), self.get_token_address())
    }
}

// ==========================================
// Unit Conversion
// ==========================================

/// Motes to token units (1:1). Fails above `U256::MAX`.
pub fn motes_to_tokens(motes: U512) -> Result<U256, RebaseError> {
    let mut bytes = [0u8; 64];
    motes.to_little_endian(&mut bytes);
    if bytes[32..].iter().any(|byte| *byte != 0) {
        return Err(RebaseError::MathOverflow);
    }
    Ok(U256::from_little_endian(&bytes[..32]))
}

/// Token units to motes (1:1). Lossless.
pub fn tokens_to_motes(tokens: U256) -> U512 {
    let mut bytes = [0u8; 32];
    tokens.to_little_endian(&mut bytes);
    U512::from_little_endian(&bytes)
}
