use odra::casper_types::U256;
use odra::prelude::*;

use crate::error::RebaseError;
use crate::events::{Approval, Burn, Mint, Transfer};
use crate::math::{TryAdd, TrySub};

/// Stored-principal ledger: literal minted balances, supply and allowances.
///
/// Knows nothing about interest. The token crystallizes a user before it
/// reads or writes that user's principal here.
#[odra::module(events = [Mint, Burn, Transfer, Approval], errors = RebaseError)]
pub struct PrincipalLedger {
    name: Var<String>,
    symbol: Var<String>,
    decimals: Var<u8>,
    total_supply: Var<U256>,
    balances: Mapping<Address, U256>,
    allowances: Mapping<(Address, Address), U256>,
}

#[odra::module]
impl PrincipalLedger {
    pub fn init(&mut self, name: String, symbol: String, decimals: u8) {
        self.name.set(name);
        self.symbol.set(symbol);
        self.decimals.set(decimals);
        self.total_supply.set(U256::zero());
    }

    /// Read-only accessors
    pub fn name(&self) -> String { self.name.get_or_default() }
    pub fn symbol(&self) -> String { self.symbol.get_or_default() }
    pub fn decimals(&self) -> u8 { self.decimals.get_or_default() }
    pub fn total_supply(&self) -> U256 { self.total_supply.get_or_default() }

    pub fn balance_of(&self, owner: &Address) -> U256 {
        self.balances.get_or_default(owner)
    }

    pub fn allowance(&self, owner: &Address, spender: &Address) -> U256 {
        self.allowances.get_or_default(&(*owner, *spender))
    }

    pub fn mint(&mut self, recipient: &Address, amount: U256) {
        let balance = self.balance_of(recipient);
        let new_balance = self.checked(balance.try_add(amount));
        let new_supply = self.checked(self.total_supply().try_add(amount));

        self.balances.set(recipient, new_balance);
        self.total_supply.set(new_supply);

        self.env().emit_event(Mint {
            recipient: *recipient,
            amount,
        });
    }

    pub fn burn(&mut self, owner: &Address, amount: U256) {
        let balance = self.balance_of(owner);
        if amount > balance {
            self.env().revert(RebaseError::InsufficientPrincipalForBurn);
        }
        let new_supply = self.checked(self.total_supply().try_sub(amount));

        self.balances.set(owner, balance - amount);
        self.total_supply.set(new_supply);

        self.env().emit_event(Burn {
            owner: *owner,
            amount,
        });
    }

    /// Move principal between accounts. `sender == recipient` is a no-op
    /// on balances but still emits the event.
    pub fn move_principal(&mut self, sender: &Address, recipient: &Address, amount: U256) {
        let sender_balance = self.balance_of(sender);
        if amount > sender_balance {
            self.env().revert(RebaseError::InsufficientBalance);
        }
        self.balances.set(sender, sender_balance - amount);

        // Re-read: recipient may be the sender.
        let recipient_balance = self.balance_of(recipient);
        let new_balance = self.checked(recipient_balance.try_add(amount));
        self.balances.set(recipient, new_balance);

        self.env().emit_event(Transfer {
            sender: *sender,
            recipient: *recipient,
            amount,
        });
    }

    pub fn approve(&mut self, owner: &Address, spender: &Address, amount: U256) {
        self.allowances.set(&(*owner, *spender), amount);
        self.env().emit_event(Approval {
            owner: *owner,
            spender: *spender,
            amount,
        });
    }

    pub fn spend_allowance(&mut self, owner: &Address, spender: &Address, amount: U256) {
        let allowance = self.allowance(owner, spender);
        if amount > allowance {
            self.env().revert(RebaseError::InsufficientAllowance);
        }
        self.allowances.set(&(*owner, *spender), allowance - amount);
    }

    fn checked(&self, result: Result<U256, RebaseError>) -> U256 {
        match result {
            Ok(value) => value,
            Err(error) => self.env().revert(error),
        }
    }
}
