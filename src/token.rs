//! Interest-accruing token.
//!
//! Every holder earns simple interest on their stored principal at the rate
//! locked when they last received a mint. Balances reported by
//! [`RebaseToken::balance_of`] include interest that has not been minted yet.
//! Any operation that touches a user's principal first crystallizes that
//! user, minting the pending interest at the rate in force *before* any rate
//! refresh made by the same call.

use odra::casper_types::U256;
use odra::prelude::*;

use crate::access::AccessRegistry;
use crate::error::RebaseError;
use crate::events::{
    Approval, Burn, InterestCrystallized, Mint, MinterGranted, RateChanged, Transfer,
    UserRateLocked,
};
use crate::math::{InterestRate, TryAdd};
use crate::state::{block_time_secs, PrincipalLedger, UserAccrual, TOKEN_DECIMALS};

/// When a mint re-locks the recipient's interest rate.
#[odra::odra_type]
#[derive(Default)]
pub enum RateRefreshPolicy {
    /// Every mint locks the recipient to the current global rate.
    #[default]
    EveryMint = 0,
    /// Only a recipient without a locked rate gets one.
    FirstMint = 1,
}

#[odra::module(
    events = [
        RateChanged,
        UserRateLocked,
        InterestCrystallized,
        Mint,
        Burn,
        Transfer,
        Approval,
        MinterGranted
    ],
    errors = RebaseError
)]
pub struct RebaseToken {
    ledger: SubModule<PrincipalLedger>,
    access: SubModule<AccessRegistry>,

    interest_rate: Var<U256>,
    user_interest_rate: Mapping<Address, U256>,
    user_last_updated: Mapping<Address, u64>,
    refresh_policy: Var<RateRefreshPolicy>,
}

#[odra::module]
impl RebaseToken {
    /// Deploy the token. The deployer becomes the owner.
    pub fn init(
        &mut self,
        name: String,
        symbol: String,
        initial_rate: U256,
        refresh_policy: RateRefreshPolicy,
    ) {
        let owner = self.env().caller();
        self.ledger.init(name, symbol, TOKEN_DECIMALS);
        self.access.init(owner);
        self.interest_rate.set(initial_rate);
        self.refresh_policy.set(refresh_policy);
    }

    // ===========================================================================
    // OWNER
    // ===========================================================================

    /// Lower the global interest rate. Locked user rates are not touched.
    pub fn set_interest_rate(&mut self, new_rate: U256) {
        self.access.require_owner();

        let old_rate = self.get_interest_rate();
        if new_rate >= old_rate {
            log::warn!(
                "rejected rate update {} -> {}",
                InterestRate::from(old_rate),
                InterestRate::from(new_rate)
            );
            self.env().revert(RebaseError::RateMustDecrease);
        }

        self.interest_rate.set(new_rate);
        self.env().emit_event(RateChanged { old_rate, new_rate });
    }

    /// Give `account` (normally the vault) the mint/burn capability.
    pub fn grant_mint_and_burn_role(&mut self, account: Address) {
        self.access.require_owner();
        self.access.grant_minter(&account);
    }

    // ===========================================================================
    // MINTER
    // ===========================================================================

    /// Crystallize `to`, refresh its rate per the refresh policy, then add
    /// `amount` of principal.
    pub fn mint(&mut self, to: Address, amount: U256) {
        self.access.require_minter();

        self.crystallize(to);
        if self.should_refresh_rate(&to) {
            self.refresh_user_rate(&to);
        }
        self.ledger.mint(&to, amount);
    }

    /// Crystallize `from`, then remove `amount` of principal.
    pub fn burn(&mut self, from: Address, amount: U256) {
        self.access.require_minter();

        self.crystallize(from);
        self.ledger.burn(&from, amount);
    }

    // ===========================================================================
    // ACCRUAL
    // ===========================================================================

    /// Mint `user`'s accrued interest into principal and restart the clock.
    ///
    /// Permissionless: it only credits interest the user already earned.
    pub fn crystallize(&mut self, user: Address) {
        let now = self.now();
        let accrual = self.user_accrual(&user);
        let principal = self.ledger.balance_of(&user);
        let interest = self.checked(accrual.accrued_interest(principal, now));

        if !interest.is_zero() {
            self.ledger.mint(&user, interest);
            log::debug!("crystallized {} for {:?}", interest, user);
            self.env().emit_event(InterestCrystallized {
                user,
                interest,
                new_principal: self.ledger.balance_of(&user),
            });
        }

        self.user_last_updated
            .set(&user, accrual.crystallized(now).last_updated);
    }

    // ===========================================================================
    // CEP-18 SURFACE
    // ===========================================================================

    /// Move `amount` from the caller; `U256::MAX` moves the whole balance.
    pub fn transfer(&mut self, recipient: Address, amount: U256) {
        let sender = self.env().caller();
        let amount = self.prepare_transfer(sender, recipient, amount);
        self.ledger.move_principal(&sender, &recipient, amount);
    }

    /// Like `transfer`, spending the caller's allowance for the resolved
    /// amount.
    pub fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) {
        let spender = self.env().caller();
        let amount = self.prepare_transfer(owner, recipient, amount);
        self.ledger.spend_allowance(&owner, &spender, amount);
        self.ledger.move_principal(&owner, &recipient, amount);
    }

    pub fn approve(&mut self, spender: Address, amount: U256) {
        let owner = self.env().caller();
        self.ledger.approve(&owner, &spender, amount);
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.ledger.allowance(&owner, &spender)
    }

    pub fn name(&self) -> String {
        self.ledger.name()
    }

    pub fn symbol(&self) -> String {
        self.ledger.symbol()
    }

    pub fn decimals(&self) -> u8 {
        self.ledger.decimals()
    }

    /// Total stored principal. Unminted interest is not included.
    pub fn total_supply(&self) -> U256 {
        self.ledger.total_supply()
    }

    /// Principal plus interest accrued up to the current block.
    pub fn balance_of(&self, user: Address) -> U256 {
        let principal = self.ledger.balance_of(&user);
        let interest = self.accrued_interest(user);
        self.checked(principal.try_add(interest))
    }

    // ===========================================================================
    // VIEWS
    // ===========================================================================

    /// Stored principal, without pending interest.
    pub fn principal_balance_of(&self, user: Address) -> U256 {
        self.ledger.balance_of(&user)
    }

    /// Interest earned since the last crystallization, not yet minted.
    pub fn accrued_interest(&self, user: Address) -> U256 {
        let principal = self.ledger.balance_of(&user);
        self.checked(self.user_accrual(&user).accrued_interest(principal, self.now()))
    }

    pub fn get_interest_rate(&self) -> U256 {
        self.interest_rate.get_or_default()
    }

    pub fn get_user_interest_rate(&self, user: Address) -> U256 {
        self.user_interest_rate.get_or_default(&user)
    }

    pub fn get_user_last_updated(&self, user: Address) -> u64 {
        self.user_last_updated.get_or_default(&user)
    }

    pub fn get_refresh_policy(&self) -> RateRefreshPolicy {
        self.refresh_policy.get_or_default()
    }

    pub fn get_owner(&self) -> Address {
        self.access.get_owner()
    }

    pub fn is_minter(&self, account: Address) -> bool {
        self.access.is_minter(&account)
    }

    // ===========================================================================
    // HELPER FUNCTIONS
    // ===========================================================================

    /// Crystallize both sides, resolve `U256::MAX` to the sender's full
    /// balance and lock a rate for a recipient that has none.
    fn prepare_transfer(&mut self, from: Address, to: Address, amount: U256) -> U256 {
        self.crystallize(from);
        self.crystallize(to);

        let amount = if amount == U256::max_value() {
            self.ledger.balance_of(&from)
        } else {
            amount
        };

        if self.get_user_interest_rate(to).is_zero() {
            self.refresh_user_rate(&to);
        }
        amount
    }

    fn refresh_user_rate(&mut self, user: &Address) {
        let now = self.now();
        let accrual = UserAccrual::new(InterestRate::from(self.get_interest_rate()), now);

        self.user_interest_rate.set(user, accrual.rate.to_scaled_val());
        self.user_last_updated.set(user, accrual.last_updated);

        self.env().emit_event(UserRateLocked {
            user: *user,
            rate: accrual.rate.to_scaled_val(),
        });
    }

    fn should_refresh_rate(&self, user: &Address) -> bool {
        match self.get_refresh_policy() {
            RateRefreshPolicy::EveryMint => true,
            RateRefreshPolicy::FirstMint => self.get_user_interest_rate(*user).is_zero(),
        }
    }

    fn user_accrual(&self, user: &Address) -> UserAccrual {
        UserAccrual::new(
            InterestRate::from(self.user_interest_rate.get_or_default(user)),
            self.user_last_updated.get_or_default(user),
        )
    }

    fn now(&self) -> u64 {
        block_time_secs(self.env().get_block_time())
    }

    fn checked<T>(&self, result: Result<T, RebaseError>) -> T {
        match result {
            Ok(value) => value,
            Err(error) => self.env().revert(error),
        }
    }
}
