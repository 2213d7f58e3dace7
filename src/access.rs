use odra::prelude::*;

use crate::error::RebaseError;
use crate::events::MinterGranted;

/// Owner and mint/burn capability registry.
#[odra::module(events = [MinterGranted], errors = RebaseError)]
pub struct AccessRegistry {
    owner: Var<Address>,
    minters: Mapping<Address, bool>,
}

#[odra::module]
impl AccessRegistry {
    pub fn init(&mut self, owner: Address) {
        self.owner.set(owner);
    }

    pub fn get_owner(&self) -> Address {
        match self.owner.get() {
            Some(owner) => owner,
            None => self.env().revert(RebaseError::NotInitialized),
        }
    }

    pub fn is_minter(&self, account: &Address) -> bool {
        self.minters.get_or_default(account)
    }

    pub fn grant_minter(&mut self, account: &Address) {
        self.minters.set(account, true);
        self.env().emit_event(MinterGranted { account: *account });
    }

    pub fn require_owner(&self) {
        if self.owner.get() != Some(self.env().caller()) {
            self.env().revert(RebaseError::Unauthorized);
        }
    }

    pub fn require_minter(&self) {
        if !self.is_minter(&self.env().caller()) {
            self.env().revert(RebaseError::Unauthorized);
        }
    }
}
