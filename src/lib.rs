#![allow(clippy::arithmetic_side_effects)]
#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), no_main)]

//! Interest-accruing rebase token and CSPR vault for the casper blockchain.

pub mod access;
pub mod error;
pub mod events;
pub mod math;
pub mod state;
pub mod token;
pub mod vault;

extern crate alloc;
