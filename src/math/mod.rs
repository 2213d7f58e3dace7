//! Fixed-point arithmetic used by the interest accrual.

pub mod common;
pub mod rate;

pub use common::{TryAdd, TryDiv, TryMul, TrySub, SCALE, WAD};
pub use rate::InterestRate;
