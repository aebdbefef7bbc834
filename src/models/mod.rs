//! Core data models for pocket-ledger
//!
//! This module contains the account domain: the account record itself, its
//! caller-supplied identifier, the withdrawal-policy variants, and the
//! forgiving amount-input type used by deposit/withdraw.

pub mod account;
pub mod amount;
pub mod ids;

pub use account::{Account, WithdrawalPolicy, MIN_AGE_DAYS, OVERDRAFT_FEE};
pub use amount::AmountInput;
pub use ids::AccountId;
