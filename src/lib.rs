//! pocket-ledger - Caesar cipher and toy bank-account models
//!
//! This library bundles two small, independent teaching components:
//!
//! - [`cipher`]: a Caesar-cipher `encode`/`decode` pair over the 26-letter
//!   lowercase Latin alphabet. Non-letters pass through untouched and output
//!   is always lowercase. No security property whatsoever.
//! - [`models`]: a single [`models::Account`] record with a pluggable
//!   [`models::WithdrawalPolicy`] selected at construction time
//!   (unrestricted, savings, or checking), replacing the classic
//!   base-class-plus-overrides hierarchy.
//!
//! The two components share no data and no types.
//!
//! # Transaction error policy
//!
//! Account setup is strict: a creation date in the future or an unparseable
//! date string fails construction with a [`LedgerError`]. Everything after
//! setup is deliberately forgiving: malformed or missing amounts,
//! insufficient funds, and too-young savings accounts never raise - they are
//! absorbed as no-ops, with the balance still reported in most cases. See
//! [`models::Account::deposit`] and [`models::Account::withdraw`].
//!
//! # Example
//!
//! ```rust
//! use pocket_ledger::cipher;
//! use pocket_ledger::models::{Account, WithdrawalPolicy};
//! use chrono::Local;
//!
//! let (_, encoded) = cipher::encode("attack at dawn", 3);
//! assert_eq!(cipher::decode(&encoded, 3), "attack at dawn");
//!
//! let mut account = Account::open_with_balance(
//!     "Rainy",
//!     "1234",
//!     Local::now().date_naive(),
//!     WithdrawalPolicy::Unrestricted,
//!     100.0,
//! ).unwrap();
//! account.deposit(50.0); // prints "Balance: 150"
//! assert_eq!(account.view_balance(), 150.0);
//! ```

pub mod cipher;
pub mod display;
pub mod error;
pub mod models;

pub use error::{LedgerError, LedgerResult};
pub use models::{Account, AccountId, WithdrawalPolicy};
