//! Account model
//!
//! A single account record with a withdrawal policy chosen at construction
//! time. What would be a base class with two overriding subclasses elsewhere
//! is a tagged variant here: deposits behave identically everywhere, and
//! `withdraw` dispatches on the policy.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::display::{BalanceReporter, ConsoleReporter};
use crate::error::{LedgerError, LedgerResult};

use super::amount::AmountInput;
use super::ids::AccountId;

/// Minimum account age, in whole days, before a savings withdrawal is allowed
pub const MIN_AGE_DAYS: i64 = 180;

/// Fee charged when a checking withdrawal pushes the balance below zero
pub const OVERDRAFT_FEE: f64 = 30.0;

/// Withdrawal policy applied by [`Account::withdraw`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawalPolicy {
    /// No restrictions: any amount, any resulting balance
    Unrestricted,
    /// No overdraft ever, and no withdrawals at all before the account is
    /// [`MIN_AGE_DAYS`] old
    Savings,
    /// Overdraft permitted; the withdrawal that pushes the balance from
    /// non-negative to negative incurs [`OVERDRAFT_FEE`]
    Checking,
}

impl Default for WithdrawalPolicy {
    fn default() -> Self {
        Self::Unrestricted
    }
}

impl fmt::Display for WithdrawalPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrestricted => write!(f, "Unrestricted"),
            Self::Savings => write!(f, "Savings"),
            Self::Checking => write!(f, "Checking"),
        }
    }
}

/// A bank account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account holder's name
    pub name: String,

    /// Caller-supplied identifier
    pub id: AccountId,

    /// Calendar date the account was opened; never after "today" as of
    /// construction
    pub creation_date: NaiveDate,

    /// Current balance
    pub balance: f64,

    /// Withdrawal policy selected at construction; records serialized
    /// before policies existed read back as unrestricted
    #[serde(default)]
    pub policy: WithdrawalPolicy,
}

impl Account {
    /// Open an account with a zero balance.
    ///
    /// Fails if the name is empty or the creation date lies strictly after
    /// today. "Today" is computed fresh on every call; instances never share
    /// a captured default date.
    pub fn open(
        name: impl Into<String>,
        id: impl Into<AccountId>,
        creation_date: NaiveDate,
        policy: WithdrawalPolicy,
    ) -> LedgerResult<Self> {
        Self::open_with_balance(name, id, creation_date, policy, 0.0)
    }

    /// Open an account with a starting balance
    pub fn open_with_balance(
        name: impl Into<String>,
        id: impl Into<AccountId>,
        creation_date: NaiveDate,
        policy: WithdrawalPolicy,
        balance: f64,
    ) -> LedgerResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LedgerError::Validation(
                "Account name cannot be empty".into(),
            ));
        }

        let today = Local::now().date_naive();
        if creation_date > today {
            return Err(LedgerError::FutureCreationDate {
                given: creation_date,
                today,
            });
        }

        Ok(Self {
            name,
            id: id.into(),
            creation_date,
            balance,
            policy,
        })
    }

    /// Open an account from a `%Y-%m-%d` date string.
    ///
    /// An unparseable string fails with [`LedgerError::InvalidCreationDate`],
    /// distinct from the future-date failure so callers can branch on which.
    pub fn open_from_str_date(
        name: impl Into<String>,
        id: impl Into<AccountId>,
        creation_date: &str,
        policy: WithdrawalPolicy,
    ) -> LedgerResult<Self> {
        let date = NaiveDate::parse_from_str(creation_date, "%Y-%m-%d")?;
        Self::open(name, id, date, policy)
    }

    /// Age of the account in whole days, against a fresh "today"
    pub fn age_in_days(&self) -> i64 {
        (Local::now().date_naive() - self.creation_date).num_days()
    }

    /// Deposit an amount, printing the resulting balance.
    ///
    /// Same as [`Account::deposit_with`] with a stdout reporter.
    pub fn deposit(&mut self, amount: impl Into<AmountInput>) {
        self.deposit_with(amount, &mut ConsoleReporter);
    }

    /// Deposit an amount, reporting the resulting balance.
    ///
    /// Missing or unconvertible amounts are a no-op with no report. Amounts
    /// that convert but are not positive leave the balance unchanged, yet
    /// the balance is still reported. Deposits ignore the withdrawal policy.
    pub fn deposit_with(
        &mut self,
        amount: impl Into<AmountInput>,
        reporter: &mut dyn BalanceReporter,
    ) {
        let Some(value) = amount.into().to_value() else {
            return;
        };
        if value > 0.0 {
            self.balance += value;
        }
        reporter.report(self.balance);
    }

    /// Withdraw an amount, printing the resulting balance.
    ///
    /// Same as [`Account::withdraw_with`] with a stdout reporter.
    pub fn withdraw(&mut self, amount: impl Into<AmountInput>) {
        self.withdraw_with(amount, &mut ConsoleReporter);
    }

    /// Withdraw an amount under this account's policy, reporting the
    /// resulting balance.
    ///
    /// Refusals are silent: an ineligible or unaffordable withdrawal leaves
    /// the balance unchanged, and the only signal is the report showing it.
    ///
    /// - `Unrestricted`: the amount is subtracted unconditionally; a missing
    ///   or unconvertible amount is a no-op with no report.
    /// - `Savings`: refused while the account is younger than
    ///   [`MIN_AGE_DAYS`], when the amount is unconvertible, or when it
    ///   exceeds the balance. The balance is reported on every path.
    /// - `Checking`: the amount is subtracted unconditionally; if that
    ///   withdrawal takes the balance from non-negative to negative,
    ///   [`OVERDRAFT_FEE`] is subtracted as well. A withdrawal that merely
    ///   deepens an already-negative balance incurs no fee. Unconvertible
    ///   amounts are a no-op with the balance still reported.
    pub fn withdraw_with(
        &mut self,
        amount: impl Into<AmountInput>,
        reporter: &mut dyn BalanceReporter,
    ) {
        let amount = amount.into();
        match self.policy {
            WithdrawalPolicy::Unrestricted => {
                let Some(value) = amount.to_value() else {
                    return;
                };
                self.balance -= value;
            }
            WithdrawalPolicy::Savings => {
                // Too young: refuse before even looking at the amount
                if self.age_in_days() < MIN_AGE_DAYS {
                    reporter.report(self.balance);
                    return;
                }
                let Some(value) = amount.to_value() else {
                    reporter.report(self.balance);
                    return;
                };
                if value <= self.balance {
                    self.balance -= value;
                }
            }
            WithdrawalPolicy::Checking => {
                let Some(value) = amount.to_value() else {
                    reporter.report(self.balance);
                    return;
                };
                let pre = self.balance;
                self.balance -= value;
                // Fee only on the crossing transition, not on deepening
                if pre >= 0.0 && self.balance < 0.0 {
                    self.balance -= OVERDRAFT_FEE;
                }
            }
        }
        reporter.report(self.balance);
    }

    /// Current balance, with no report side effect
    pub fn view_balance(&self) -> f64 {
        self.balance
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.policy)
    }
}
