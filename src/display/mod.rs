//! Balance-report formatting for terminal output
//!
//! Deposits and withdrawals report the resulting balance as their only
//! observable side effect. The line format is fixed; where it goes is
//! pluggable through [`BalanceReporter`] so tests can capture reports
//! instead of printing them.

/// Format a balance as the standard report line
pub fn balance_line(balance: f64) -> String {
    format!("Balance: {balance}")
}

/// Sink for balance reports emitted by account operations
pub trait BalanceReporter {
    /// Record one reported balance
    fn report(&mut self, balance: f64);
}

/// Reporter that prints each balance line to stdout
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl BalanceReporter for ConsoleReporter {
    fn report(&mut self, balance: f64) {
        println!("{}", balance_line(balance));
    }
}

/// Reporter that collects reported balances, for assertions in tests
#[derive(Debug, Default)]
pub struct RecordingReporter {
    /// Balances in the order they were reported
    pub reported: Vec<f64>,
}

impl RecordingReporter {
    /// Create an empty recording reporter
    pub fn new() -> Self {
        Self::default()
    }
}

impl BalanceReporter for RecordingReporter {
    fn report(&mut self, balance: f64) {
        self.reported.push(balance);
    }
}
