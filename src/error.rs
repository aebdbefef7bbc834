//! Custom error types for pocket-ledger
//!
//! This module defines the error hierarchy for the library using thiserror
//! for ergonomic error definitions.
//!
//! Only account construction can fail. Runtime operations (deposit,
//! withdraw) absorb bad input silently and never return an error.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for pocket-ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The creation date could not be interpreted as a calendar date
    #[error("Invalid creation date: {0}")]
    InvalidCreationDate(String),

    /// The creation date lies strictly after today
    #[error("Creation date {given} is in the future (today is {today})")]
    FutureCreationDate { given: NaiveDate, today: NaiveDate },

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),
}

impl LedgerError {
    /// Check if this is an invalid-date (type) error
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, Self::InvalidCreationDate(_))
    }

    /// Check if this is a future-date (domain) error
    pub fn is_future_date(&self) -> bool {
        matches!(self, Self::FutureCreationDate { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<chrono::ParseError> for LedgerError {
    fn from(err: chrono::ParseError) -> Self {
        Self::InvalidCreationDate(err.to_string())
    }
}

/// Result type alias for pocket-ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::InvalidCreationDate("not a date".into());
        assert_eq!(err.to_string(), "Invalid creation date: not a date");
    }

    #[test]
    fn test_future_date_error() {
        let err = LedgerError::FutureCreationDate {
            given: NaiveDate::from_ymd_opt(2030, 1, 2).unwrap(),
            today: NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "Creation date 2030-01-02 is in the future (today is 2026-08-31)"
        );
        assert!(err.is_future_date());
        assert!(!err.is_invalid_date());
    }

    #[test]
    fn test_from_parse_error() {
        let parse_err = "31/12/2020".parse::<NaiveDate>().unwrap_err();
        let err: LedgerError = parse_err.into();
        assert!(err.is_invalid_date());
    }
}
