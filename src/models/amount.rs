//! Forgiving amount input for deposits and withdrawals
//!
//! Transaction amounts may arrive missing, as raw text, or as numbers.
//! Conversion never errors: anything that fails to convert is treated as
//! "no usable amount" and the operation becomes a no-op. Only account
//! setup is strict; bad user input during transactions is absorbed.

/// A monetary amount as supplied by the caller, before conversion
#[derive(Debug, Clone, PartialEq)]
pub enum AmountInput {
    /// No amount was supplied
    Missing,
    /// A numeric amount
    Value(f64),
    /// Raw text still to be parsed as a number
    Raw(String),
}

impl AmountInput {
    /// Convert to a usable amount.
    ///
    /// Returns `None` when the amount is missing, fails to parse, or is not
    /// finite (NaN and infinities would corrupt the balance).
    pub fn to_value(&self) -> Option<f64> {
        match self {
            Self::Missing => None,
            Self::Value(v) => v.is_finite().then_some(*v),
            Self::Raw(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }
}

impl From<f64> for AmountInput {
    fn from(v: f64) -> Self {
        Self::Value(v)
    }
}

impl From<i64> for AmountInput {
    fn from(v: i64) -> Self {
        Self::Value(v as f64)
    }
}

impl From<Option<f64>> for AmountInput {
    fn from(v: Option<f64>) -> Self {
        match v {
            Some(v) => Self::Value(v),
            None => Self::Missing,
        }
    }
}

impl From<&str> for AmountInput {
    fn from(s: &str) -> Self {
        Self::Raw(s.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(s: String) -> Self {
        Self::Raw(s)
    }
}
