//! Account identifier type
//!
//! Account IDs are supplied by the caller, never generated, and may be either
//! free text or a plain number.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-supplied account identifier: text or integer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AccountId {
    /// Numeric identifier
    Number(u64),
    /// Textual identifier
    Text(String),
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<u64> for AccountId {
    fn from(n: u64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for AccountId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}
