//! Combination lock configuration.

use crate::builder::BuildError;
use serde::{Deserialize, Serialize};

/// Reset symbol used when none is configured.
pub const DEFAULT_RESET_SYMBOL: u32 = 666;

/// Feed records a lock keeps when none is configured.
pub const DEFAULT_HISTORY_LIMIT: usize = 1024;

/// Highest digit a combination (or a user) may enter.
pub const MAX_DIGIT: u32 = 9;

/// What the error state does with further digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorMode {
    /// Stay in the error state, appending digits to the display.
    #[default]
    Absorb,

    /// Stay in the error state, keep showing "ERROR".
    Hold,

    /// Treat the next digit as the first digit of a new attempt.
    Retry,
}

/// Settings of a [`CombinationLock`](crate::lock::CombinationLock).
///
/// Missing fields fall back to their defaults when deserializing:
///
/// ```rust
/// use tumbler::lock::{ErrorMode, LockConfig};
///
/// let config = LockConfig::from_json(r#"{ "error_mode": "hold" }"#).unwrap();
/// assert_eq!(config.reset_symbol, 666);
/// assert_eq!(config.error_mode, ErrorMode::Hold);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockConfig {
    /// Input that relocks the lock from any state
    pub reset_symbol: u32,
    /// Behaviour of the error state
    pub error_mode: ErrorMode,
    /// Most recent feeds kept in the lock's history; `null` keeps all of them
    pub history_limit: Option<usize>,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            reset_symbol: DEFAULT_RESET_SYMBOL,
            error_mode: ErrorMode::default(),
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
        }
    }
}

impl LockConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check the configuration on its own, independent of any combination.
    pub fn validate(&self) -> Result<(), BuildError> {
        if is_digit(self.reset_symbol) {
            return Err(BuildError::ResetCollidesWithDigit {
                symbol: self.reset_symbol,
            });
        }
        Ok(())
    }

    /// Whether the lock reacts to `symbol` at all.
    pub fn accepts(&self, symbol: u32) -> bool {
        is_digit(symbol) || symbol == self.reset_symbol
    }
}

pub(crate) fn is_digit(symbol: u32) -> bool {
    symbol <= MAX_DIGIT
}
