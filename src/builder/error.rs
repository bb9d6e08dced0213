//! Build errors for state graphs and combination locks.

use crate::core::StateId;
use thiserror::Error;

/// Errors that can occur while building a graph, a machine or a lock.
///
/// All of them are raised before any machine exists; a failed build never
/// yields a partial machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Combination is empty. Provide at least one digit")]
    EmptyCombination,

    #[error("Combination digit {digit} is outside 0-9")]
    InvalidDigit { digit: u32 },

    #[error("Reset symbol {symbol} collides with a digit")]
    ResetCollidesWithDigit { symbol: u32 },

    #[error("State '{state}' already has a transition for symbol {symbol}")]
    DuplicateTransition { state: String, symbol: String },

    #[error("State '{state}' already has a default transition")]
    DuplicateDefault { state: String },

    #[error("Machine has no states. Add at least one state")]
    NoStates,

    #[error("State {id} does not belong to this graph")]
    UnknownState { id: StateId },
}

/// Name used for build-time failures of a lock or a graph.
pub type ConfigurationError = BuildError;
