//! Output-producing actions attached to transitions.
//!
//! An action is a pure function of the fed symbol and the output of the
//! state being left. It computes the output stored on the state being
//! entered. Actions carry no state of their own, so one action value can be
//! shared by any number of transitions.

use std::fmt::Display;

/// Display shown by a lock that has just been locked.
pub const LOCKED: &str = "LOCKED";

/// Display shown once the full combination has been entered.
pub const OPEN: &str = "OPEN";

/// Display shown after a wrong combination.
pub const ERROR: &str = "ERROR";

/// Pure function computing the next output of a transition.
///
/// Any `Fn(&S, &O) -> O` closure is an action, so ad-hoc machines do not need
/// their own types:
///
/// ```rust
/// use tumbler::core::Action;
///
/// let count = |_: &char, previous: &usize| previous + 1;
/// assert_eq!(count.apply(&'x', &2), 3);
/// ```
pub trait Action<S, O>: Send + Sync {
    /// Compute the output of the target state.
    fn apply(&self, symbol: &S, previous: &O) -> O;
}

impl<S, O, F> Action<S, O> for F
where
    F: Fn(&S, &O) -> O + Send + Sync,
{
    fn apply(&self, symbol: &S, previous: &O) -> O {
        self(symbol, previous)
    }
}

/// The closed set of display actions used by the combination lock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayAction {
    /// Append the symbol to a numeric display, or start a new one.
    Append,
    /// Show [`OPEN`].
    SetOpen,
    /// Show [`ERROR`].
    SetError,
    /// Show [`LOCKED`].
    SetLocked,
}

impl<S: Display> Action<S, String> for DisplayAction {
    fn apply(&self, symbol: &S, previous: &String) -> String {
        match self {
            Self::Append => append(symbol, previous),
            Self::SetOpen => OPEN.to_string(),
            Self::SetError => ERROR.to_string(),
            Self::SetLocked => LOCKED.to_string(),
        }
    }
}

/// Concatenate `symbol` onto `previous`.
///
/// A previous display that is not made of digits (e.g. "LOCKED" or "ERROR")
/// counts as empty.
fn append<S: Display>(symbol: &S, previous: &str) -> String {
    if is_numeric(previous) {
        format!("{previous}{symbol}")
    } else {
        symbol.to_string()
    }
}

fn is_numeric(display: &str) -> bool {
    !display.is_empty() && display.bytes().all(|b| b.is_ascii_digit())
}
