//! States, transitions and per-state transition tables.
//!
//! States live in an arena owned by a [`StateGraph`](crate::engine::StateGraph)
//! and refer to each other through [`StateId`] handles, which keeps cyclic
//! graphs (a state looping back to itself, or resetting to the start) free of
//! ownership cycles.

use super::action::Action;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// Input alphabet element.
///
/// Blanket-implemented for every type that can key a hash map and be printed
/// in diagnostics.
pub trait Symbol: Clone + Eq + Hash + fmt::Debug + Send + Sync {}

impl<T> Symbol for T where T: Clone + Eq + Hash + fmt::Debug + Send + Sync {}

/// Stable handle to a state inside one graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateId(pub(crate) usize);

impl StateId {
    /// Position of the state in its graph.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which table entry resolved a symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Match {
    /// The symbol had its own entry.
    Exact,
    /// The wildcard entry caught the symbol.
    Default,
}

/// Shared, type-erased action.
pub type SharedAction<S, O> = Arc<dyn Action<S, O>>;

/// An outgoing edge: the action to run and the state it leads to.
pub struct Transition<S, O> {
    pub action: SharedAction<S, O>,
    pub target: StateId,
}

impl<S, O> Clone for Transition<S, O> {
    fn clone(&self) -> Self {
        Self {
            action: Arc::clone(&self.action),
            target: self.target,
        }
    }
}

impl<S, O> fmt::Debug for Transition<S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// Outgoing transitions of one state.
pub struct TransitionTable<S, O> {
    exact: HashMap<S, Transition<S, O>>,
    default: Option<Transition<S, O>>,
}

impl<S: Symbol, O> TransitionTable<S, O> {
    pub fn new() -> Self {
        Self {
            exact: HashMap::new(),
            default: None,
        }
    }

    /// Insert an exact entry. Returns `false` and leaves the table untouched
    /// if `symbol` already has one.
    pub fn insert(&mut self, symbol: S, transition: Transition<S, O>) -> bool {
        if self.exact.contains_key(&symbol) {
            return false;
        }
        self.exact.insert(symbol, transition);
        true
    }

    /// Install the wildcard entry. Returns `false` if one is already set.
    pub fn set_default(&mut self, transition: Transition<S, O>) -> bool {
        if self.default.is_some() {
            return false;
        }
        self.default = Some(transition);
        true
    }

    /// Exact entry for `symbol`, ignoring the wildcard.
    pub fn lookup(&self, symbol: &S) -> Option<&Transition<S, O>> {
        self.exact.get(symbol)
    }

    /// Exact entry for `symbol`, falling back to the wildcard.
    pub fn resolve(&self, symbol: &S) -> Option<(&Transition<S, O>, Match)> {
        self.lookup(symbol)
            .map(|t| (t, Match::Exact))
            .or_else(|| self.default.as_ref().map(|t| (t, Match::Default)))
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Number of exact entries.
    pub fn len(&self) -> usize {
        self.exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.default.is_none()
    }
}

impl<S: Symbol, O> Default for TransitionTable<S, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol, O> fmt::Debug for TransitionTable<S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionTable")
            .field("exact", &self.exact)
            .field("default", &self.default)
            .finish()
    }
}

/// A node of the graph.
///
/// `seed` is the output the state shows before any transition has fired into
/// it; for the initial state that is the machine's first status.
pub struct StateNode<S, O> {
    pub label: String,
    pub seed: O,
    pub table: TransitionTable<S, O>,
}

impl<S: Symbol, O: fmt::Debug> fmt::Debug for StateNode<S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateNode")
            .field("label", &self.label)
            .field("seed", &self.seed)
            .field("table", &self.table)
            .finish()
    }
}
