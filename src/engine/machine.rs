//! Machine handle that walks a shared state graph.

use crate::builder::BuildError;
use crate::core::{FeedHistory, FeedRecord, Match, StateId, Symbol};
use crate::engine::graph::{Fire, StateGraph};
use chrono::Utc;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Outcome of a single [`Machine::feed`] or [`Machine::fire`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// A transition fired.
    Moved {
        from: StateId,
        to: StateId,
        matched: Match,
    },

    /// Nothing matched; state, outputs and history are unchanged.
    Unresolved { state: StateId },
}

impl Step {
    /// State the machine is in after the step.
    pub fn state(&self) -> StateId {
        match self {
            Self::Moved { to, .. } => *to,
            Self::Unresolved { state } => *state,
        }
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::Unresolved { .. })
    }
}

/// A running machine over a shared [`StateGraph`].
///
/// The graph is read-only; each machine keeps its own output for every state
/// and its own current-state pointer, so several machines can walk the same
/// graph independently.
pub struct Machine<S: Symbol, O> {
    graph: Arc<StateGraph<S, O>>,
    outputs: Vec<O>,
    initial: StateId,
    current: StateId,
    history: FeedHistory<S, O>,
}

impl<S: Symbol, O: Clone> Machine<S, O> {
    /// Create a machine positioned at `initial`.
    ///
    /// Every state starts with its seed output, so the first status is the
    /// seed of `initial`.
    pub fn new(graph: Arc<StateGraph<S, O>>, initial: StateId) -> Result<Self, BuildError> {
        if !graph.contains(initial) {
            return Err(BuildError::UnknownState { id: initial });
        }

        Ok(Self::start(graph, initial))
    }

    fn start(graph: Arc<StateGraph<S, O>>, initial: StateId) -> Self {
        let outputs = graph
            .ids()
            .filter_map(|id| graph.node(id).map(|n| n.seed.clone()))
            .collect();

        Self {
            graph,
            outputs,
            initial,
            current: initial,
            history: FeedHistory::new(initial),
        }
    }

    /// Keep at most `limit` feed records; `None` keeps them all.
    pub fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history = FeedHistory::with_limit(self.current, limit);
        self
    }

    /// A new machine over the same graph, back at this machine's initial
    /// state with seed outputs and an empty history.
    pub fn fresh(&self) -> Self {
        Self::start(Arc::clone(&self.graph), self.initial)
            .with_history_limit(self.history.limit())
    }

    /// Output of the current state.
    pub fn status(&self) -> &O {
        &self.outputs[self.current.0]
    }

    /// Output currently stored on `id`.
    pub fn output(&self, id: StateId) -> Option<&O> {
        self.outputs.get(id.0)
    }

    pub fn current(&self) -> StateId {
        self.current
    }

    pub fn initial(&self) -> StateId {
        self.initial
    }

    /// Label of the current state.
    pub fn current_label(&self) -> &str {
        self.graph.label(self.current).unwrap_or_default()
    }

    pub fn graph(&self) -> &Arc<StateGraph<S, O>> {
        &self.graph
    }

    pub fn history(&self) -> &FeedHistory<S, O> {
        &self.history
    }

    /// Drop recorded feeds; outputs and the current state are kept.
    pub fn clear_history(&mut self) {
        self.history.clear(self.current);
    }

    /// Feed one symbol.
    ///
    /// The exact entry for `symbol` wins; otherwise the wildcard entry is used;
    /// otherwise nothing happens. When a transition fires, its action runs on
    /// the current output and the result is stored on the target state before
    /// the machine moves there.
    pub fn feed(&mut self, symbol: S) -> Step {
        let from = self.current;
        let resolved = self
            .graph
            .node(from)
            .and_then(|n| n.table.resolve(&symbol))
            .map(|(t, matched)| (t.clone(), matched));

        let Some((transition, matched)) = resolved else {
            debug!(state = %from, ?symbol, "no transition for symbol");
            return Step::Unresolved { state: from };
        };

        let output = transition.action.apply(&symbol, self.status());
        self.enter(from, transition.target, symbol, matched, output)
    }

    /// Fire one trigger, honouring exact entries only.
    ///
    /// Unlike [`feed`](Self::feed), a wildcard entry never catches the trigger.
    pub fn fire(&mut self, trigger: S) -> Step {
        match self.graph.fire(self.current, &trigger, self.status()) {
            Fire::Moved { from, to, output } => {
                self.enter(from, to, trigger, Match::Exact, output)
            }
            Fire::Unmatched { state } => Step::Unresolved { state },
        }
    }

    fn enter(&mut self, from: StateId, to: StateId, symbol: S, matched: Match, output: O) -> Step {
        trace!(from = %from, to = %to, ?symbol, ?matched, "transition");

        self.outputs[to.0] = output.clone();
        self.current = to;
        self.history.record(FeedRecord {
            symbol,
            from,
            to,
            matched,
            output,
            timestamp: Utc::now(),
        });

        Step::Moved { from, to, matched }
    }
}

impl<S: Symbol, O: fmt::Debug> fmt::Debug for Machine<S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("current", &self.current)
            .field("outputs", &self.outputs)
            .field("states", &self.graph.len())
            .field("feeds", &self.history.len())
            .finish()
    }
}
