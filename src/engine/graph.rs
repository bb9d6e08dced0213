//! Immutable state graph and exact-match firing.

use crate::core::{StateId, StateNode, Symbol};
use std::fmt;
use tracing::{debug, trace};

/// Result of firing a trigger at a state with [`StateGraph::fire`].
#[derive(Clone, Debug, PartialEq)]
pub enum Fire<O> {
    /// A rule existed: its action produced `output` for state `to`.
    Moved { from: StateId, to: StateId, output: O },

    /// No rule for this trigger; the machine stays where it was.
    Unmatched { state: StateId },
}

impl<O> Fire<O> {
    /// State the machine is in after firing.
    pub fn state(&self) -> StateId {
        match self {
            Self::Moved { to, .. } => *to,
            Self::Unmatched { state } => *state,
        }
    }

    pub fn is_unmatched(&self) -> bool {
        matches!(self, Self::Unmatched { .. })
    }
}

/// Arena of states with their transition tables.
///
/// Built once by [`GraphBuilder`](crate::builder::GraphBuilder); its topology
/// never changes afterwards, so it can be shared between machines.
pub struct StateGraph<S, O> {
    nodes: Vec<StateNode<S, O>>,
}

impl<S: Symbol, O> StateGraph<S, O> {
    pub(crate) fn from_nodes(nodes: Vec<StateNode<S, O>>) -> Self {
        Self { nodes }
    }

    /// Node for `id`, if it belongs to this graph.
    pub(crate) fn node(&self, id: StateId) -> Option<&StateNode<S, O>> {
        self.nodes.get(id.0)
    }

    pub fn contains(&self, id: StateId) -> bool {
        id.0 < self.nodes.len()
    }

    pub fn label(&self, id: StateId) -> Option<&str> {
        self.node(id).map(|n| n.label.as_str())
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Handles of every state, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = StateId> + '_ {
        (0..self.nodes.len()).map(StateId)
    }

    /// Fire `trigger` at `from` using only exact entries.
    ///
    /// A registered wildcard is ignored here; a trigger without its own rule
    /// leaves the machine in `from` and reports [`Fire::Unmatched`].
    pub fn fire(&self, from: StateId, trigger: &S, previous: &O) -> Fire<O> {
        let Some(transition) = self.node(from).and_then(|n| n.table.lookup(trigger)) else {
            debug!(state = %from, ?trigger, "no transition for trigger");
            return Fire::Unmatched { state: from };
        };

        let output = transition.action.apply(trigger, previous);
        trace!(from = %from, to = %transition.target, ?trigger, "fired");
        Fire::Moved {
            from,
            to: transition.target,
            output,
        }
    }
}

impl<S: Symbol, O: fmt::Debug> fmt::Debug for StateGraph<S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateGraph")
            .field("nodes", &self.nodes)
            .finish()
    }
}
