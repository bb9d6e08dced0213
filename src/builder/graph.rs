//! Builder for constructing state graphs.

use crate::builder::error::BuildError;
use crate::core::{Action, StateId, StateNode, Symbol, Transition, TransitionTable};
use crate::engine::StateGraph;
use std::sync::Arc;

/// Builder for state graphs.
///
/// States are added first and handed back as [`StateId`]s; transitions are
/// then registered between them. Registering a second exact entry for the
/// same `(state, symbol)` pair, or a second default entry for a state, is
/// rejected with an error and the first registration stays in effect.
///
/// # Example
///
/// ```rust
/// use tumbler::builder::GraphBuilder;
/// use tumbler::engine::Machine;
///
/// let mut builder = GraphBuilder::<&str, String>::new();
/// let locked = builder.add_state("locked", String::new());
/// let unlocked = builder.add_state("unlocked", String::new());
/// builder
///     .on(locked, "coin", |_: &&str, _: &String| "unlocked".to_string(), unlocked)?
///     .on(unlocked, "push", |_: &&str, _: &String| "locked".to_string(), locked)?;
///
/// let mut machine = Machine::new(builder.build(), locked)?;
/// machine.fire("coin");
/// assert_eq!(machine.status(), "unlocked");
/// # Ok::<(), tumbler::builder::BuildError>(())
/// ```
pub struct GraphBuilder<S, O> {
    nodes: Vec<StateNode<S, O>>,
}

impl<S: Symbol, O> GraphBuilder<S, O> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add a state showing `seed` until a transition fires into it.
    pub fn add_state(&mut self, label: impl Into<String>, seed: O) -> StateId {
        self.nodes.push(StateNode {
            label: label.into(),
            seed,
            table: TransitionTable::new(),
        });
        StateId(self.nodes.len() - 1)
    }

    /// Register an exact transition `from --symbol--> to`.
    pub fn on<A>(
        &mut self,
        from: StateId,
        symbol: S,
        action: A,
        to: StateId,
    ) -> Result<&mut Self, BuildError>
    where
        A: Action<S, O> + 'static,
    {
        let transition = self.transition(action, to)?;
        let node = self.node_mut(from)?;
        if !node.table.insert(symbol.clone(), transition) {
            return Err(BuildError::DuplicateTransition {
                state: node.label.clone(),
                symbol: format!("{symbol:?}"),
            });
        }
        Ok(self)
    }

    /// Register the wildcard transition of `from`, taken when no exact entry
    /// matches.
    pub fn otherwise<A>(
        &mut self,
        from: StateId,
        action: A,
        to: StateId,
    ) -> Result<&mut Self, BuildError>
    where
        A: Action<S, O> + 'static,
    {
        let transition = self.transition(action, to)?;
        let node = self.node_mut(from)?;
        if !node.table.set_default(transition) {
            return Err(BuildError::DuplicateDefault {
                state: node.label.clone(),
            });
        }
        Ok(self)
    }

    /// Number of states added so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Freeze the graph.
    pub fn build(self) -> Arc<StateGraph<S, O>> {
        Arc::new(StateGraph::from_nodes(self.nodes))
    }

    fn transition<A>(&self, action: A, to: StateId) -> Result<Transition<S, O>, BuildError>
    where
        A: Action<S, O> + 'static,
    {
        if to.0 >= self.nodes.len() {
            return Err(BuildError::UnknownState { id: to });
        }
        Ok(Transition {
            action: Arc::new(action),
            target: to,
        })
    }

    fn node_mut(&mut self, id: StateId) -> Result<&mut StateNode<S, O>, BuildError> {
        self.nodes
            .get_mut(id.0)
            .ok_or(BuildError::UnknownState { id })
    }
}

impl<S: Symbol, O> Default for GraphBuilder<S, O> {
    fn default() -> Self {
        Self::new()
    }
}
