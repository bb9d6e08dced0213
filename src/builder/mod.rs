//! Builder API for state graphs and combination locks.
//!
//! [`GraphBuilder`] is the construction API of the generic engine: add
//! states, register exact and wildcard transitions, then freeze the graph.
//! [`CombinationBuilder`] uses it to synthesize a complete lock from a digit
//! sequence.

pub mod combination;
pub mod error;
pub mod graph;
pub mod macros;

pub use combination::CombinationBuilder;
pub use error::{BuildError, ConfigurationError};
pub use graph::GraphBuilder;

use crate::core::{Action, StateId, Symbol};
use crate::engine::Machine;

/// Build a machine from `(from, symbol, to)` rules that all share one action.
///
/// # Example
///
/// ```
/// use tumbler::builder::table_machine;
///
/// let mut machine = table_machine(
///     &["locked", "unlocked"],
///     &[(0, "coin", 1), (1, "push", 0)],
///     |s: &&str, _: &String| s.to_string(),
/// )
/// .unwrap();
///
/// machine.fire("coin");
/// assert_eq!(machine.status(), "coin");
/// ```
pub fn table_machine<S, A>(
    labels: &[&str],
    rules: &[(usize, S, usize)],
    action: A,
) -> Result<Machine<S, String>, BuildError>
where
    S: Symbol,
    A: Action<S, String> + Clone + 'static,
{
    let mut builder = GraphBuilder::new();
    let ids: Vec<StateId> = labels
        .iter()
        .map(|label| builder.add_state(*label, String::new()))
        .collect();

    for (from, symbol, to) in rules {
        builder.on(StateId(*from), symbol.clone(), action.clone(), StateId(*to))?;
    }

    let initial = ids.first().copied().ok_or(BuildError::NoStates)?;
    Machine::new(builder.build(), initial)
}
