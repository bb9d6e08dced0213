//! Running machines over state graphs.
//!
//! This module is the mutable half of the engine:
//! - [`StateGraph`]: frozen arena of states, shareable between machines
//! - [`Machine`]: current state, per-machine outputs and feed history
//!
//! Two lookup rules are offered. [`Machine::feed`] tries the exact entry and
//! then the wildcard; [`Machine::fire`] (and [`StateGraph::fire`]) only honour
//! exact entries and leave the machine in place otherwise.

mod graph;
mod machine;

pub use graph::{Fire, StateGraph};
pub use machine::{Machine, Step};
