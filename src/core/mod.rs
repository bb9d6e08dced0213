//! Core data model of the engine.
//!
//! This module contains the pieces every machine is made of:
//! - Actions that compute outputs
//! - States, transitions and their lookup tables
//! - History of resolved feeds
//!
//! Nothing in here mutates a running machine; that lives in
//! [`engine`](crate::engine).

mod action;
mod history;
mod state;

pub use action::{Action, DisplayAction, ERROR, LOCKED, OPEN};
pub use history::{FeedHistory, FeedRecord};
pub use state::{Match, SharedAction, StateId, StateNode, Symbol, Transition, TransitionTable};
