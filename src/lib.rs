//! Tumbler: a table-driven finite state machine engine
//!
//! States hold a transition table keyed by input symbol. Each entry pairs a
//! pure output-producing action with a successor state, and a wildcard entry
//! catches symbols without an exact match. On top of that generic engine,
//! [`builder::CombinationBuilder`] synthesizes a complete combination lock
//! from a digit sequence.
//!
//! # Core Concepts
//!
//! - **Action**: pure `(symbol, previous output) -> output` function
//! - **State**: output plus a table of outgoing transitions
//! - **Machine**: current-state pointer walking a shared, frozen graph
//!
//! # Example
//!
//! ```rust
//! use tumbler::builder::CombinationBuilder;
//!
//! let mut lock = CombinationBuilder::new([1, 2, 3]).build().unwrap();
//! assert_eq!(lock.status(), "LOCKED");
//!
//! lock.enter_digit(1);
//! assert_eq!(lock.status(), "1");
//! lock.enter_digit(2);
//! assert_eq!(lock.status(), "12");
//! lock.enter_digit(3);
//! assert_eq!(lock.status(), "OPEN");
//!
//! lock.enter_digit(666);
//! assert_eq!(lock.status(), "LOCKED");
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod lock;

// Re-export commonly used types
pub use crate::builder::{BuildError, CombinationBuilder, ConfigurationError, GraphBuilder};
pub use crate::core::{Action, DisplayAction, StateId};
pub use crate::engine::{Machine, StateGraph, Step};
pub use crate::lock::{CombinationLock, LockConfig, Position};
