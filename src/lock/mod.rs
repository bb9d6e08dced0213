//! Combination lock built on the generic engine.
//!
//! A lock opens after the right digits have been entered in order:
//!
//! - at startup, and after a reset, the status is `LOCKED`
//! - each digit entered is appended to the status
//! - the correct combination turns the status into `OPEN`
//! - a wrong combination turns it into `ERROR`
//!
//! The graph behind a lock is synthesized by
//! [`CombinationBuilder`](crate::builder::CombinationBuilder).

pub mod config;

pub use config::{ErrorMode, LockConfig, DEFAULT_HISTORY_LIMIT, DEFAULT_RESET_SYMBOL, MAX_DIGIT};

use crate::engine::{Machine, Step};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Where a lock stands within its combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    /// This many correct digits entered so far.
    Progress(usize),
    /// `i + 1` digits entered, at least one of them wrong.
    Bad(usize),
    /// Combination complete.
    Open,
    /// Wrong combination entered.
    Error,
}

/// A combination lock.
pub struct CombinationLock {
    machine: Machine<u32, String>,
    positions: Arc<[Position]>,
    config: LockConfig,
}

impl CombinationLock {
    pub(crate) fn new(
        machine: Machine<u32, String>,
        positions: Vec<Position>,
        config: LockConfig,
    ) -> Self {
        Self {
            machine,
            positions: positions.into(),
            config,
        }
    }

    /// Enter a digit or the reset symbol.
    ///
    /// Returns `None` and leaves the lock untouched for any other input.
    pub fn enter_digit(&mut self, symbol: u32) -> Option<Step> {
        if !self.config.accepts(symbol) {
            debug!(symbol, "ignored input outside the lock alphabet");
            return None;
        }
        Some(self.machine.feed(symbol))
    }

    /// Relock from wherever the lock currently is.
    pub fn reset(&mut self) -> Step {
        self.machine.feed(self.config.reset_symbol)
    }

    /// What the lock's display currently shows.
    pub fn status(&self) -> &str {
        self.machine.status()
    }

    pub fn position(&self) -> Position {
        self.positions[self.machine.current().index()]
    }

    pub fn is_open(&self) -> bool {
        self.position() == Position::Open
    }

    pub fn is_error(&self) -> bool {
        self.position() == Position::Error
    }

    /// Number of digits in the combination.
    pub fn len(&self) -> usize {
        (self.positions.len() - 1) / 2
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn config(&self) -> &LockConfig {
        &self.config
    }

    pub fn machine(&self) -> &Machine<u32, String> {
        &self.machine
    }

    /// Another lock with the same combination, sharing this lock's graph,
    /// freshly locked.
    pub fn fresh(&self) -> Self {
        Self {
            machine: self.machine.fresh(),
            positions: Arc::clone(&self.positions),
            config: self.config.clone(),
        }
    }
}

impl fmt::Display for CombinationLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status())
    }
}

impl fmt::Debug for CombinationLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CombinationLock")
            .field("status", &self.status())
            .field("position", &self.position())
            .field("config", &self.config)
            .finish()
    }
}
