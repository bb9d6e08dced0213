//! Synthesis of the combination lock state graph.
//!
//! For a combination of `n` digits the graph has `2n + 1` states:
//!
//! - `progress-0 ..= progress-(n-1)`: that many correct digits entered
//! - `open`: the whole combination entered
//! - `bad-0 ..= bad-(n-2)`: a wrong digit was entered somewhere in the first
//!   `i + 1` digits
//! - `error`: `n` digits entered and at least one was wrong
//!
//! The correct digit moves `progress-i` forward. Anything else moves it to
//! `bad-i`, except on the last digit where it goes straight to `error`. Bad
//! states chain forward on any digit and the last one falls into `error`. The
//! reset symbol relocks from every state.

use crate::builder::error::BuildError;
use crate::builder::graph::GraphBuilder;
use crate::core::{DisplayAction, StateId, ERROR, LOCKED, OPEN};
use crate::engine::Machine;
use crate::lock::config::is_digit;
use crate::lock::{CombinationLock, ErrorMode, LockConfig, Position};
use tracing::debug;

/// Builder for [`CombinationLock`]s.
///
/// # Example
///
/// ```rust
/// use tumbler::builder::CombinationBuilder;
///
/// let mut lock = CombinationBuilder::new([1, 2, 3]).build()?;
/// assert_eq!(lock.status(), "LOCKED");
///
/// for digit in [1, 2, 3] {
///     lock.enter_digit(digit);
/// }
/// assert_eq!(lock.status(), "OPEN");
/// # Ok::<(), tumbler::builder::BuildError>(())
/// ```
#[derive(Clone, Debug)]
pub struct CombinationBuilder {
    combination: Vec<u32>,
    config: LockConfig,
}

impl CombinationBuilder {
    /// Start a builder for `combination` with the default configuration.
    pub fn new(combination: impl IntoIterator<Item = u32>) -> Self {
        Self {
            combination: combination.into_iter().collect(),
            config: LockConfig::default(),
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: LockConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the symbol that relocks the lock.
    pub fn reset_symbol(mut self, symbol: u32) -> Self {
        self.config.reset_symbol = symbol;
        self
    }

    /// Set the behaviour of the error state.
    pub fn error_mode(mut self, mode: ErrorMode) -> Self {
        self.config.error_mode = mode;
        self
    }

    /// Build the lock.
    /// Returns an error if the combination is empty or malformed, or if the
    /// reset symbol is itself a digit.
    pub fn build(self) -> Result<CombinationLock, BuildError> {
        if self.combination.is_empty() {
            return Err(BuildError::EmptyCombination);
        }
        if let Some(&digit) = self.combination.iter().find(|&&d| !is_digit(d)) {
            return Err(BuildError::InvalidDigit { digit });
        }
        self.config.validate()?;

        let mut layout = Layout::default();
        let n = self.combination.len();

        let mut progress: Vec<StateId> = (0..n)
            .map(|i| {
                let seed = if i == 0 { LOCKED } else { "" };
                layout.add(format!("progress-{i}"), seed, Position::Progress(i))
            })
            .collect();
        progress.push(layout.add("open", OPEN, Position::Open));
        let bad: Vec<StateId> = (0..n - 1)
            .map(|i| layout.add(format!("bad-{i}"), "", Position::Bad(i)))
            .collect();
        let error = layout.add("error", ERROR, Position::Error);

        let initial = progress[0];
        let open = progress[n];
        let graph = &mut layout.graph;

        for (i, (&digit, pair)) in self.combination.iter().zip(progress.windows(2)).enumerate() {
            let (from, next) = (pair[0], pair[1]);
            graph.on(from, digit, advance(next, open), next)?;
            match bad.get(i) {
                Some(&wrong) => graph.otherwise(from, DisplayAction::Append, wrong)?,
                None => graph.otherwise(from, DisplayAction::SetError, error)?,
            };
        }

        for (i, &from) in bad.iter().enumerate() {
            match bad.get(i + 1) {
                Some(&next) => graph.otherwise(from, DisplayAction::Append, next)?,
                None => graph.otherwise(from, DisplayAction::SetError, error)?,
            };
        }

        graph.otherwise(open, DisplayAction::SetOpen, open)?;

        match self.config.error_mode {
            ErrorMode::Absorb => graph.otherwise(error, DisplayAction::Append, error)?,
            ErrorMode::Hold => graph.otherwise(error, DisplayAction::SetError, error)?,
            ErrorMode::Retry => {
                let next = progress[1];
                graph.on(error, self.combination[0], advance(next, open), next)?;
                match bad.first() {
                    Some(&wrong) => graph.otherwise(error, DisplayAction::Append, wrong)?,
                    None => graph.otherwise(error, DisplayAction::SetError, error)?,
                }
            }
        };

        let reset = self.config.reset_symbol;
        for from in progress.iter().chain(&bad).chain(std::iter::once(&error)) {
            graph.on(*from, reset, DisplayAction::SetLocked, initial)?;
        }

        debug!(
            digits = n,
            states = layout.graph.len(),
            error_mode = ?self.config.error_mode,
            "synthesized combination lock"
        );

        let machine = Machine::new(layout.graph.build(), initial)?
            .with_history_limit(self.config.history_limit);
        Ok(CombinationLock::new(machine, layout.positions, self.config))
    }
}

/// Action for a correct digit: opening when it completes the combination.
fn advance(next: StateId, open: StateId) -> DisplayAction {
    if next == open {
        DisplayAction::SetOpen
    } else {
        DisplayAction::Append
    }
}

/// Graph under construction together with the lock position of every state.
#[derive(Default)]
struct Layout {
    graph: GraphBuilder<u32, String>,
    positions: Vec<Position>,
}

impl Layout {
    fn add(&mut self, label: impl Into<String>, seed: &str, position: Position) -> StateId {
        self.positions.push(position);
        self.graph.add_state(label, seed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_combination_is_rejected() {
        let result = CombinationBuilder::new([]).build();
        assert!(matches!(result, Err(BuildError::EmptyCombination)));
    }

    #[test]
    fn non_digit_is_rejected() {
        let result = CombinationBuilder::new([1, 12, 3]).build();
        assert!(matches!(result, Err(BuildError::InvalidDigit { digit: 12 })));
    }

    #[test]
    fn reset_symbol_inside_digits_is_rejected() {
        let result = CombinationBuilder::new([1, 2]).reset_symbol(5).build();
        assert!(matches!(
            result,
            Err(BuildError::ResetCollidesWithDigit { symbol: 5 })
        ));
    }

    #[test]
    fn graph_has_two_n_plus_one_states() {
        for n in 1..=6 {
            let lock = CombinationBuilder::new(vec![0; n]).build().unwrap();
            assert_eq!(lock.machine().graph().len(), 2 * n + 1);
        }
    }

    #[test]
    fn single_digit_lock_has_no_bad_states() {
        let lock = CombinationBuilder::new([4]).build().unwrap();
        let graph = lock.machine().graph();

        let labels: Vec<&str> = graph.ids().filter_map(|id| graph.label(id)).collect();
        assert_eq!(labels, vec!["progress-0", "open", "error"]);
    }

    #[test]
    fn every_state_has_a_default_entry() {
        for mode in [ErrorMode::Absorb, ErrorMode::Hold, ErrorMode::Retry] {
            let lock = CombinationBuilder::new([3, 1, 4]).error_mode(mode).build().unwrap();
            let graph = lock.machine().graph();

            for id in graph.ids() {
                let node = graph.node(id).unwrap();
                assert!(node.table.has_default(), "{} has no default", node.label);
                assert!(node.table.lookup(&666).is_some(), "{} cannot reset", node.label);
            }
        }
    }

    #[test]
    fn advance_opens_only_on_last_digit() {
        assert_eq!(advance(StateId(3), StateId(3)), DisplayAction::SetOpen);
        assert_eq!(advance(StateId(2), StateId(3)), DisplayAction::Append);
    }

    #[test]
    fn repeated_digits_build_fine() {
        let mut lock = CombinationBuilder::new([7, 7, 7]).build().unwrap();
        for _ in 0..3 {
            lock.enter_digit(7);
        }
        assert_eq!(lock.status(), "OPEN");
    }
}
