//! Feed history tracking.
//!
//! Every resolved feed is recorded so callers can replay the path a machine
//! took and the statuses it showed along the way.

use super::state::{Match, StateId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of one resolved feed.
///
/// # Example
///
/// ```rust
/// use tumbler::builder::GraphBuilder;
/// use tumbler::core::FeedRecord;
/// use tumbler::engine::Machine;
///
/// let mut builder = GraphBuilder::<char, u32>::new();
/// let idle = builder.add_state("idle", 0u32);
/// builder.otherwise(idle, |_: &char, n: &u32| n + 1, idle).unwrap();
///
/// let mut machine = Machine::new(builder.build(), idle).unwrap();
/// machine.feed('a');
///
/// let record: &FeedRecord<char, u32> = &machine.history().records()[0];
/// assert_eq!(record.symbol, 'a');
/// assert_eq!(record.output, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedRecord<S, O> {
    /// The symbol that was fed
    pub symbol: S,
    /// The state the machine left
    pub from: StateId,
    /// The state the machine entered
    pub to: StateId,
    /// Which table entry fired
    pub matched: Match,
    /// Output stored on the entered state
    pub output: O,
    /// When the transition fired
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of resolved feeds, starting from a known state.
///
/// With a limit set, only the most recent records are kept and the starting
/// state moves forward as older records are dropped.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FeedHistory<S, O> {
    initial: StateId,
    records: Vec<FeedRecord<S, O>>,
    #[serde(default)]
    limit: Option<usize>,
}

impl<S, O> FeedHistory<S, O> {
    /// Create an empty history for a machine starting in `initial`.
    pub fn new(initial: StateId) -> Self {
        Self::with_limit(initial, None)
    }

    /// Create an empty history keeping at most `limit` records.
    pub fn with_limit(initial: StateId, limit: Option<usize>) -> Self {
        Self {
            initial,
            records: Vec::new(),
            limit,
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Append a resolved feed, dropping the oldest records past the limit.
    pub fn record(&mut self, record: FeedRecord<S, O>) {
        self.records.push(record);

        let Some(limit) = self.limit else {
            return;
        };
        let excess = self.records.len().saturating_sub(limit);
        if let Some(dropped) = self.records.drain(..excess).last() {
            self.initial = dropped.to;
        }
    }

    /// Forget every record; the path restarts at `from`.
    pub fn clear(&mut self, from: StateId) {
        self.initial = from;
        self.records.clear();
    }

    pub fn records(&self) -> &[FeedRecord<S, O>] {
        &self.records
    }

    /// States visited, starting with the initial one.
    pub fn path(&self) -> Vec<StateId> {
        std::iter::once(self.initial)
            .chain(self.records.iter().map(|r| r.to))
            .collect()
    }

    /// Outputs shown after each resolved feed.
    pub fn outputs(&self) -> Vec<&O> {
        self.records.iter().map(|r| &r.output).collect()
    }

    /// Time between the first and the last recorded feed.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        (last.timestamp - first.timestamp).to_std().ok()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(symbol: u32, from: usize, to: usize, output: &str) -> FeedRecord<u32, String> {
        FeedRecord {
            symbol,
            from: StateId(from),
            to: StateId(to),
            matched: Match::Exact,
            output: output.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: FeedHistory<u32, String> = FeedHistory::new(StateId(0));
        assert!(history.is_empty());
        assert_eq!(history.path(), vec![StateId(0)]);
        assert!(history.duration().is_none());
    }

    #[test]
    fn path_follows_targets() {
        let mut history = FeedHistory::new(StateId(0));
        history.record(record(1, 0, 1, "1"));
        history.record(record(2, 1, 2, "12"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.path(), vec![StateId(0), StateId(1), StateId(2)]);
    }

    #[test]
    fn outputs_are_in_feed_order() {
        let mut history = FeedHistory::new(StateId(0));
        history.record(record(1, 0, 1, "1"));
        history.record(record(2, 1, 2, "12"));
        history.record(record(3, 2, 3, "OPEN"));

        assert_eq!(history.outputs(), vec!["1", "12", "OPEN"]);
    }

    #[test]
    fn duration_spans_first_to_last() {
        let mut history = FeedHistory::new(StateId(0));
        history.record(record(1, 0, 1, "1"));
        history.record(record(2, 1, 2, "12"));

        assert!(history.duration().is_some());
    }

    #[test]
    fn limit_keeps_most_recent_records() {
        let mut history = FeedHistory::with_limit(StateId(0), Some(2));
        history.record(record(1, 0, 1, "1"));
        history.record(record(2, 1, 2, "12"));
        history.record(record(3, 2, 3, "OPEN"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.outputs(), vec!["12", "OPEN"]);
        assert_eq!(history.path(), vec![StateId(1), StateId(2), StateId(3)]);
    }

    #[test]
    fn zero_limit_keeps_only_the_latest_state() {
        let mut history = FeedHistory::with_limit(StateId(0), Some(0));
        history.record(record(1, 0, 1, "1"));

        assert!(history.is_empty());
        assert_eq!(history.path(), vec![StateId(1)]);
    }

    #[test]
    fn clear_restarts_path() {
        let mut history = FeedHistory::new(StateId(0));
        history.record(record(1, 0, 1, "1"));

        history.clear(StateId(1));

        assert!(history.is_empty());
        assert_eq!(history.path(), vec![StateId(1)]);
    }

    #[test]
    fn history_serializes_to_json() {
        let mut history = FeedHistory::new(StateId(0));
        history.record(record(9, 0, 4, "9"));

        let json = serde_json::to_string(&history).unwrap();
        let restored: FeedHistory<u32, String> = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.records(), history.records());
        assert_eq!(restored.path(), history.path());
    }

    #[test]
    fn history_without_limit_field_deserializes_unbounded() {
        let json = r#"{ "initial": 0, "records": [] }"#;
        let history: FeedHistory<u32, String> = serde_json::from_str(json).unwrap();
        assert_eq!(history.limit(), None);
    }
}
