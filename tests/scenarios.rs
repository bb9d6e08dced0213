//! End-to-end scenarios for the combination lock and the trigger engine.

use tumbler::builder::{BuildError, CombinationBuilder, GraphBuilder};
use tumbler::combination_lock;
use tumbler::core::Match;
use tumbler::engine::{Fire, Machine, Step};
use tumbler::lock::{LockConfig, Position};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("tumbler=trace")
        .with_test_writer()
        .try_init();
}

fn statuses(lock: &mut tumbler::CombinationLock, input: &[u32]) -> Vec<String> {
    input
        .iter()
        .map(|&symbol| {
            lock.enter_digit(symbol);
            lock.status().to_string()
        })
        .collect()
}

#[test]
fn three_digit_lock_opens_and_relocks() {
    init_tracing();
    let mut lock = combination_lock![1, 2, 3].unwrap();
    assert_eq!(lock.status(), "LOCKED");

    let trajectory = statuses(&mut lock, &[1, 2, 3, 3, 666]);

    assert_eq!(trajectory, vec!["1", "12", "OPEN", "OPEN", "LOCKED"]);
}

#[test]
fn single_digit_lock_opens_and_relocks() {
    let mut lock = combination_lock![1].unwrap();
    assert_eq!(lock.status(), "LOCKED");

    let trajectory = statuses(&mut lock, &[1, 2, 666]);

    assert_eq!(trajectory, vec!["OPEN", "OPEN", "LOCKED"]);
}

#[test]
fn wrong_path_ends_in_error() {
    init_tracing();
    let mut lock = combination_lock![1, 2, 3].unwrap();

    lock.enter_digit(9);
    assert_eq!((lock.status(), lock.position()), ("9", Position::Bad(0)));
    lock.enter_digit(9);
    assert_eq!((lock.status(), lock.position()), ("99", Position::Bad(1)));
    lock.enter_digit(9);
    assert_eq!((lock.status(), lock.position()), ("ERROR", Position::Error));

    lock.enter_digit(666);
    assert_eq!((lock.status(), lock.position()), ("LOCKED", Position::Progress(0)));
}

#[test]
fn empty_combination_is_a_configuration_error() {
    let result = CombinationBuilder::new(Vec::new()).build();
    assert_eq!(result.err(), Some(BuildError::EmptyCombination));
}

#[test]
fn config_loaded_from_json_drives_the_lock() {
    let config = LockConfig::from_json(r#"{ "reset_symbol": 11, "error_mode": "hold" }"#).unwrap();
    let mut lock = CombinationBuilder::new([2, 4]).config(config).build().unwrap();

    let trajectory = statuses(&mut lock, &[1, 1, 5, 11]);

    assert_eq!(trajectory, vec!["1", "ERROR", "ERROR", "LOCKED"]);
}

#[test]
fn lock_history_records_every_resolved_feed() {
    let mut lock = combination_lock![5, 5].unwrap();
    statuses(&mut lock, &[5, 70, 5, 666]);

    let history = lock.machine().history();
    assert_eq!(history.len(), 3);
    assert_eq!(history.outputs(), vec!["5", "OPEN", "LOCKED"]);
    assert!(history.records().iter().all(|r| r.matched == Match::Exact));
}

#[test]
fn wildcard_steps_are_marked_default() {
    let mut lock = combination_lock![5, 5].unwrap();

    let step = lock.enter_digit(1).unwrap();

    assert!(matches!(step, Step::Moved { matched: Match::Default, .. }));
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Trigger {
    Coin,
    Push,
}

fn turnstile() -> Machine<Trigger, String> {
    let mut builder = GraphBuilder::new();
    let locked = builder.add_state("locked", String::new());
    let unlocked = builder.add_state("unlocked", String::new());
    let say = |word: &'static str| move |_: &Trigger, _: &String| word.to_string();
    builder
        .on(locked, Trigger::Push, say("Pattern."), locked)
        .unwrap()
        .on(unlocked, Trigger::Push, say("the"), locked)
        .unwrap()
        .on(unlocked, Trigger::Coin, say("is"), unlocked)
        .unwrap()
        .on(locked, Trigger::Coin, say("This"), unlocked)
        .unwrap();
    Machine::new(builder.build(), locked).unwrap()
}

#[test]
fn trigger_engine_runs_registered_actions() {
    init_tracing();
    let mut machine = turnstile();

    let words: Vec<String> = [Trigger::Coin, Trigger::Coin, Trigger::Push, Trigger::Push]
        .into_iter()
        .map(|trigger| {
            machine.fire(trigger);
            machine.status().clone()
        })
        .collect();

    assert_eq!(words, vec!["This", "is", "the", "Pattern."]);
    assert_eq!(machine.current_label(), "locked");
}

#[test]
fn trigger_without_rule_reports_and_stays() {
    let mut builder = GraphBuilder::new();
    let idle = builder.add_state("idle", "idle".to_string());
    let busy = builder.add_state("busy", String::new());
    builder
        .on(idle, Trigger::Coin, |_: &Trigger, _: &String| "busy".to_string(), busy)
        .unwrap();
    let graph = builder.build();

    let fired = graph.fire(busy, &Trigger::Push, &String::new());
    assert_eq!(fired, Fire::Unmatched { state: busy });

    let mut machine = Machine::new(graph, idle).unwrap();
    let step = machine.fire(Trigger::Push);
    assert_eq!(step, Step::Unresolved { state: idle });
    assert_eq!(machine.status(), "idle");
}
