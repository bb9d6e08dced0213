//! Turnstile
//!
//! This demo drives a two-state turnstile with the exact-match trigger
//! engine. Every registered rule produces a word; a trigger with no rule
//! leaves the turnstile where it is and the harness reports it.
//!
//! Run with: cargo run --example turnstile

use tumbler::builder::GraphBuilder;
use tumbler::engine::{Machine, Step};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Trigger {
    Coin,
    Push,
    Kick,
}

fn say(word: &'static str) -> impl Fn(&Trigger, &String) -> String + Send + Sync {
    move |_: &Trigger, _: &String| word.to_string()
}

fn main() -> Result<(), tumbler::BuildError> {
    tracing_subscriber::fmt::init();

    println!("=== Turnstile Example ===\n");

    let mut builder = GraphBuilder::new();
    let locked = builder.add_state("locked", String::new());
    let unlocked = builder.add_state("unlocked", String::new());

    builder
        .on(locked, Trigger::Push, say("Pattern."), locked)?
        .on(unlocked, Trigger::Push, say("the"), locked)?
        .on(unlocked, Trigger::Coin, say("is"), unlocked)?
        .on(locked, Trigger::Coin, say("This"), unlocked)?;

    let mut machine = Machine::new(builder.build(), locked)?;

    for trigger in [
        Trigger::Coin,
        Trigger::Coin,
        Trigger::Kick,
        Trigger::Push,
        Trigger::Push,
    ] {
        match machine.fire(trigger.clone()) {
            Step::Moved { .. } => {
                println!("{trigger:?} -> {} ({})", machine.status(), machine.current_label());
            }
            Step::Unresolved { .. } => {
                println!("{trigger:?} -> not happening ({})", machine.current_label());
            }
        }
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
