//! Combination Lock
//!
//! This demo builds locks from digit sequences and shows how the status
//! evolves for correct, wrong and reset inputs.
//!
//! Key concepts:
//! - The whole state graph is synthesized from the combination
//! - Wrong digits walk through bad states into the error state
//! - The reset symbol relocks from anywhere
//! - Error handling can be configured from JSON
//!
//! Run with: cargo run --example combination_lock

use tumbler::builder::CombinationBuilder;
use tumbler::lock::{CombinationLock, LockConfig};

fn session(title: &str, lock: &mut CombinationLock, input: &[u32]) {
    println!("--- {title} ---");
    println!("  start: {lock}");
    for &symbol in input {
        match lock.enter_digit(symbol) {
            Some(_) => println!("  {symbol:>3}: {lock} ({:?})", lock.position()),
            None => println!("  {symbol:>3}: ignored"),
        }
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== Combination Lock Example ===\n");

    let mut lock = CombinationBuilder::new([1, 2, 3]).build()?;
    session("correct combination", &mut lock, &[1, 2, 3, 3, 666]);
    session("wrong combination", &mut lock, &[9, 9, 9, 4, 666]);

    let mut single = CombinationBuilder::new([1]).build()?;
    session("single digit", &mut single, &[1, 2, 3, 666, 3, 3, 1]);

    let config = LockConfig::from_json(r#"{ "error_mode": "retry" }"#)?;
    let mut retry = CombinationBuilder::new([4, 2]).config(config).build()?;
    session("retry after error", &mut retry, &[1, 1, 4, 2, 42]);

    match CombinationBuilder::new(Vec::new()).build() {
        Ok(_) => println!("empty combination unexpectedly built"),
        Err(e) => println!("empty combination rejected: {e}"),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
