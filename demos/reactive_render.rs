//! Reactive Render
//!
//! This example demonstrates the presentation-layer contract: a "view"
//! that re-reads the store and redraws whenever it is notified, plus a
//! re-entrant dispatch that the store queues behind the in-flight commit.
//!
//! Run with: cargo run --example reactive_render

use storelet::{Action, StoreBuilder, TransitionError};

#[derive(Debug)]
enum CounterAction {
    Increment,
    Decrement,
    Reset,
}

impl Action for CounterAction {
    fn kind(&self) -> &str {
        match self {
            Self::Increment => "INCREMENT",
            Self::Decrement => "DECREMENT",
            Self::Reset => "RESET",
        }
    }
}

fn render(count: i64) {
    let bar: String = "#".repeat(count.max(0) as usize);
    println!("count {count:>3} | {bar}");
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Reactive Render Example ===\n");

    let store = StoreBuilder::new()
        .initial(0i64)
        .try_reduce(|count: &i64, action: &CounterAction| match action {
            CounterAction::Increment => Ok(count + 1),
            CounterAction::Decrement => {
                if *count == 0 {
                    Err(TransitionError::new("cannot decrement below zero"))
                } else {
                    Ok(count - 1)
                }
            }
            CounterAction::Reset => Ok(0),
        })
        .build()
        .expect("store is fully configured");

    // The view: redraw on every commit.
    let _view = store.subscribe(|count: &i64| render(*count));

    // A watcher that resets the counter once it reaches five. Its dispatch
    // is re-entrant, so the store queues it behind the in-flight commit.
    let resetter = store.clone();
    let _watcher = store.subscribe(move |count: &i64| {
        if *count >= 5 {
            resetter.dispatch(CounterAction::Reset).unwrap();
        }
    });

    for _ in 0..6 {
        store.dispatch(CounterAction::Increment).unwrap();
    }

    store.dispatch(CounterAction::Reset).unwrap();
    match store.dispatch(CounterAction::Decrement) {
        Ok(()) => {}
        Err(err) => println!("rejected: {err}"),
    }

    println!("\nfinal count: {}", store.state());
    println!("\n=== Example Complete ===");
}
