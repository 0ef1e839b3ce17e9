//! Shopping Cart
//!
//! This example demonstrates the classic reducer-driven cart: a store
//! holding a sequence of items, driven by ADD / REMOVE / CLEAR actions.
//!
//! Key concepts:
//! - One pure reducer supplied at construction
//! - Atomic commits with structural comparison
//! - Synchronous observer notification after every commit
//!
//! Run with: cargo run --example shopping_cart

use serde::{Deserialize, Serialize};
use storelet::{Action, Reducer, Store};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
struct CartItem {
    id: u64,
    name: String,
}

#[derive(Debug)]
enum CartAction {
    Add(CartItem),
    Remove(u64),
    Clear,
}

impl Action for CartAction {
    fn kind(&self) -> &str {
        match self {
            Self::Add(_) => "ADD",
            Self::Remove(_) => "REMOVE",
            Self::Clear => "CLEAR",
        }
    }
}

fn cart_reducer() -> Reducer<Vec<CartItem>, CartAction> {
    Reducer::new(|items: &Vec<CartItem>, action: &CartAction| match action {
        CartAction::Add(item) => {
            let mut next = items.clone();
            next.push(item.clone());
            next
        }
        CartAction::Remove(id) => match items.iter().position(|i| i.id == *id) {
            Some(index) => {
                let mut next = items.clone();
                next.remove(index);
                next
            }
            None => items.clone(),
        },
        CartAction::Clear => Vec::new(),
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Shopping Cart Example ===\n");

    let store = Store::new(Vec::new(), cart_reducer());

    let subscription = store.subscribe(|items: &Vec<CartItem>| {
        println!("cart changed: {} item(s)", items.len());
        for item in items {
            println!("  - #{} {}", item.id, item.name);
        }
    });

    store
        .dispatch(CartAction::Add(CartItem {
            id: 1,
            name: "Item A".to_string(),
        }))
        .unwrap();
    store
        .dispatch(CartAction::Add(CartItem {
            id: 2,
            name: "Item B".to_string(),
        }))
        .unwrap();

    store.dispatch(CartAction::Remove(1)).unwrap();
    store.dispatch(CartAction::Clear).unwrap();

    subscription.unsubscribe();

    println!("\nfinal state: {:?}", store.state());
    println!(
        "audit trail: {}",
        store.history().to_json().expect("history serializes")
    );

    println!("\n=== Example Complete ===");
}
