//! Property-based tests for the store and its core types.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated action sequences.

use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use storelet::{Action, DispatchHistory, Reducer, Store};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
struct CartItem {
    id: u64,
    name: String,
}

#[derive(Clone, Debug)]
enum CartAction {
    Add(CartItem),
    Remove(u64),
    Clear,
    Mystery,
}

impl Action for CartAction {
    fn kind(&self) -> &str {
        match self {
            Self::Add(_) => "ADD",
            Self::Remove(_) => "REMOVE",
            Self::Clear => "CLEAR",
            Self::Mystery => "MYSTERY",
        }
    }
}

fn cart_store() -> Store<Vec<CartItem>, CartAction> {
    let reducer = Reducer::new(|items: &Vec<CartItem>, action: &CartAction| match action {
        CartAction::Add(it) => {
            let mut next = items.clone();
            next.push(it.clone());
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
        CartAction::Mystery => items.clone(),
    });
    Store::new(Vec::new(), reducer)
}

prop_compose! {
    fn arbitrary_item()(id in 0..50u64, name in "[a-z]{1,8}") -> CartItem {
        CartItem { id, name }
    }
}

fn arbitrary_action() -> impl Strategy<Value = CartAction> {
    prop_oneof![
        arbitrary_item().prop_map(CartAction::Add),
        (0..50u64).prop_map(CartAction::Remove),
        Just(CartAction::Clear),
        Just(CartAction::Mystery),
    ]
}

proptest! {
    #[test]
    fn add_count_equals_state_length(items in prop::collection::vec(arbitrary_item(), 0..20)) {
        let store = cart_store();

        for item in &items {
            store.dispatch(CartAction::Add(item.clone())).unwrap();
        }

        prop_assert_eq!(store.state().len(), items.len());
    }

    #[test]
    fn remove_of_absent_id_is_identity(
        items in prop::collection::vec(arbitrary_item(), 0..10),
        absent in 100..200u64,
    ) {
        let store = cart_store();
        for item in &items {
            store.dispatch(CartAction::Add(item.clone())).unwrap();
        }
        let before = store.state();

        store.dispatch(CartAction::Remove(absent)).unwrap();
        prop_assert_eq!(store.state(), before);
    }

    #[test]
    fn clear_always_yields_empty_state(actions in prop::collection::vec(arbitrary_action(), 0..20)) {
        let store = cart_store();
        for action in actions {
            store.dispatch(action).unwrap();
        }

        store.dispatch(CartAction::Clear).unwrap();
        prop_assert!(store.state().is_empty());
    }

    #[test]
    fn unrecognized_kind_is_idempotent(actions in prop::collection::vec(arbitrary_action(), 0..20)) {
        let store = cart_store();
        for action in actions {
            store.dispatch(action).unwrap();
        }
        let before = store.state();

        store.dispatch(CartAction::Mystery).unwrap();
        prop_assert_eq!(store.state(), before);
    }

    #[test]
    fn every_dispatch_notifies_each_observer_once_in_order(
        actions in prop::collection::vec(arbitrary_action(), 1..15),
    ) {
        let store = cart_store();
        let order = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&order);
        let _o1 = store.subscribe(move |_: &Vec<CartItem>| first.borrow_mut().push("O1"));
        let second = Rc::clone(&order);
        let _o2 = store.subscribe(move |_: &Vec<CartItem>| second.borrow_mut().push("O2"));

        for action in &actions {
            store.dispatch(action.clone()).unwrap();
        }

        let calls = order.borrow();
        prop_assert_eq!(calls.len(), actions.len() * 2);
        for pair in calls.chunks(2) {
            prop_assert_eq!(pair, &["O1", "O2"][..]);
        }
    }

    #[test]
    fn history_length_equals_committed_dispatch_count(
        actions in prop::collection::vec(arbitrary_action(), 0..20),
    ) {
        let store = cart_store();
        for action in &actions {
            store.dispatch(action.clone()).unwrap();
        }

        let history = store.history();
        prop_assert_eq!(history.len(), actions.len());

        let kinds: Vec<&str> = actions.iter().map(|a| a.kind()).collect();
        prop_assert_eq!(history.kinds(), kinds);
    }

    #[test]
    fn reducer_commits_are_replayable(actions in prop::collection::vec(arbitrary_action(), 0..20)) {
        // Two stores fed the same action sequence end in the same state.
        let left = cart_store();
        let right = cart_store();

        for action in &actions {
            left.dispatch(action.clone()).unwrap();
            right.dispatch(action.clone()).unwrap();
        }

        prop_assert_eq!(left.state(), right.state());
    }

    #[test]
    fn history_roundtrip_serialization(
        actions in prop::collection::vec(arbitrary_action(), 0..10),
    ) {
        let store = cart_store();
        for action in actions {
            store.dispatch(action).unwrap();
        }

        let json = store.history().to_json().unwrap();
        let deserialized: DispatchHistory = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(store.history(), deserialized);
    }
}
