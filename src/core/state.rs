//! Core State trait for container snapshots.
//!
//! A state is an application-defined, immutable snapshot value. The
//! container never mutates a snapshot in place; every transition produces
//! a new value and the previous one stays intact.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state snapshot values.
///
/// This trait is blanket-implemented: any value type satisfying the bounds
/// is a valid state, including plain collections like `Vec<T>`.
///
/// # Required Traits
///
/// - `Clone`: snapshots are handed out by value and recorded in history
/// - `PartialEq`: the commit step compares snapshots structurally
/// - `Debug`: snapshots must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: snapshots must be serializable for
///   diagnostic export
///
/// # Example
///
/// ```rust
/// use storelet::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct CartItem {
///     id: u64,
///     name: String,
/// }
///
/// fn assert_state<S: State>() {}
///
/// // Both the item type and a sequence of items qualify as states.
/// assert_state::<CartItem>();
/// assert_state::<Vec<CartItem>>();
/// ```
pub trait State: Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> {}

impl<T> State for T where T: Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct TestItem {
        id: u64,
        name: String,
    }

    fn assert_state<S: State>() {}

    #[test]
    fn value_types_are_states() {
        assert_state::<TestItem>();
        assert_state::<Vec<TestItem>>();
        assert_state::<u32>();
        assert_state::<String>();
    }

    #[test]
    fn state_is_cloneable_and_comparable() {
        let item = TestItem {
            id: 1,
            name: "Item A".to_string(),
        };
        let cloned = item.clone();
        assert_eq!(item, cloned);

        let other = TestItem {
            id: 2,
            name: "Item B".to_string(),
        };
        assert_ne!(item, other);
    }

    #[test]
    fn state_serializes_correctly() {
        let state = vec![TestItem {
            id: 1,
            name: "Item A".to_string(),
        }];
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: Vec<TestItem> = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
