//! Storelet: a reducer-driven state container
//!
//! Storelet follows the "pure core, imperative shell" philosophy. The
//! transition logic is a pure function supplied once at construction,
//! while the [`Store`] shell owns the current snapshot, serializes
//! dispatches, and notifies observers synchronously after every commit.
//!
//! # Core Concepts
//!
//! - **State**: immutable snapshot values via the [`State`] trait
//! - **Action**: tagged messages via the [`Action`] trait
//! - **Reducer**: the pure transition rule `(state, action) -> state`
//! - **Observer**: callbacks notified with the committed state, in
//!   registration order
//!
//! # Example
//!
//! ```rust
//! use storelet::{Action, Reducer, Store};
//!
//! #[derive(Debug)]
//! enum CounterAction {
//!     Increment,
//!     Reset,
//! }
//!
//! impl Action for CounterAction {
//!     fn kind(&self) -> &str {
//!         match self {
//!             Self::Increment => "INCREMENT",
//!             Self::Reset => "RESET",
//!         }
//!     }
//! }
//!
//! let reducer = Reducer::new(|count: &i64, action: &CounterAction| match action {
//!     CounterAction::Increment => count + 1,
//!     CounterAction::Reset => 0,
//! });
//!
//! let store = Store::new(0, reducer);
//! let subscription = store.subscribe(|count: &i64| println!("count is now {count}"));
//!
//! store.dispatch(CounterAction::Increment).unwrap();
//! store.dispatch(CounterAction::Increment).unwrap();
//! assert_eq!(store.state(), 2);
//!
//! store.dispatch(CounterAction::Reset).unwrap();
//! assert_eq!(store.state(), 0);
//!
//! subscription.unsubscribe();
//! ```

pub mod builder;
pub mod core;
pub mod store;

// Re-export commonly used types
pub use builder::{BuildError, StoreBuilder};
pub use core::{Action, DispatchHistory, DispatchRecord, Reducer, State, TransitionError};
pub use store::{DispatchError, Store, Subscription};
