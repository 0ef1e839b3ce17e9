//! Core container types and logic.
//!
//! This module contains the pure functional core of the container:
//! - Snapshot values via the `State` trait
//! - Dispatched messages via the `Action` trait
//! - Transition rules via `Reducer`
//! - Immutable dispatch audit trail
//!
//! All logic in this module is pure (no side effects); the imperative
//! shell around it lives in the `store` module.

mod action;
mod history;
mod reducer;
mod state;

pub use action::Action;
pub use history::{DispatchHistory, DispatchRecord};
pub use reducer::{Reducer, TransitionError};
pub use state::State;
