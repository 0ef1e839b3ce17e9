//! Builder API for ergonomic store construction.
//!
//! [`Store::new`](crate::store::Store::new) covers the common case; the
//! builder exists for callers assembling a store from configuration, where
//! a missing piece must surface as an error instead of a type mismatch.

pub mod error;

pub use error::BuildError;

use crate::core::{Action, Reducer, State, TransitionError};
use crate::store::Store;

/// Builder for constructing stores with a fluent API.
///
/// # Example
///
/// ```rust
/// use storelet::{Action, StoreBuilder};
///
/// #[derive(Debug)]
/// struct Tick;
///
/// impl Action for Tick {
///     fn kind(&self) -> &str {
///         "TICK"
///     }
/// }
///
/// let store = StoreBuilder::new()
///     .initial(0u64)
///     .reduce(|count: &u64, _: &Tick| count + 1)
///     .build()
///     .unwrap();
///
/// store.dispatch(Tick).unwrap();
/// assert_eq!(store.state(), 1);
/// ```
pub struct StoreBuilder<S: State + 'static, A: Action + 'static> {
    initial: Option<S>,
    reducer: Option<Reducer<S, A>>,
}

impl<S: State + 'static, A: Action + 'static> StoreBuilder<S, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            reducer: None,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the transition rule (required).
    pub fn reducer(mut self, reducer: Reducer<S, A>) -> Self {
        self.reducer = Some(reducer);
        self
    }

    /// Set the transition rule from an infallible pure function.
    pub fn reduce<F>(self, f: F) -> Self
    where
        F: Fn(&S, &A) -> S + 'static,
    {
        self.reducer(Reducer::new(f))
    }

    /// Set the transition rule from a fallible pure function.
    pub fn try_reduce<F>(self, f: F) -> Self
    where
        F: Fn(&S, &A) -> Result<S, TransitionError> + 'static,
    {
        self.reducer(Reducer::fallible(f))
    }

    /// Build the store.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Store<S, A>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let reducer = self.reducer.ok_or(BuildError::MissingReducer)?;
        Ok(Store::new(initial, reducer))
    }
}

impl<S: State + 'static, A: Action + 'static> Default for StoreBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
