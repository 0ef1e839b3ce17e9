//! Reducers: pure transition functions mapping (state, action) to state.
//!
//! A reducer is supplied once at store construction and encapsulates the
//! whole transition rule as a pure function. Reducers must not mutate the
//! previous snapshot; they return a new value (structural sharing is fine).

use super::action::Action;
use super::state::State;
use thiserror::Error;

/// Error raised by a fallible reducer.
///
/// Propagated verbatim to the dispatch caller; the store's state is left
/// unchanged and no observers are notified for the failed dispatch.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("transition failed: {0}")]
pub struct TransitionError(String);

impl TransitionError {
    /// Create a transition error with a descriptive message.
    pub fn new(message: impl Into<String>) -> Self {
        TransitionError(message.into())
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Pure transition rule mapping `(previous state, action)` to the next state.
///
/// The wrapped function must be deterministic with no side effects and no
/// dependency on anything but its two arguments. A reducer that does not
/// recognize an action's kind must return the input state unchanged; an
/// unrecognized kind is never an error.
///
/// # Example
///
/// ```rust
/// use storelet::core::{Action, Reducer};
///
/// #[derive(Debug)]
/// enum CounterAction {
///     Increment,
///     Reset,
/// }
///
/// impl Action for CounterAction {
///     fn kind(&self) -> &str {
///         match self {
///             Self::Increment => "INCREMENT",
///             Self::Reset => "RESET",
///         }
///     }
/// }
///
/// let reducer = Reducer::new(|count: &i64, action: &CounterAction| match action {
///     CounterAction::Increment => count + 1,
///     CounterAction::Reset => 0,
/// });
///
/// assert_eq!(reducer.apply(&41, &CounterAction::Increment).unwrap(), 42);
/// assert_eq!(reducer.apply(&42, &CounterAction::Reset).unwrap(), 0);
/// ```
pub struct Reducer<S: State, A: Action> {
    apply: Box<dyn Fn(&S, &A) -> Result<S, TransitionError>>,
}

impl<S: State, A: Action> Reducer<S, A> {
    /// Wrap an infallible pure transition function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&S, &A) -> S + 'static,
    {
        Reducer {
            apply: Box::new(move |state, action| Ok(f(state, action))),
        }
    }

    /// Wrap a fallible pure transition function.
    ///
    /// A returned `TransitionError` aborts the dispatch atomically: the
    /// store keeps its previous state and notifies nobody.
    ///
    /// # Example
    ///
    /// ```rust
    /// use storelet::core::{Action, Reducer, TransitionError};
    ///
    /// #[derive(Debug)]
    /// struct Withdraw(i64);
    ///
    /// impl Action for Withdraw {
    ///     fn kind(&self) -> &str {
    ///         "WITHDRAW"
    ///     }
    /// }
    ///
    /// let reducer = Reducer::fallible(|balance: &i64, action: &Withdraw| {
    ///     if action.0 > *balance {
    ///         Err(TransitionError::new("insufficient funds"))
    ///     } else {
    ///         Ok(balance - action.0)
    ///     }
    /// });
    ///
    /// assert_eq!(reducer.apply(&100, &Withdraw(30)).unwrap(), 70);
    /// assert!(reducer.apply(&100, &Withdraw(200)).is_err());
    /// ```
    pub fn fallible<F>(f: F) -> Self
    where
        F: Fn(&S, &A) -> Result<S, TransitionError> + 'static,
    {
        Reducer { apply: Box::new(f) }
    }

    /// Apply the transition rule to a snapshot and an action.
    ///
    /// Pure: evaluates the wrapped function without touching anything else.
    pub fn apply(&self, state: &S, action: &A) -> Result<S, TransitionError> {
        (self.apply)(state, action)
    }
}
