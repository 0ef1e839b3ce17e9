//! Dispatch errors surfaced by the store.

use crate::core::TransitionError;
use thiserror::Error;

/// Errors that can occur when dispatching an action.
///
/// Either way the store's state is left exactly as it was and no
/// observers are notified for the failed dispatch.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The action's kind discriminant was empty
    #[error("action is missing its kind discriminant")]
    InvalidAction,

    /// The reducer rejected the transition
    #[error(transparent)]
    Transition(#[from] TransitionError),
}
