//! Build errors for store construction.

use thiserror::Error;

/// Errors that can occur when building a store.
///
/// These are configuration errors: fatal at construction, not recoverable.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Reducer not specified. Call .reducer(reducer) or .reduce(f) before .build()")]
    MissingReducer,
}
