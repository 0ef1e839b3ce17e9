//! Action trait for dispatched messages.
//!
//! An action is a discrete message describing a requested state change.
//! It carries a `kind` discriminant that selects the transition and an
//! arbitrary payload owned by the implementing type. The container reads
//! only the discriminant; payload shape is entirely the caller's business.

use std::fmt::Debug;

/// Trait for messages dispatched to a store.
///
/// The `kind` discriminant identifies which transition the reducer should
/// apply. An empty string models a missing discriminant and is rejected by
/// `dispatch` before the reducer runs.
///
/// # Example
///
/// ```rust
/// use storelet::core::Action;
///
/// #[derive(Debug)]
/// enum CounterAction {
///     Increment,
///     Add(i64),
/// }
///
/// impl Action for CounterAction {
///     fn kind(&self) -> &str {
///         match self {
///             Self::Increment => "INCREMENT",
///             Self::Add(_) => "ADD",
///         }
///     }
/// }
///
/// assert_eq!(CounterAction::Add(3).kind(), "ADD");
/// ```
pub trait Action: Debug {
    /// Get the action's discriminant for transition selection and logging.
    ///
    /// Must return the same value for the same action; an empty string is
    /// treated as a missing discriminant.
    fn kind(&self) -> &str;
}
