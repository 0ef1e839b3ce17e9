//! The store: imperative shell around the pure core.
//!
//! A [`Store`] owns one state snapshot and one reducer. Dispatching an
//! action runs the reducer synchronously, commits the resulting snapshot
//! atomically, records the commit in the audit trail, and notifies every
//! registered observer in registration order before `dispatch` returns.
//!
//! The store is single-threaded by design: it is a cheap handle over
//! `Rc`-shared internals and is neither `Send` nor `Sync`. Multi-threaded
//! hosts must serialize access externally, for instance by keeping the
//! store on one owning thread.

pub mod error;

pub use error::DispatchError;

use crate::core::{Action, DispatchHistory, DispatchRecord, Reducer, State};
use chrono::Utc;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use tracing::{debug, trace};

/// Identity of a registered observer, used by its unsubscribe handle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct ObserverId(u64);

struct ObserverEntry<S> {
    id: ObserverId,
    notify: Box<dyn FnMut(&S)>,
}

/// Handle returned by [`Store::subscribe`].
///
/// Calling [`unsubscribe`](Subscription::unsubscribe) removes the observer;
/// subsequent dispatches no longer notify it. Unsubscribing twice, or after
/// the store has been dropped, is a no-op. Dropping the handle without
/// calling it leaves the observer registered for the store's lifetime.
pub struct Subscription {
    cancel: Box<dyn Fn()>,
}

impl Subscription {
    /// Remove the observer this handle was issued for.
    pub fn unsubscribe(&self) {
        (self.cancel)()
    }
}

struct Inner<S: State + 'static, A: Action + 'static> {
    state: RefCell<S>,
    reducer: Reducer<S, A>,
    observers: RefCell<Vec<ObserverEntry<S>>>,
    retired: RefCell<Vec<ObserverId>>,
    queue: RefCell<VecDeque<A>>,
    dispatching: Cell<bool>,
    notifying: Cell<bool>,
    next_observer_id: Cell<u64>,
    history: RefCell<DispatchHistory>,
}

/// Single-writer, synchronous, observer-notified state container.
///
/// Cloning a `Store` produces another handle to the same container, which
/// is how observer callbacks get access for re-entrant dispatch.
///
/// # Example
///
/// ```rust
/// use storelet::{Action, Reducer, Store};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct CartItem {
///     id: u64,
///     name: String,
/// }
///
/// #[derive(Debug)]
/// enum CartAction {
///     Add(CartItem),
///     Remove(u64),
///     Clear,
/// }
///
/// impl Action for CartAction {
///     fn kind(&self) -> &str {
///         match self {
///             Self::Add(_) => "ADD",
///             Self::Remove(_) => "REMOVE",
///             Self::Clear => "CLEAR",
///         }
///     }
/// }
///
/// let reducer = Reducer::new(|items: &Vec<CartItem>, action: &CartAction| match action {
///     CartAction::Add(item) => {
///         let mut next = items.clone();
///         next.push(item.clone());
///         next
///     }
///     CartAction::Remove(id) => items.iter().filter(|i| i.id != *id).cloned().collect(),
///     CartAction::Clear => Vec::new(),
/// });
///
/// let store = Store::new(Vec::new(), reducer);
///
/// let subscription = store.subscribe(|items: &Vec<CartItem>| {
///     println!("cart now holds {} item(s)", items.len());
/// });
///
/// store
///     .dispatch(CartAction::Add(CartItem {
///         id: 1,
///         name: "Item A".to_string(),
///     }))
///     .unwrap();
/// assert_eq!(store.state().len(), 1);
///
/// store.dispatch(CartAction::Remove(1)).unwrap();
/// assert!(store.state().is_empty());
///
/// subscription.unsubscribe();
/// ```
pub struct Store<S: State + 'static, A: Action + 'static> {
    inner: Rc<Inner<S, A>>,
}

impl<S: State + 'static, A: Action + 'static> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: State + 'static, A: Action + 'static> Store<S, A> {
    /// Create a store holding `initial` as current state and `reducer` as
    /// its transition rule.
    pub fn new(initial: S, reducer: Reducer<S, A>) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(initial),
                reducer,
                observers: RefCell::new(Vec::new()),
                retired: RefCell::new(Vec::new()),
                queue: RefCell::new(VecDeque::new()),
                dispatching: Cell::new(false),
                notifying: Cell::new(false),
                next_observer_id: Cell::new(0),
                history: RefCell::new(DispatchHistory::new()),
            }),
        }
    }

    /// The current state snapshot, by value. No side effects.
    pub fn state(&self) -> S {
        self.inner.state.borrow().clone()
    }

    /// Snapshot of the audit trail of committed dispatches.
    pub fn history(&self) -> DispatchHistory {
        self.inner.history.borrow().clone()
    }

    /// Dispatch an action for synchronous processing.
    ///
    /// Runs the reducer, commits the result atomically, records the
    /// commit, then notifies every currently registered observer with the
    /// committed value, in registration order, before returning.
    ///
    /// Dispatching from within an observer callback does not run
    /// immediately: the action is queued and drained after the in-flight
    /// dispatch commits, so observers always see states in commit order.
    /// Errors from queued actions surface from the outer `dispatch` call,
    /// and a failure discards whatever else is still queued.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::InvalidAction`] when `action.kind()` is empty.
    /// - [`DispatchError::Transition`] when the reducer fails.
    ///
    /// Either way the state is unchanged and no observers are notified
    /// for the failed dispatch.
    pub fn dispatch(&self, action: A) -> Result<(), DispatchError> {
        if action.kind().is_empty() {
            return Err(DispatchError::InvalidAction);
        }

        self.inner.queue.borrow_mut().push_back(action);
        if self.inner.dispatching.get() {
            trace!("re-entrant dispatch queued behind in-flight dispatch");
            return Ok(());
        }

        self.inner.dispatching.set(true);
        let result = self.inner.drain();
        self.inner.dispatching.set(false);
        result
    }

    /// Register an observer, returning its unsubscribe handle.
    ///
    /// The observer is invoked with the committed state after every
    /// successful dispatch, until unsubscribed. Observers registered from
    /// within a notification callback are not invoked for the in-flight
    /// dispatch.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: FnMut(&S) + 'static,
    {
        let id = ObserverId(self.inner.next_observer_id.get());
        self.inner.next_observer_id.set(id.0 + 1);
        self.inner.observers.borrow_mut().push(ObserverEntry {
            id,
            notify: Box::new(observer),
        });
        trace!(observer = id.0, "observer subscribed");

        let weak: Weak<Inner<S, A>> = Rc::downgrade(&self.inner);
        Subscription {
            cancel: Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.unsubscribe(id);
                }
            }),
        }
    }
}

impl<S: State + 'static, A: Action + 'static> Inner<S, A> {
    /// Process queued actions to completion, committing and notifying for
    /// each in order.
    fn drain(&self) -> Result<(), DispatchError> {
        loop {
            let Some(action) = self.queue.borrow_mut().pop_front() else {
                return Ok(());
            };

            let outcome = {
                let current = self.state.borrow();
                self.reducer.apply(&current, &action)
            };
            let next = match outcome {
                Ok(next) => next,
                Err(err) => {
                    // Atomic abort: keep state, drop whatever is queued.
                    self.queue.borrow_mut().clear();
                    return Err(err.into());
                }
            };

            let changed = next != *self.state.borrow();
            if changed {
                self.state.replace(next.clone());
            }

            let record = DispatchRecord {
                kind: action.kind().to_string(),
                timestamp: Utc::now(),
                changed,
            };
            let appended = self.history.borrow().record(record);
            self.history.replace(appended);
            debug!(kind = action.kind(), changed, "dispatch committed");

            self.notify(&next);
        }
    }

    /// Invoke every registered observer with the committed snapshot, in
    /// registration order.
    fn notify(&self, committed: &S) {
        self.notifying.set(true);
        // Take the list out so callbacks may subscribe without a borrow
        // conflict; anything they push is merged back afterwards.
        let mut entries = std::mem::take(&mut *self.observers.borrow_mut());
        for entry in entries.iter_mut() {
            let skipped = self.retired.borrow().contains(&entry.id);
            if skipped {
                continue;
            }
            (entry.notify)(committed);
        }
        self.notifying.set(false);

        let mut observers = self.observers.borrow_mut();
        let subscribed_during_pass = std::mem::take(&mut *observers);
        entries.extend(subscribed_during_pass);

        let retired = std::mem::take(&mut *self.retired.borrow_mut());
        if !retired.is_empty() {
            entries.retain(|entry| !retired.contains(&entry.id));
        }
        *observers = entries;
    }

    fn unsubscribe(&self, id: ObserverId) {
        if self.notifying.get() {
            // The list is checked out for the in-flight pass; defer.
            self.retired.borrow_mut().push(id);
        } else {
            self.observers.borrow_mut().retain(|entry| entry.id != id);
        }
        trace!(observer = id.0, "observer unsubscribed");
    }
}
