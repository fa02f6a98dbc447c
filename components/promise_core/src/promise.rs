//! Promise and deferred implementation.
//!
//! A [`Promise`] is a shared read handle on a value that settles exactly
//! once; the [`Deferred`] holds the corresponding settle capability. The
//! two are deliberately separate types so that handing out a promise never
//! hands out the right to settle it.
//!
//! There is no thenable chaining and no cancellation: [`Promise::when`]
//! registers a continuation pair and returns nothing.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use value_core::Value;

use crate::run_loop::RunLoop;
use crate::task_queue::MicroJob;

/// The state of a promise.
///
/// Promises transition exactly once from `Pending` to a terminal state;
/// once settled, the state never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromiseState {
    /// The initial state; neither fulfilled nor rejected.
    Pending,
    /// The promise has been resolved with a value.
    Fulfilled,
    /// The promise has been rejected with a reason.
    Rejected,
}

type SettleFn = Box<dyn FnOnce(Value)>;

/// A continuation pair registered via [`Promise::when`].
struct Reaction {
    on_fulfilled: SettleFn,
    on_rejected: SettleFn,
}

struct PromiseInner {
    state: PromiseState,
    result: Option<Value>,
    reason: Option<Value>,
    reactions: Vec<Reaction>,
    scheduler: RunLoop,
}

/// A shared read handle on an eventually settled value.
///
/// Cloning a `Promise` clones the handle; all clones observe the same
/// settlement. Continuations registered with [`when`](Promise::when) are
/// dispatched through the run loop's microtask queue, never inside the
/// settling call.
///
/// # Examples
///
/// ```
/// use promise_core::{PromiseState, RunLoop};
/// use value_core::Value;
///
/// let tasks = RunLoop::new();
/// let deferred = tasks.deferred();
/// let promise = deferred.promise();
/// assert_eq!(promise.state(), PromiseState::Pending);
///
/// deferred.resolve(Value::string("done"));
/// assert_eq!(promise.state(), PromiseState::Fulfilled);
/// assert_eq!(promise.result(), Some(Value::string("done")));
/// ```
#[derive(Clone)]
pub struct Promise {
    inner: Rc<RefCell<PromiseInner>>,
}

impl Promise {
    fn pending(scheduler: &RunLoop) -> Self {
        Promise {
            inner: Rc::new(RefCell::new(PromiseInner {
                state: PromiseState::Pending,
                result: None,
                reason: None,
                reactions: Vec::new(),
                scheduler: scheduler.clone(),
            })),
        }
    }

    /// The current state of the promise.
    pub fn state(&self) -> PromiseState {
        self.inner.borrow().state
    }

    /// The fulfillment value, if fulfilled.
    pub fn result(&self) -> Option<Value> {
        self.inner.borrow().result.clone()
    }

    /// The rejection reason, if rejected.
    pub fn reason(&self) -> Option<Value> {
        self.inner.borrow().reason.clone()
    }

    /// The run loop this promise schedules its continuations on.
    pub fn scheduler(&self) -> RunLoop {
        self.inner.borrow().scheduler.clone()
    }

    /// Registers a continuation pair for this promise's settlement.
    ///
    /// Exactly one of the two handlers eventually runs, as a microtask. If
    /// the promise is already settled the matching handler is scheduled
    /// immediately; it still does not run inside this call.
    pub fn when<F, G>(&self, on_fulfilled: F, on_rejected: G)
    where
        F: FnOnce(Value) + 'static,
        G: FnOnce(Value) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        match inner.state {
            PromiseState::Pending => {
                inner.reactions.push(Reaction {
                    on_fulfilled: Box::new(on_fulfilled),
                    on_rejected: Box::new(on_rejected),
                });
            }
            PromiseState::Fulfilled => {
                let value = inner.result.clone().unwrap_or(Value::Undefined);
                inner
                    .scheduler
                    .enqueue_microtask(MicroJob::new(move || on_fulfilled(value)));
            }
            PromiseState::Rejected => {
                let reason = inner.reason.clone().unwrap_or(Value::Undefined);
                inner
                    .scheduler
                    .enqueue_microtask(MicroJob::new(move || on_rejected(reason)));
            }
        }
    }

    fn settle(&self, state: PromiseState, value: Value) {
        let fulfilled = state == PromiseState::Fulfilled;
        let (scheduler, reactions) = {
            let mut inner = self.inner.borrow_mut();
            if inner.state != PromiseState::Pending {
                return;
            }
            inner.state = state;
            if fulfilled {
                inner.result = Some(value.clone());
            } else {
                inner.reason = Some(value.clone());
            }
            (inner.scheduler.clone(), std::mem::take(&mut inner.reactions))
        };

        for reaction in reactions {
            let value = value.clone();
            let handler = if fulfilled {
                reaction.on_fulfilled
            } else {
                reaction.on_rejected
            };
            scheduler.enqueue_microtask(MicroJob::new(move || handler(value)));
        }
    }
}

impl fmt::Debug for Promise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Promise")
            .field("state", &inner.state)
            .field("reactions", &inner.reactions.len())
            .finish()
    }
}

/// The settle capability for one promise.
///
/// `resolve` and `reject` transition the promise at most once; calls after
/// settlement are no-ops.
#[derive(Debug, Clone)]
pub struct Deferred {
    promise: Promise,
}

impl Deferred {
    pub(crate) fn new(scheduler: &RunLoop) -> Self {
        Deferred {
            promise: Promise::pending(scheduler),
        }
    }

    /// The promise settled by this deferred.
    pub fn promise(&self) -> Promise {
        self.promise.clone()
    }

    /// Fulfills the promise with `value`. No-op if already settled.
    pub fn resolve(&self, value: Value) {
        self.promise.settle(PromiseState::Fulfilled, value);
    }

    /// Rejects the promise with `reason`. No-op if already settled.
    pub fn reject(&self, reason: Value) {
        self.promise.settle(PromiseState::Rejected, reason);
    }
}
