//! The immediate-or-pending input sum type.

use promise_core::{MicroJob, Promise, RunLoop};
use value_core::Value;

/// An input that is either an immediate value or a pending one.
///
/// Combinators accept `Eventual` wherever the caller may supply either,
/// and resolve both through the same [`when`](Eventual::when) operation
/// instead of a runtime is-promise test. Immediate inputs are still
/// observed asynchronously: their continuation is dispatched as a
/// microtask, so callers see one consistent ordering model.
///
/// # Examples
///
/// ```
/// use promise_core::RunLoop;
/// use promised_utils::Eventual;
/// use value_core::Value;
///
/// let tasks = RunLoop::new();
/// let ready: Eventual = Value::number(1.0).into();
/// let pending: Eventual = tasks.deferred().promise().into();
/// assert!(matches!(ready, Eventual::Ready(_)));
/// assert!(matches!(pending, Eventual::Pending(_)));
/// ```
#[derive(Debug, Clone)]
pub enum Eventual {
    /// A value that is available now.
    Ready(Value),
    /// A value that will be available once the promise settles.
    Pending(Promise),
}

impl Eventual {
    /// Registers a continuation pair for this input's resolution.
    ///
    /// Pending inputs delegate to the promise; ready inputs schedule
    /// `on_fulfilled` on `tasks` immediately. Either way the handler runs
    /// from the microtask queue, never inside this call.
    pub fn when<F, G>(self, tasks: &RunLoop, on_fulfilled: F, on_rejected: G)
    where
        F: FnOnce(Value) + 'static,
        G: FnOnce(Value) + 'static,
    {
        match self {
            Eventual::Ready(value) => {
                let _ = on_rejected;
                tasks.enqueue_microtask(MicroJob::new(move || on_fulfilled(value)));
            }
            Eventual::Pending(promise) => promise.when(on_fulfilled, on_rejected),
        }
    }
}

impl From<Value> for Eventual {
    fn from(value: Value) -> Self {
        Eventual::Ready(value)
    }
}

impl From<Promise> for Eventual {
    fn from(promise: Promise) -> Self {
        Eventual::Pending(promise)
    }
}

impl From<&str> for Eventual {
    fn from(s: &str) -> Self {
        Eventual::Ready(Value::string(s))
    }
}

impl From<f64> for Eventual {
    fn from(n: f64) -> Self {
        Eventual::Ready(Value::number(n))
    }
}
