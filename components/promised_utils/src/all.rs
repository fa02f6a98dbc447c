//! Aggregation of ordered input sequences.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use promise_core::{MicroJob, Promise, RunLoop};
use value_core::Value;

use crate::eventual::Eventual;

/// The result of [`all`].
///
/// An empty input sequence aggregates synchronously to an empty value
/// sequence with no pending-value wrapper; any other input produces a
/// promise. Callers must branch on the variant — the asymmetry is part of
/// the contract and is kept visible in the type system rather than hidden
/// behind a uniform return type.
#[derive(Debug, Clone)]
pub enum Aggregated {
    /// The inputs were empty; the result is available now.
    Ready(Vec<Value>),
    /// The result settles once every input does.
    Eventually(Promise),
}

impl Aggregated {
    /// Registers a continuation pair for the aggregate's resolution.
    ///
    /// The fulfillment handler receives the resolved values in input
    /// order. A `Ready` aggregate schedules it as a microtask; an
    /// `Eventually` aggregate delegates to its promise.
    pub fn when<F, G>(self, tasks: &RunLoop, on_fulfilled: F, on_rejected: G)
    where
        F: FnOnce(Vec<Value>) + 'static,
        G: FnOnce(Value) + 'static,
    {
        match self {
            Aggregated::Ready(values) => {
                let _ = on_rejected;
                tasks.enqueue_microtask(MicroJob::new(move || on_fulfilled(values)));
            }
            Aggregated::Eventually(promise) => promise.when(
                move |value| on_fulfilled(elements_of(value)),
                on_rejected,
            ),
        }
    }
}

fn elements_of(value: Value) -> Vec<Value> {
    match value {
        Value::Array(arr) => arr.borrow().elements.clone(),
        other => vec![other],
    }
}

/// Aggregates an ordered sequence of inputs into one pending sequence.
///
/// Slot *i* of the result holds the resolved value of input *i*,
/// regardless of the real-time order in which inputs settle. The
/// aggregate fulfills (with a [`Value::Array`]) once every input
/// fulfills, and rejects with the reason of the first input to reject;
/// settlements arriving after that are ignored. Exactly one continuation
/// is registered per input.
///
/// An empty sequence returns [`Aggregated::Ready`] with an empty vector,
/// synchronously.
///
/// # Examples
///
/// ```
/// use promise_core::RunLoop;
/// use promised_utils::{all, Aggregated};
/// use value_core::Value;
///
/// let tasks = RunLoop::new();
/// let first = tasks.deferred();
/// let aggregate = all(&tasks, vec![
///     first.promise().into(),
///     Value::number(2.0).into(),
/// ]);
///
/// let promise = match aggregate {
///     Aggregated::Eventually(promise) => promise,
///     Aggregated::Ready(_) => unreachable!("inputs are not empty"),
/// };
///
/// first.resolve(Value::number(1.0));
/// tasks.run_until_done();
/// assert_eq!(
///     promise.result(),
///     Some(Value::array_from(vec![Value::number(1.0), Value::number(2.0)]))
/// );
/// ```
pub fn all(tasks: &RunLoop, inputs: Vec<Eventual>) -> Aggregated {
    if inputs.is_empty() {
        return Aggregated::Ready(Vec::new());
    }

    let deferred = tasks.deferred();
    let remaining = Rc::new(Cell::new(inputs.len()));
    let slots = Rc::new(RefCell::new(vec![Value::Undefined; inputs.len()]));

    for (index, input) in inputs.into_iter().enumerate() {
        let resolve = deferred.clone();
        let reject = deferred.clone();
        let remaining = Rc::clone(&remaining);
        let slots = Rc::clone(&slots);

        input.when(
            tasks,
            move |value| {
                slots.borrow_mut()[index] = value;
                remaining.set(remaining.get() - 1);
                if remaining.get() == 0 {
                    let values = std::mem::take(&mut *slots.borrow_mut());
                    resolve.resolve(Value::array_from(values));
                }
            },
            move |reason| reject.reject(reason),
        );
    }

    Aggregated::Eventually(deferred.promise())
}
