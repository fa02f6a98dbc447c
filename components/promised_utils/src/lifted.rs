//! Function lifting over pending receivers and arguments.

use promise_core::{Promise, RunLoop};
use value_core::Value;

use crate::all::all;
use crate::callback::bridge;
use crate::eventual::Eventual;

/// Structured rejection payload produced when a lifted call fails.
///
/// `at` is the caller-supplied label of the lifted callee, `cause` the
/// underlying failure (an input's rejection reason, the callee's thrown
/// value, or the error reported through the completion callback), and
/// `stack` a human-readable trace line naming the label and the phase
/// that failed. The record travels as a rejection reason in its
/// [`Value::Object`] encoding.
///
/// # Examples
///
/// ```
/// use promised_utils::RejectionRecord;
/// use value_core::Value;
///
/// let record = RejectionRecord::new("sum", Value::string("boom"));
/// let reason = record.clone().into_value();
/// assert_eq!(RejectionRecord::from_value(&reason), Some(record));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RejectionRecord {
    /// Label identifying the lifted callee.
    pub at: String,
    /// The underlying failure value.
    pub cause: Value,
    /// Human-readable trace line.
    pub stack: String,
}

impl RejectionRecord {
    /// Creates a record attributing `cause` to the callee labeled `at`.
    pub fn new(at: impl Into<String>, cause: Value) -> Self {
        let at = at.into();
        let stack = format!("at {}", at);
        RejectionRecord { at, cause, stack }
    }

    fn traced(at: &str, cause: Value, site: &str) -> Self {
        RejectionRecord {
            at: at.to_string(),
            cause,
            stack: format!("at {} ({})", at, site),
        }
    }

    /// Encodes this record as an object with `at`, `cause`, and `stack`
    /// properties.
    pub fn into_value(self) -> Value {
        let record = Value::object();
        record.set_own("at", Value::string(self.at));
        record.set_own("cause", self.cause);
        record.set_own("stack", Value::string(self.stack));
        record
    }

    /// Decodes a record from its object encoding.
    ///
    /// Returns `None` when `value` is not shaped like a record.
    pub fn from_value(value: &Value) -> Option<Self> {
        let at = value.get_own("at")?.as_string()?;
        let cause = value.get_own("cause")?;
        let stack = value.get_own("stack")?.as_string()?;
        Some(RejectionRecord { at, cause, stack })
    }
}

/// A callee wrapped to accept pending receivers and arguments.
///
/// Each call aggregates the call-context and the positional arguments
/// (slot 0 of the input list is always the context), invokes the callee
/// once everything has resolved, and settles the returned promise with
/// the outcome. Every failure surfaced by the wrapper — an input
/// rejection, a synchronous throw, or an error reported through the
/// completion callback — rejects with a [`RejectionRecord`].
///
/// In the default asynchronous mode the callee receives an extra trailing
/// completion callback, and a non-`Undefined` return value fulfills the
/// result immediately: whichever of the two settles first wins, the loser
/// is a no-op. In synchronous mode the return value (even `Undefined`)
/// is the fulfillment value.
///
/// # Examples
///
/// ```
/// use promise_core::RunLoop;
/// use promised_utils::Lifted;
/// use value_core::Value;
///
/// let tasks = RunLoop::new();
/// let pending = tasks.deferred();
///
/// let double = Lifted::sync(&tasks, "double", Value::function(|_this, args| {
///     let n = args[0].as_number().unwrap_or(f64::NAN);
///     Ok(Value::number(n * 2.0))
/// }));
/// let result = double.call(vec![pending.promise().into()]);
///
/// pending.resolve(Value::number(21.0));
/// tasks.run_until_done();
/// assert_eq!(result.result(), Some(Value::number(42.0)));
/// ```
#[derive(Debug, Clone)]
pub struct Lifted {
    tasks: RunLoop,
    label: String,
    callee: Value,
    synchronous: bool,
}

impl Lifted {
    /// Wraps `callee` in asynchronous (trailing-callback) mode.
    pub fn new(tasks: &RunLoop, label: impl Into<String>, callee: Value) -> Self {
        Lifted {
            tasks: tasks.clone(),
            label: label.into(),
            callee,
            synchronous: false,
        }
    }

    /// Wraps `callee` in synchronous mode: its return value is the
    /// fulfillment value, and no completion callback is appended.
    pub fn sync(tasks: &RunLoop, label: impl Into<String>, callee: Value) -> Self {
        Lifted {
            synchronous: true,
            ..Lifted::new(tasks, label, callee)
        }
    }

    /// The label used for rejection attribution.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Calls the wrapped callee with an undefined receiver.
    pub fn call(&self, args: Vec<Eventual>) -> Promise {
        self.call_on(Value::Undefined, args)
    }

    /// Calls the wrapped callee with the given receiver.
    ///
    /// The receiver is itself an [`Eventual`]: a pending context resolves
    /// alongside the arguments, before the callee runs.
    pub fn call_on(&self, context: impl Into<Eventual>, args: Vec<Eventual>) -> Promise {
        let deferred = self.tasks.deferred();

        // Slot 0 is always the call context; slots 1.. are positional.
        let mut inputs = Vec::with_capacity(args.len() + 1);
        inputs.push(context.into());
        inputs.extend(args);

        let callee = self.callee.clone();
        let label = self.label.clone();
        let synchronous = self.synchronous;
        let settle = deferred.clone();
        let fail = deferred.clone();
        let fail_label = self.label.clone();

        all(&self.tasks, inputs).when(
            &self.tasks,
            move |mut params| {
                let receiver = if params.is_empty() {
                    Value::Undefined
                } else {
                    params.remove(0)
                };

                if !synchronous {
                    let wrap_label = label.clone();
                    params.push(bridge(settle.clone(), move |error| {
                        RejectionRecord::traced(&wrap_label, error, "completion callback")
                            .into_value()
                    }));
                }

                match callee.call(receiver, params) {
                    Ok(value) => {
                        if synchronous || !value.is_undefined() {
                            settle.resolve(value);
                        }
                    }
                    Err(thrown) => settle.reject(
                        RejectionRecord::traced(&label, thrown, "invocation").into_value(),
                    ),
                }
            },
            move |reason| {
                fail.reject(
                    RejectionRecord::traced(&fail_label, reason, "argument resolution")
                        .into_value(),
                );
            },
        );

        deferred.promise()
    }
}
