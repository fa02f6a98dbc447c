//! Completion callback bridge.

use promise_core::Deferred;
use value_core::Value;

/// Builds a completion callback that settles `deferred`.
///
/// The returned function value takes `(error, value)`: a truthy `error`
/// rejects the deferred with it, a falsy `error` resolves the deferred
/// with `value`. Missing arguments read as `Undefined`. Because a promise
/// settles at most once, second and later calls have no observable
/// effect. The callback itself always returns `Undefined`.
///
/// # Examples
///
/// ```
/// use promise_core::RunLoop;
/// use promised_utils::callback;
/// use value_core::Value;
///
/// let tasks = RunLoop::new();
/// let deferred = tasks.deferred();
/// let done = callback(&deferred);
///
/// done.call(Value::Undefined, vec![Value::Null, Value::number(5.0)]).unwrap();
/// assert_eq!(deferred.promise().result(), Some(Value::number(5.0)));
/// ```
pub fn callback(deferred: &Deferred) -> Value {
    bridge(deferred.clone(), |error| error)
}

/// The shared bridge body: one implementation, parameterized over how the
/// error channel is wrapped before rejection.
pub(crate) fn bridge<W>(deferred: Deferred, wrap_error: W) -> Value
where
    W: Fn(Value) -> Value + 'static,
{
    Value::function(move |_receiver, args| {
        let mut args = args.into_iter();
        let error = args.next().unwrap_or(Value::Undefined);
        let value = args.next().unwrap_or(Value::Undefined);
        if error.is_truthy() {
            deferred.reject(wrap_error(error));
        } else {
            deferred.resolve(value);
        }
        Ok(Value::Undefined)
    })
}
