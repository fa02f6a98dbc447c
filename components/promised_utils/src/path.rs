//! Deferred property access over dot-separated paths.

use promise_core::{Deferred, Promise, RunLoop};
use value_core::{ops, ScriptError, Value, ValueResult};

use crate::all::all;
use crate::eventual::Eventual;

/// A pending structured value with deferred path operations.
///
/// A `PathProxy` wraps a promise of a structured value and lets callers
/// navigate into it before it resolves: [`get`](PathProxy::get) reads,
/// [`set`](PathProxy::set) assigns, and [`invoke`](PathProxy::invoke)
/// calls a method, each addressed by a dot-separated path whose segments
/// are traversed with [`ops::get`] once everything involved has resolved.
/// `get` and `invoke` return further proxies, so operations chain.
///
/// Each proxy is its own capability object; rejections of the base value,
/// the path, or any argument propagate to the produced promise without
/// additional wrapping.
///
/// # Examples
///
/// ```
/// use promise_core::RunLoop;
/// use promised_utils::PathProxy;
/// use value_core::Value;
///
/// let tasks = RunLoop::new();
/// let inner = Value::object();
/// inner.set_own("b", Value::number(7.0));
/// let outer = Value::object();
/// outer.set_own("a", inner);
///
/// let proxy = PathProxy::new(&tasks, outer);
/// let leaf = proxy.get("a.b");
/// tasks.run_until_done();
/// assert_eq!(leaf.promise().result(), Some(Value::number(7.0)));
/// ```
#[derive(Debug, Clone)]
pub struct PathProxy {
    tasks: RunLoop,
    value: Promise,
}

impl PathProxy {
    /// Wraps a base value; immediate values are wrapped in an already
    /// fulfilled promise.
    pub fn new(tasks: &RunLoop, value: impl Into<Eventual>) -> Self {
        let value = match value.into() {
            Eventual::Pending(promise) => promise,
            Eventual::Ready(value) => tasks.fulfilled(value),
        };
        PathProxy {
            tasks: tasks.clone(),
            value,
        }
    }

    /// The promise of the wrapped value.
    pub fn promise(&self) -> Promise {
        self.value.clone()
    }

    /// Reads the value at `path`.
    ///
    /// Every segment is traversed with [`ops::get`]; a missing segment
    /// rejects the produced proxy with the lookup's error.
    pub fn get(&self, path: impl Into<Eventual>) -> PathProxy {
        let deferred = self.tasks.deferred();
        let settle = deferred.clone();
        let fail = deferred.clone();

        all(&self.tasks, vec![self.value.clone().into(), path.into()]).when(
            &self.tasks,
            move |params| {
                let mut params = params.into_iter();
                let target = params.next().unwrap_or(Value::Undefined);
                let path = params.next().unwrap_or(Value::Undefined);
                settle_with(&settle, read_path(&target, &path));
            },
            move |reason| fail.reject(reason),
        );

        self.chain(deferred.promise())
    }

    /// Assigns `value` at `path`.
    ///
    /// Traverses to the parent of the final segment and assigns through
    /// [`ops::put`]; the returned promise settles with the assignment's
    /// result (the assigned value), not a proxy.
    pub fn set(&self, path: impl Into<Eventual>, value: impl Into<Eventual>) -> Promise {
        let deferred = self.tasks.deferred();
        let settle = deferred.clone();
        let fail = deferred.clone();

        all(
            &self.tasks,
            vec![self.value.clone().into(), path.into(), value.into()],
        )
        .when(
            &self.tasks,
            move |params| {
                let mut params = params.into_iter();
                let target = params.next().unwrap_or(Value::Undefined);
                let path = params.next().unwrap_or(Value::Undefined);
                let value = params.next().unwrap_or(Value::Undefined);
                settle_with(&settle, write_path(&target, &path, value));
            },
            move |reason| fail.reject(reason),
        );

        deferred.promise()
    }

    /// Invokes the method at `path`.
    ///
    /// Traverses to the parent of the final segment (the receiver) and
    /// dispatches through [`ops::post`]. When `args` is `None` the method
    /// is invoked with no arguments and no argument aggregation happens;
    /// otherwise each argument may itself be pending and resolves before
    /// dispatch. Returns a proxy over the invocation's result.
    pub fn invoke(&self, path: impl Into<Eventual>, args: Option<Vec<Eventual>>) -> PathProxy {
        let deferred = self.tasks.deferred();
        let settle = deferred.clone();
        let fail = deferred.clone();

        let mut inputs = vec![self.value.clone().into(), path.into()];
        let has_args = args.is_some();
        inputs.extend(args.unwrap_or_default());

        all(&self.tasks, inputs).when(
            &self.tasks,
            move |params| {
                let mut params = params.into_iter();
                let target = params.next().unwrap_or(Value::Undefined);
                let path = params.next().unwrap_or(Value::Undefined);
                let call_args: Vec<Value> = if has_args { params.collect() } else { Vec::new() };
                settle_with(&settle, call_path(&target, &path, call_args));
            },
            move |reason| fail.reject(reason),
        );

        self.chain(deferred.promise())
    }

    fn chain(&self, value: Promise) -> PathProxy {
        PathProxy {
            tasks: self.tasks.clone(),
            value,
        }
    }
}

fn settle_with(deferred: &Deferred, result: ValueResult) {
    match result {
        Ok(value) => deferred.resolve(value),
        Err(reason) => deferred.reject(reason),
    }
}

/// Splits a resolved path into its segments. Non-string paths throw.
fn segments_of(path: &Value) -> Result<Vec<String>, Value> {
    match path.as_string() {
        Some(s) => Ok(s.split('.').map(str::to_string).collect()),
        None => {
            ScriptError::type_error(format!("path must be a string, got {}", path.type_of()))
                .throw()
        }
    }
}

fn walk(target: &Value, segments: &[String]) -> ValueResult {
    let mut current = target.clone();
    for segment in segments {
        current = ops::get(&current, segment)?;
    }
    Ok(current)
}

fn read_path(target: &Value, path: &Value) -> ValueResult {
    let segments = segments_of(path)?;
    walk(target, &segments)
}

fn write_path(target: &Value, path: &Value, value: Value) -> ValueResult {
    let mut segments = segments_of(path)?;
    // Splitting always yields at least one segment.
    let name = segments.pop().unwrap_or_default();
    let parent = walk(target, &segments)?;
    ops::put(&parent, &name, value)
}

fn call_path(target: &Value, path: &Value, args: Vec<Value>) -> ValueResult {
    let mut segments = segments_of(path)?;
    let name = segments.pop().unwrap_or_default();
    let receiver = walk(target, &segments)?;
    ops::post(&receiver, &name, args)
}
