//! Property lookup, assignment, and method dispatch.
//!
//! These operations are the traversal contract consumed by deferred path
//! access: lookup of a missing property is a failure, not `undefined`, so
//! a broken path segment surfaces as a rejection instead of propagating
//! `undefined` values silently.

use crate::{ScriptError, Value, ValueResult};

/// Get the value of a property on a value.
///
/// Objects yield their own properties; arrays additionally understand
/// `"length"` and numeric indices. A property that does not exist is a
/// ReferenceError, and a target that cannot hold properties is a
/// TypeError.
///
/// # Examples
///
/// ```
/// use value_core::{ops, Value};
///
/// let obj = Value::object();
/// obj.set_own("a", Value::number(7.0));
/// assert_eq!(ops::get(&obj, "a").unwrap(), Value::number(7.0));
/// assert!(ops::get(&obj, "b").is_err());
/// ```
pub fn get(target: &Value, key: &str) -> ValueResult {
    match target {
        Value::Object(_) => match target.get_own(key) {
            Some(value) => Ok(value),
            None => {
                ScriptError::reference_error(format!("property '{}' is not defined", key)).throw()
            }
        },
        Value::Array(arr) => {
            if key == "length" {
                Ok(Value::number(arr.borrow().elements.len() as f64))
            } else if let Ok(index) = key.parse::<usize>() {
                match arr.borrow().elements.get(index) {
                    Some(value) => Ok(value.clone()),
                    None => ScriptError::reference_error(format!(
                        "index {} is out of bounds",
                        index
                    ))
                    .throw(),
                }
            } else {
                ScriptError::reference_error(format!("property '{}' is not defined", key)).throw()
            }
        }
        other => ScriptError::type_error(format!(
            "cannot read property '{}' of {}",
            key,
            other.type_of()
        ))
        .throw(),
    }
}

/// Set the value of a property on a value.
///
/// Evaluates to the assigned value, like an assignment expression. Arrays
/// accept numeric indices and grow as needed; any other target than an
/// object or array is a TypeError.
pub fn put(target: &Value, key: &str, value: Value) -> ValueResult {
    match target {
        Value::Object(_) => {
            target.set_own(key, value.clone());
            Ok(value)
        }
        Value::Array(arr) => {
            if let Ok(index) = key.parse::<usize>() {
                let mut borrowed = arr.borrow_mut();
                if index >= borrowed.elements.len() {
                    borrowed.elements.resize(index + 1, Value::Undefined);
                }
                borrowed.elements[index] = value.clone();
                Ok(value)
            } else {
                ScriptError::type_error(format!("cannot assign property '{}' of array", key))
                    .throw()
            }
        }
        other => ScriptError::type_error(format!(
            "cannot assign property '{}' of {}",
            key,
            other.type_of()
        ))
        .throw(),
    }
}

/// Invoke a method on a value.
///
/// Looks up `key`, requires the result to be callable, and calls it with
/// `target` as the receiver. A missing method is a ReferenceError (from
/// the lookup) and a non-callable property is a TypeError; the method's
/// own thrown value propagates unchanged.
///
/// # Examples
///
/// ```
/// use value_core::{ops, Value};
///
/// let obj = Value::object();
/// obj.set_own("id", Value::function(|_this, args| {
///     Ok(args.into_iter().next().unwrap_or(Value::Undefined))
/// }));
/// let result = ops::post(&obj, "id", vec![Value::number(3.0)]).unwrap();
/// assert_eq!(result, Value::number(3.0));
/// ```
pub fn post(target: &Value, key: &str, args: Vec<Value>) -> ValueResult {
    let member = get(target, key)?;
    if member.is_function() {
        member.call(target.clone(), args)
    } else {
        ScriptError::type_error(format!("property '{}' is not a function", key)).throw()
    }
}
