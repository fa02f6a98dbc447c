//! Script error types.
//!
//! Failures raised by property operations and callees are represented as
//! [`ScriptError`] values. A `ScriptError` is itself convertible into a
//! [`Value`](crate::Value), because rejection reasons and thrown values are
//! ordinary script values in this model.

use std::fmt;

use thiserror::Error;

/// The kind of script error.
///
/// These correspond to the script-visible error constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Generic error
    Error,
    /// Type mismatch (e.g. calling a non-function)
    TypeError,
    /// Access to a property that does not exist
    ReferenceError,
    /// Value out of allowed range
    RangeError,
    /// Internal invariant violation
    InternalError,
}

impl ErrorKind {
    /// Get the error name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Error => "Error",
            ErrorKind::TypeError => "TypeError",
            ErrorKind::ReferenceError => "ReferenceError",
            ErrorKind::RangeError => "RangeError",
            ErrorKind::InternalError => "InternalError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A structured script error with kind and message.
///
/// # Examples
///
/// ```
/// use value_core::{ErrorKind, ScriptError};
///
/// let error = ScriptError::type_error("undefined is not a function");
/// assert_eq!(error.kind, ErrorKind::TypeError);
/// assert_eq!(error.to_string(), "TypeError: undefined is not a function");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ScriptError {
    /// The kind of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl ScriptError {
    /// Create a new error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        ScriptError {
            kind,
            message: message.into(),
        }
    }

    /// Create a TypeError.
    pub fn type_error(message: impl Into<String>) -> Self {
        ScriptError::new(ErrorKind::TypeError, message)
    }

    /// Create a ReferenceError.
    pub fn reference_error(message: impl Into<String>) -> Self {
        ScriptError::new(ErrorKind::ReferenceError, message)
    }

    /// Create a RangeError.
    pub fn range_error(message: impl Into<String>) -> Self {
        ScriptError::new(ErrorKind::RangeError, message)
    }

    /// Create an InternalError.
    pub fn internal_error(message: impl Into<String>) -> Self {
        ScriptError::new(ErrorKind::InternalError, message)
    }

    /// Convert this error into the `Err` channel of a [`ValueResult`].
    ///
    /// [`ValueResult`]: crate::ValueResult
    pub fn throw<T>(self) -> Result<T, crate::Value> {
        Err(self.into())
    }
}
