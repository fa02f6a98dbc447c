//! Core script value types, errors, and property operations.
//!
//! This crate provides the foundational types for the promised combinator
//! workspace: a dynamically typed value representation, structured script
//! errors, and the property access operations used for deferred path
//! traversal.
//!
//! # Overview
//!
//! - [`Value`] - Dynamically typed script value
//! - [`ValueResult`] - Result whose error channel carries a thrown value
//! - [`ScriptError`] - Structured script error with kind and message
//! - [`ErrorKind`] - Kinds of script errors
//! - [`ops`] - Property lookup, assignment, and method dispatch
//!
//! # Examples
//!
//! ```
//! use value_core::{ops, ScriptError, Value};
//!
//! let obj = Value::object();
//! obj.set_own("answer", Value::number(42.0));
//!
//! assert_eq!(ops::get(&obj, "answer").unwrap(), Value::number(42.0));
//! assert!(ops::get(&obj, "question").is_err());
//!
//! // Thrown values are ordinary values.
//! let thrown: Value = ScriptError::type_error("not callable").into();
//! assert!(thrown.is_error());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
pub mod ops;
mod value;

pub use error::{ErrorKind, ScriptError};
pub use value::{ArrayData, FunctionData, ObjectData, Value, ValueResult};
