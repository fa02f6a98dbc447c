//! Combinators for working with values that may not yet be available.
//!
//! This crate lets ordinary functions operate transparently over pending
//! values:
//! - [`all`] - Aggregate a sequence of immediate or pending inputs into
//!   one pending sequence of results
//! - [`callback`] - Bridge an `(error, value)` completion callback into
//!   promise settlement
//! - [`Lifted`] - Wrap a callee so its receiver and arguments may be
//!   pending, with structured [`RejectionRecord`] failures
//! - [`PathProxy`] - Deferred property access, assignment, and method
//!   invocation over dot-separated paths
//!
//! # Examples
//!
//! ```
//! use promise_core::RunLoop;
//! use promised_utils::{Eventual, Lifted};
//! use value_core::Value;
//!
//! let tasks = RunLoop::new();
//! let sum = Lifted::sync(&tasks, "sum", Value::function(|_this, args| {
//!     let total = args.iter().filter_map(Value::as_number).sum();
//!     Ok(Value::number(total))
//! }));
//!
//! let pending = tasks.deferred();
//! let result = sum.call(vec![
//!     Eventual::Pending(pending.promise()),
//!     Eventual::Ready(Value::number(3.0)),
//! ]);
//!
//! pending.resolve(Value::number(2.0));
//! tasks.run_until_done();
//! assert_eq!(result.result(), Some(Value::number(5.0)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod all;
pub mod callback;
pub mod eventual;
pub mod lifted;
pub mod path;

pub use all::{all, Aggregated};
pub use callback::callback;
pub use eventual::Eventual;
pub use lifted::{Lifted, RejectionRecord};
pub use path::PathProxy;
