//! Pending-value primitive and cooperative run loop.
//!
//! This crate provides the deferred/promise primitive the combinator crate
//! composes, together with the single-threaded run loop that dispatches
//! settlement continuations:
//! - [`RunLoop`] - Cooperative loop with task and microtask queues
//! - [`Promise`] - Shared read handle on an eventually settled value
//! - [`Deferred`] - The settle capability for one promise
//!
//! Continuations registered on a promise never run inside the call that
//! settles it; they are dispatched through the run loop's microtask queue
//! on the next drain.
//!
//! # Examples
//!
//! ```
//! use promise_core::{PromiseState, RunLoop};
//! use value_core::Value;
//!
//! let tasks = RunLoop::new();
//! let deferred = tasks.deferred();
//! let promise = deferred.promise();
//!
//! promise.when(
//!     |value| assert_eq!(value, Value::number(42.0)),
//!     |_reason| panic!("must not reject"),
//! );
//!
//! deferred.resolve(Value::number(42.0));
//! tasks.run_until_done();
//! assert_eq!(promise.state(), PromiseState::Fulfilled);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod promise;
pub mod run_loop;
pub mod task_queue;

pub use promise::{Deferred, Promise, PromiseState};
pub use run_loop::RunLoop;
pub use task_queue::{Job, MicroJob, MicrotaskQueue, TaskQueue};
