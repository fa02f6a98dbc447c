//! Cooperative run loop.
//!
//! The run loop coordinates task and microtask execution: each cycle runs
//! one task, then drains the microtask queue completely. Promises hold a
//! clone of their run loop handle so settlement can schedule continuations
//! without any global state.

use std::cell::RefCell;
use std::rc::Rc;

use value_core::Value;

use crate::promise::{Deferred, Promise};
use crate::task_queue::{Job, MicroJob, MicrotaskQueue, TaskQueue};

/// The cooperative run loop.
///
/// `RunLoop` is a clonable handle over shared queues; clones enqueue into
/// and drain the same loop. Jobs are dequeued before they run, so a job
/// may enqueue further work into the loop that is running it.
///
/// # Examples
///
/// ```
/// use promise_core::{Job, RunLoop};
///
/// let tasks = RunLoop::new();
/// tasks.enqueue_task(Job::new(|| {}));
/// tasks.run_until_done();
/// assert!(tasks.is_task_queue_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RunLoop {
    inner: Rc<RefCell<Queues>>,
}

#[derive(Debug, Default)]
struct Queues {
    tasks: TaskQueue,
    microtasks: MicrotaskQueue,
}

impl RunLoop {
    /// Creates a new run loop with empty queues.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a task to the task queue.
    pub fn enqueue_task(&self, job: Job) {
        self.inner.borrow_mut().tasks.enqueue(job);
    }

    /// Adds a microtask to the microtask queue.
    pub fn enqueue_microtask(&self, microtask: MicroJob) {
        self.inner.borrow_mut().microtasks.enqueue(microtask);
    }

    /// Returns true if the task queue is empty.
    pub fn is_task_queue_empty(&self) -> bool {
        self.inner.borrow().tasks.is_empty()
    }

    /// Returns true if the microtask queue is empty.
    pub fn is_microtask_queue_empty(&self) -> bool {
        self.inner.borrow().microtasks.is_empty()
    }

    /// Runs the loop until both queues are empty.
    ///
    /// Each iteration executes one task (if available) and then drains all
    /// microtasks, including microtasks enqueued while draining.
    pub fn run_until_done(&self) {
        loop {
            let idle = {
                let queues = self.inner.borrow();
                queues.tasks.is_empty() && queues.microtasks.is_empty()
            };
            if idle {
                break;
            }

            let job = self.inner.borrow_mut().tasks.dequeue();
            if let Some(job) = job {
                job.run();
            }

            self.run_all_microtasks();
        }
    }

    /// Runs all microtasks in the queue until empty.
    ///
    /// New microtasks added during execution are also processed before
    /// this method returns.
    pub fn run_all_microtasks(&self) {
        loop {
            let microtask = self.inner.borrow_mut().microtasks.dequeue();
            match microtask {
                Some(microtask) => microtask.run(),
                None => break,
            }
        }
    }

    /// Processes one complete cycle: one task followed by all microtasks.
    pub fn process_one_cycle(&self) {
        let job = self.inner.borrow_mut().tasks.dequeue();
        if let Some(job) = job {
            job.run();
        }

        self.run_all_microtasks();
    }

    /// Creates a new pending promise with its settle capability.
    pub fn deferred(&self) -> Deferred {
        Deferred::new(self)
    }

    /// Creates a promise already fulfilled with `value`.
    pub fn fulfilled(&self, value: Value) -> Promise {
        let deferred = self.deferred();
        deferred.resolve(value);
        deferred.promise()
    }

    /// Creates a promise already rejected with `reason`.
    pub fn rejected(&self, reason: Value) -> Promise {
        let deferred = self.deferred();
        deferred.reject(reason);
        deferred.promise()
    }
}
