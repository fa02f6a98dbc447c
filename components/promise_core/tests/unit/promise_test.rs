//! Unit tests for Promise and Deferred

use promise_core::{PromiseState, RunLoop};
use std::cell::RefCell;
use std::rc::Rc;
use value_core::Value;

#[test]
fn new_promise_is_pending() {
    let tasks = RunLoop::new();
    let promise = tasks.deferred().promise();
    assert_eq!(promise.state(), PromiseState::Pending);
    assert!(promise.result().is_none());
    assert!(promise.reason().is_none());
}

#[test]
fn resolve_changes_state_to_fulfilled() {
    let tasks = RunLoop::new();
    let deferred = tasks.deferred();
    deferred.resolve(Value::number(42.0));
    assert_eq!(deferred.promise().state(), PromiseState::Fulfilled);
}

#[test]
fn reject_changes_state_to_rejected() {
    let tasks = RunLoop::new();
    let deferred = tasks.deferred();
    deferred.reject(Value::string("oops"));
    assert_eq!(deferred.promise().state(), PromiseState::Rejected);
}

#[test]
fn cannot_resolve_already_fulfilled_promise() {
    let tasks = RunLoop::new();
    let deferred = tasks.deferred();
    deferred.resolve(Value::number(42.0));
    deferred.resolve(Value::number(100.0));
    assert_eq!(deferred.promise().result(), Some(Value::number(42.0)));
}

#[test]
fn cannot_reject_already_fulfilled_promise() {
    let tasks = RunLoop::new();
    let deferred = tasks.deferred();
    deferred.resolve(Value::number(42.0));
    deferred.reject(Value::string("late"));
    assert_eq!(deferred.promise().state(), PromiseState::Fulfilled);
}

#[test]
fn cannot_resolve_already_rejected_promise() {
    let tasks = RunLoop::new();
    let deferred = tasks.deferred();
    deferred.reject(Value::string("oops"));
    deferred.resolve(Value::number(1.0));
    assert_eq!(deferred.promise().state(), PromiseState::Rejected);
    assert_eq!(deferred.promise().reason(), Some(Value::string("oops")));
}

#[test]
fn clones_observe_the_same_settlement() {
    let tasks = RunLoop::new();
    let deferred = tasks.deferred();
    let first = deferred.promise();
    let second = first.clone();
    deferred.resolve(Value::string("shared"));
    assert_eq!(first.result(), second.result());
}

#[test]
fn fulfillment_continuation_receives_value() {
    let tasks = RunLoop::new();
    let deferred = tasks.deferred();
    let seen = Rc::new(RefCell::new(None));

    let out = Rc::clone(&seen);
    deferred.promise().when(
        move |value| *out.borrow_mut() = Some(value),
        |_reason| panic!("must not reject"),
    );

    deferred.resolve(Value::number(5.0));
    tasks.run_until_done();
    assert_eq!(*seen.borrow(), Some(Value::number(5.0)));
}

#[test]
fn rejection_continuation_receives_reason() {
    let tasks = RunLoop::new();
    let deferred = tasks.deferred();
    let seen = Rc::new(RefCell::new(None));

    let out = Rc::clone(&seen);
    deferred.promise().when(
        |_value| panic!("must not fulfill"),
        move |reason| *out.borrow_mut() = Some(reason),
    );

    deferred.reject(Value::string("boom"));
    tasks.run_until_done();
    assert_eq!(*seen.borrow(), Some(Value::string("boom")));
}

#[test]
fn continuation_registered_after_settlement_runs_on_next_drain() {
    let tasks = RunLoop::new();
    let promise = tasks.fulfilled(Value::number(9.0));
    let seen = Rc::new(RefCell::new(None));

    let out = Rc::clone(&seen);
    promise.when(
        move |value| *out.borrow_mut() = Some(value),
        |_reason| panic!("must not reject"),
    );

    assert!(seen.borrow().is_none());
    tasks.run_until_done();
    assert_eq!(*seen.borrow(), Some(Value::number(9.0)));
}

#[test]
fn settlement_never_runs_continuations_inline() {
    let tasks = RunLoop::new();
    let deferred = tasks.deferred();
    let ran = Rc::new(RefCell::new(false));

    let flag = Rc::clone(&ran);
    deferred.promise().when(
        move |_value| *flag.borrow_mut() = true,
        |_reason| panic!("must not reject"),
    );

    deferred.resolve(Value::Undefined);
    assert!(!*ran.borrow());
    tasks.run_until_done();
    assert!(*ran.borrow());
}
