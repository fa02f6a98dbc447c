//! Unit tests for the aggregator

use promise_core::{PromiseState, RunLoop};
use promised_utils::{all, Aggregated};
use value_core::Value;

fn expect_promise(aggregate: Aggregated) -> promise_core::Promise {
    match aggregate {
        Aggregated::Eventually(promise) => promise,
        Aggregated::Ready(values) => panic!("expected a promise, got {:?}", values),
    }
}

#[test]
fn resolve_several() {
    let tasks = RunLoop::new();
    let d1 = tasks.deferred();
    let d2 = tasks.deferred();
    let promise = expect_promise(all(
        &tasks,
        vec![d1.promise().into(), d2.promise().into()],
    ));

    d1.resolve(Value::number(1.0));
    d2.resolve(Value::number(2.0));
    tasks.run_until_done();

    let result = promise.result().expect("aggregate must fulfill");
    assert_eq!(result.array_get(0), Some(Value::number(1.0)));
    assert_eq!(result.array_get(1), Some(Value::number(2.0)));
}

#[test]
fn reject_one() {
    let tasks = RunLoop::new();
    let d1 = tasks.deferred();
    let d2 = tasks.deferred();
    let promise = expect_promise(all(
        &tasks,
        vec![d1.promise().into(), d2.promise().into()],
    ));

    d2.reject(Value::string("oops"));
    tasks.run_until_done();

    assert_eq!(promise.state(), PromiseState::Rejected);
    assert_eq!(promise.reason(), Some(Value::string("oops")));
}

#[test]
fn empty_input_yields_bare_empty_sequence() {
    let tasks = RunLoop::new();
    match all(&tasks, Vec::new()) {
        Aggregated::Ready(values) => assert_eq!(values, Vec::<Value>::new()),
        Aggregated::Eventually(_) => panic!("empty input must not produce a promise"),
    }
}

#[test]
fn settlement_order_does_not_affect_slot_order() {
    let tasks = RunLoop::new();
    let d1 = tasks.deferred();
    let d2 = tasks.deferred();
    let d3 = tasks.deferred();
    let promise = expect_promise(all(
        &tasks,
        vec![d1.promise().into(), d2.promise().into(), d3.promise().into()],
    ));

    d3.resolve(Value::string("c"));
    d1.resolve(Value::string("a"));
    d2.resolve(Value::string("b"));
    tasks.run_until_done();

    assert_eq!(
        promise.result(),
        Some(Value::array_from(vec![
            Value::string("a"),
            Value::string("b"),
            Value::string("c"),
        ]))
    );
}

#[test]
fn immediate_values_pass_through() {
    let tasks = RunLoop::new();
    let promise = expect_promise(all(
        &tasks,
        vec![Value::number(1.0).into(), Value::number(2.0).into()],
    ));

    tasks.run_until_done();
    assert_eq!(
        promise.result(),
        Some(Value::array_from(vec![
            Value::number(1.0),
            Value::number(2.0)
        ]))
    );
}

#[test]
fn aggregate_ignores_settlements_after_rejection() {
    let tasks = RunLoop::new();
    let d1 = tasks.deferred();
    let d2 = tasks.deferred();
    let promise = expect_promise(all(
        &tasks,
        vec![d1.promise().into(), d2.promise().into()],
    ));

    d1.reject(Value::string("first"));
    d2.reject(Value::string("second"));
    tasks.run_until_done();

    assert_eq!(promise.reason(), Some(Value::string("first")));
}
