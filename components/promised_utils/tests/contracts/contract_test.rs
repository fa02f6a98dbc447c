//! Contract tests for the promised_utils component
//!
//! These tests verify the public API surface: signatures, return shapes,
//! and the contracts application code relies on.

use promise_core::{Promise, PromiseState, RunLoop};
use promised_utils::{all, callback, Aggregated, Eventual, Lifted, PathProxy, RejectionRecord};
use value_core::Value;

mod all_contract {
    use super::*;

    #[test]
    fn all_accepts_mixed_inputs() {
        let tasks = RunLoop::new();
        let pending = tasks.deferred();
        let _aggregate: Aggregated = all(
            &tasks,
            vec![
                Eventual::Ready(Value::number(1.0)),
                Eventual::Pending(pending.promise()),
            ],
        );
    }

    #[test]
    fn all_of_empty_input_is_ready() {
        let tasks = RunLoop::new();
        assert!(matches!(all(&tasks, Vec::new()), Aggregated::Ready(_)));
    }

    #[test]
    fn all_of_nonempty_input_is_eventually() {
        let tasks = RunLoop::new();
        let aggregate = all(&tasks, vec![Eventual::Ready(Value::Undefined)]);
        assert!(matches!(aggregate, Aggregated::Eventually(_)));
    }
}

mod callback_contract {
    use super::*;

    #[test]
    fn callback_returns_a_function_value() {
        let tasks = RunLoop::new();
        let deferred = tasks.deferred();
        let done: Value = callback(&deferred);
        assert!(done.is_function());
    }

    #[test]
    fn callback_is_callable_with_two_arguments() {
        let tasks = RunLoop::new();
        let deferred = tasks.deferred();
        let done = callback(&deferred);
        done.call(Value::Undefined, vec![Value::Null, Value::number(1.0)])
            .unwrap();
        assert_eq!(deferred.promise().state(), PromiseState::Fulfilled);
    }
}

mod lifted_contract {
    use super::*;

    #[test]
    fn lifted_new_and_sync_return_self() {
        let tasks = RunLoop::new();
        let callee = Value::function(|_this, _args| Ok(Value::Undefined));
        let _async_mode: Lifted = Lifted::new(&tasks, "f", callee.clone());
        let _sync_mode: Lifted = Lifted::sync(&tasks, "f", callee);
    }

    #[test]
    fn lifted_exposes_its_label() {
        let tasks = RunLoop::new();
        let f = Lifted::new(
            &tasks,
            "labeled",
            Value::function(|_this, _args| Ok(Value::Undefined)),
        );
        assert_eq!(f.label(), "labeled");
    }

    #[test]
    fn call_returns_a_promise() {
        let tasks = RunLoop::new();
        let f = Lifted::sync(
            &tasks,
            "f",
            Value::function(|_this, _args| Ok(Value::Undefined)),
        );
        let _result: Promise = f.call(vec![]);
    }

    #[test]
    fn rejection_reasons_decode_as_records() {
        let tasks = RunLoop::new();
        let f = Lifted::sync(
            &tasks,
            "thrower",
            Value::function(|_this, _args| Err(Value::string("x"))),
        );
        let result = f.call(vec![]);
        tasks.run_until_done();

        let reason = result.reason().expect("must reject");
        let record = RejectionRecord::from_value(&reason).expect("must decode");
        assert_eq!(record.at, "thrower");
    }
}

mod path_proxy_contract {
    use super::*;

    #[test]
    fn proxy_wraps_immediate_and_pending_values() {
        let tasks = RunLoop::new();
        let _from_value = PathProxy::new(&tasks, Value::object());
        let _from_promise = PathProxy::new(&tasks, tasks.deferred().promise());
    }

    #[test]
    fn get_and_invoke_return_proxies_set_returns_promise() {
        let tasks = RunLoop::new();
        let proxy = PathProxy::new(&tasks, Value::object());
        let _got: PathProxy = proxy.get("a");
        let _invoked: PathProxy = proxy.invoke("a", None);
        let _set: Promise = proxy.set("a", Value::number(1.0));
    }

    #[test]
    fn proxy_exposes_its_promise() {
        let tasks = RunLoop::new();
        let proxy = PathProxy::new(&tasks, Value::number(1.0));
        let _promise: Promise = proxy.promise();
    }
}
