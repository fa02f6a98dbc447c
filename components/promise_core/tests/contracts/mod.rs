//! Contract test suite for promise_core
