//! Integration tests driving the full client stack against the mock backend

pub mod admin_flow_tests;
