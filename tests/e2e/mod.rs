//! End-to-end tests against a live TaskHub backend
//!
//! Ignored by default; run with `cargo test -- --ignored` and set
//! `TASKHUB_BASE_URL`, `TASKHUB_LOGIN` and `TASKHUB_PASSWORD`.

pub mod live_backend;
