//! Entry point for the engine's end-to-end scenario tests. Cargo only
//! auto-discovers top-level `tests/*.rs` files, so the actual scenarios
//! live in `tests/engine/scenarios.rs` and are pulled in here, mirroring
//! `tests/integration_tests.rs`'s `mod integration;` layout.
#![cfg(feature = "engine")]

mod scenarios;
