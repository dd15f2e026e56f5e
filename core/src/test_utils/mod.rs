//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - mockall fights with reference parameters on async traits
//! - Manual mocks are explicit and easy to debug
//! - We control exactly what they return, including holding a fetch in
//!   flight behind a semaphore gate, without macro magic

pub mod fixtures;

pub use fixtures::*;
pub use mocks::*;

/// Install a fmt subscriber so a test run can show controller logs
/// (`RUST_LOG=homefeed_core=debug cargo test -- --nocapture`).
/// Safe to call from any number of tests; later calls are no-ops.
pub fn init_test_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("homefeed_core=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
