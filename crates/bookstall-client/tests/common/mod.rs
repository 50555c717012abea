//! Shared test harness plumbing.

use std::sync::Once;

static INIT: Once = Once::new();

/// Installs a logging subscriber for the test binary, once. Verbosity is
/// driven by `RUST_LOG`; output is captured per test.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
