#![allow(dead_code)]

// Logging is installed once per test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}
