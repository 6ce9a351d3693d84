//! Integration test crate for TimeCalc.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on every timecalc crate to verify they work together.

#[cfg(test)]
mod arithmetic;


/// Install a test-friendly tracing subscriber. Safe to call from every test.
#[cfg(test)]
pub(crate) fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
