//! Structured logging using **tracing**.
//!
//! Matchers emit `trace!` events for matching branches (and, when enabled
//! through [`MatchConfig::trace_misses`](crate::MatchConfig), for failing
//! ones) plus a `debug!` event whenever a terminal call falls back to its
//! default. Nothing is printed unless the host installs a subscriber.

/// Initializes a JSON tracing subscriber on stderr.
///
/// Meant for binaries and test harnesses embedding casewise. A subscriber
/// that is already installed is left in place, so calling this more than once
/// is harmless.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls log filtering (e.g., `RUST_LOG=casewise_core=trace`)
pub fn init_structured_logging() {
    let _ = tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_current_span(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{match_on, MatchConfig};

    #[test]
    fn test_init_is_idempotent() {
        init_structured_logging();
        init_structured_logging();

        let cfg = MatchConfig::new().with_label("logging").with_trace_misses(true);
        let n = match_on(7i32)
            .with_config(&cfg)
            .when(0, "zero")
            .when(7, "seven")
            .otherwise("other");
        assert_eq!(n, "seven");
    }
}
