//! Logging bootstrap for the writer utility.
//!
//! Diagnostics go to standard error through a `tracing-subscriber` fmt
//! sink. Verbosity comes from `WRITER_LOG`, then `RUST_LOG`, then the
//! fixed default.

use tracing_subscriber::EnvFilter;

/// Default filter when neither `WRITER_LOG` nor `RUST_LOG` is set.
///
/// `debug` keeps the per-invocation intent entry visible.
const DEFAULT_FILTER: &str = "debug";

/// Install the global subscriber. Call once at process startup.
pub fn init() {
    let filter = EnvFilter::try_from_env("WRITER_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
