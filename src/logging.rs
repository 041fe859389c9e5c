//! Opt-in tracing bootstrap for embedders that do not install their own
//! subscriber.

use tracing_subscriber::EnvFilter;

use crate::config;

/// Initialize the global tracing subscriber. Calling this more than once
/// (or after an embedder installed its own subscriber) is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter()));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
