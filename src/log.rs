// src/log.rs
use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::consts::DEFAULT_LOG_FILTER;

static INIT: Once = Once::new();

/// Install the stderr subscriber once. Filter comes from `RUST_LOG`; when unset
/// nothing is emitted, so shims add no output of their own.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init()
            .ok();
    });
}
