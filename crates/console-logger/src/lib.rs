//! Console Logger
//!
//! Installs the global tracing subscriber. In the browser events go to the
//! devtools console, natively they go to stderr filtered by `RUST_LOG`.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;

/// Level used when nothing else is configured
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::INFO;

/// Initialize logging, ignoring a subscriber that is already installed
pub fn init() {
    let registry = tracing_subscriber::registry();

    #[cfg(target_family = "wasm")]
    let registry = {
        let layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .without_time()
            .with_level(false)
            .with_writer(tracing_web::MakeWebConsoleWriter::new().with_pretty_level())
            .with_filter(DEFAULT_LEVEL);
        registry.with(layer)
    };

    #[cfg(not(target_family = "wasm"))]
    let registry = {
        let filter = tracing_subscriber::EnvFilter::builder()
            .with_default_directive(DEFAULT_LEVEL.into())
            .from_env_lossy();
        let layer = tracing_subscriber::fmt::layer().with_filter(filter);
        registry.with(layer)
    };

    if registry.try_init().is_err() {
        tracing::debug!("logger already initialized");
    }
}
