//! cev CLI library: command handlers and logging setup for the `cev` binary.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Environment variable holding the log filter, e.g. `CEV_LOG=cev_eval=trace`.
pub const LOG_ENV: &str = "CEV_LOG";

/// Initialize tracing for debug output.
///
/// Installs a hierarchical subscriber on stderr only when `CEV_LOG` is set.
/// Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var(LOG_ENV).is_ok() {
            let filter = EnvFilter::from_env(LOG_ENV);
            let layer = tracing_tree::HierarchicalLayer::new(2)
                .with_writer(std::io::stderr)
                .with_targets(true)
                .with_bracketed_fields(true);
            tracing_subscriber::registry()
                .with(layer)
                .with(filter)
                .init();
        }
    });
}
