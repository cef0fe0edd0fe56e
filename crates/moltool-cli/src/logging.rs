use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

static INIT: OnceLock<()> = OnceLock::new();

/// Initialize diagnostics on stderr, filtered by `RUST_LOG` (default `warn`).
///
/// Prompts and results go to stdout directly; only diagnostics use `tracing`.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let subscriber = Registry::default().with(filter).with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        );
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
