//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`; user-facing progress is
//! printed separately by the command layer.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber
///
/// `RUST_LOG` takes precedence. Otherwise only warnings are shown, or
/// everything from this crate at debug level when `verbose` is set.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(verbose: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()?;

    Ok(())
}

const fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "warn,make_crud=debug"
    } else {
        "warn"
    }
}
