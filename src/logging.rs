//! Logging configuration using tracing.
//!
//! Events go to stderr so stdout stays reserved for command output. Filtering
//! follows `RUST_LOG` and defaults to `warn`, e.g. `RUST_LOG=talendroutine=debug`
//! shows the generated ids and every exported jar.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::domain::AppError;

/// Initialize the tracing subscriber.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init() -> Result<(), AppError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init()
        .map_err(|e| AppError::InternalError(format!("Failed to initialize tracing: {}", e)))
}
