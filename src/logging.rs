//! Diagnostic tracing, kept apart from the user-facing conversation.
//!
//! The session talks to the user on stdout. Tracing goes to stderr and is
//! silent below `warn` unless asked for:
//!
//! ```bash
//! RETOUCH_LOG=retouch=debug retouch
//! ```
//!
//! `RETOUCH_LOG` wins over `RUST_LOG`; an unparsable filter falls back to
//! the default.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::constants::ENV_LOG;
use crate::env::Env;

const DEFAULT_FILTER: &str = "warn";

/// Build the filter from the environment.
pub fn filter(env: &Env) -> EnvFilter {
    env.var(ENV_LOG)
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(env: &Env) {
    let _ = tracing_subscriber::registry()
        .with(filter(env))
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
